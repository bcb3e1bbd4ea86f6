use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quantity::{Quantity, rate::KilowattHourRate};

/// ANEEL tariff flag («bandeira tarifária»), which adds a surcharge on top of the base rate
/// depending on the grid supply conditions.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TariffFlag {
    /// No surcharge.
    #[default]
    #[value(alias = "verde")]
    #[serde(alias = "verde")]
    Green,

    #[value(alias = "amarela")]
    #[serde(alias = "amarela")]
    Yellow,

    #[value(name = "red-p1", alias = "vermelha-p1")]
    #[serde(rename = "red-p1", alias = "vermelha-p1")]
    RedP1,

    /// Highest surcharge.
    #[value(name = "red-p2", alias = "vermelha-p2")]
    #[serde(rename = "red-p2", alias = "vermelha-p2")]
    RedP2,
}

impl TariffFlag {
    pub const fn surcharge(self) -> KilowattHourRate {
        match self {
            Self::Green => KilowattHourRate::ZERO,
            Self::Yellow => thousandths(18),
            Self::RedP1 => thousandths(44),
            Self::RedP2 => thousandths(78),
        }
    }

    /// Base rate plus the flag surcharge.
    pub fn apply(self, base_rate: KilowattHourRate) -> KilowattHourRate {
        base_rate + self.surcharge()
    }
}

impl Display for TariffFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Green => write!(f, "Green"),
            Self::Yellow => write!(f, "Yellow"),
            Self::RedP1 => write!(f, "Red P1"),
            Self::RedP2 => write!(f, "Red P2"),
        }
    }
}

const fn thousandths(value: u32) -> KilowattHourRate {
    Quantity(Decimal::from_parts(value, 0, 0, false, 3))
}
