use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::quantity::{cost::Cost, energy::KilowattHours};

/// Nominal cooling capacity.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0} BTU/h")]
#[serde(transparent)]
pub struct BtuPerHour(pub OrderedFloat<f64>);

impl From<f64> for BtuPerHour {
    fn from(value: f64) -> Self {
        Self(OrderedFloat(value))
    }
}

/// One catalog row, as written to and read from the clean catalog file.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, bon::Builder)]
pub struct ApplianceRecord {
    #[builder(into)]
    #[serde(rename = "Marca")]
    pub brand: String,

    #[builder(into)]
    #[serde(rename = "Modelo")]
    pub model: String,

    #[builder(into, default)]
    #[serde(rename = "Tipo")]
    pub category: String,

    /// Missing when the source value failed numeric coercion.
    #[serde(rename = "BTU")]
    pub btu: Option<BtuPerHour>,

    #[serde(rename = "Consumo")]
    pub annual_consumption: Option<KilowattHours>,

    #[builder(into, default)]
    #[serde(rename = "IDRS")]
    pub efficiency_label: String,

    /// Vendor exports carry no prices, so this is never written out.
    #[builder(default)]
    #[serde(skip)]
    pub price: Cost,
}

impl ApplianceRecord {
    /// Records with both numeric fields take part in the BTU drill-down.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.btu.is_some() && self.annual_consumption.is_some()
    }

    #[must_use]
    pub fn is_same_appliance(&self, brand: &str, model: &str) -> bool {
        self.brand == brand && self.model == model
    }
}
