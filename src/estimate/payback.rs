use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::quantity::cost::Cost;

/// Paybacks this long or longer are not worth a precise figure.
pub const OVER_TEN_YEARS_MONTHS: f64 = 120.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "months", rename_all = "kebab-case")]
pub enum Payback {
    Months(f64),

    OverTenYears,

    /// The cheaper-to-run option is also the cheaper (or equally priced) one to buy, or both cost
    /// the same to run.
    NotMeaningful,
}

impl Payback {
    /// Months of savings needed to offset a higher purchase price.
    ///
    /// `price_difference` is how much more the cheaper-to-run option costs to buy, and
    /// `monthly_savings` is how much less it costs to run. Both must be positive for a payback to
    /// exist.
    pub fn months(price_difference: Cost, monthly_savings: Cost) -> Self {
        if price_difference <= Cost::ZERO || monthly_savings <= Cost::ZERO {
            return Self::NotMeaningful;
        }
        let months = price_difference / monthly_savings;
        if months >= OVER_TEN_YEARS_MONTHS { Self::OverTenYears } else { Self::Months(months) }
    }
}

impl Display for Payback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Months(months) => write!(f, "{months:.1} months"),
            Self::OverTenYears => write!(f, "over 10 years"),
            Self::NotMeaningful => write!(f, "no meaningful payback"),
        }
    }
}
