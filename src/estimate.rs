pub mod comparison;
pub mod payback;
pub mod usage;

use std::ops::RangeInclusive;

use serde::Serialize;

pub use self::{
    comparison::{Comparison, Side, Verdict},
    payback::Payback,
    usage::UsageProfile,
};
use crate::{
    catalog::ApplianceRecord,
    error::{Error, Result},
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

const DAYS_PER_YEAR: f64 = 365.0;

/// Months covered by the cumulative cost curve, both ends included.
pub const CURVE_MONTHS: RangeInclusive<u32> = 0..=36;

/// Rescale the nameplate annual consumption to the actual usage and price it.
///
/// This is a linear approximation, not a physical model of the appliance.
pub fn monthly_cost(
    annual_consumption: KilowattHours,
    rate: KilowattHourRate,
    usage: UsageProfile,
) -> Cost {
    let daily_consumption = annual_consumption / DAYS_PER_YEAR;
    let monthly_consumption = daily_consumption
        * f64::from(usage.hours_per_day())
        * f64::from(usage.days_per_month());
    monthly_consumption * rate
}

/// Total spent by the end of the month: purchase price plus the energy bills so far.
pub fn accumulated_cost(purchase_price: Cost, monthly_cost: Cost, month: u32) -> Cost {
    purchase_price + monthly_cost * f64::from(month)
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, bon::Builder)]
pub struct CostEstimate {
    #[builder(into)]
    pub brand: String,

    #[builder(into)]
    pub model: String,

    pub purchase_price: Cost,
    pub monthly_cost: Cost,
}

impl CostEstimate {
    #[must_use]
    pub fn is_same_appliance(&self, other: &Self) -> bool {
        self.brand == other.brand && self.model == other.model
    }

    pub fn accumulated_cost(&self, month: u32) -> Cost {
        accumulated_cost(self.purchase_price, self.monthly_cost, month)
    }

    /// Accumulated cost for every month of [`CURVE_MONTHS`].
    pub fn cumulative_costs(&self) -> impl Iterator<Item = (u32, Cost)> {
        CURVE_MONTHS.map(|month| (month, self.accumulated_cost(month)))
    }
}

impl std::fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.brand, self.model)
    }
}

/// Prices catalog records at the chosen tariff and usage.
#[derive(Copy, Clone, Debug, bon::Builder)]
pub struct Estimator {
    rate: KilowattHourRate,

    #[builder(default)]
    usage: UsageProfile,
}

impl Estimator {
    #[must_use]
    pub const fn rate(&self) -> KilowattHourRate {
        self.rate
    }

    #[must_use]
    pub const fn usage(&self) -> UsageProfile {
        self.usage
    }

    /// Estimate the record, falling back to its catalog price when no price is given.
    pub fn estimate(
        &self,
        record: &ApplianceRecord,
        purchase_price: Option<Cost>,
    ) -> Result<CostEstimate> {
        let annual_consumption =
            record.annual_consumption.ok_or_else(|| Error::MissingConsumption {
                brand: record.brand.clone(),
                model: record.model.clone(),
            })?;
        Ok(CostEstimate::builder()
            .brand(&record.brand)
            .model(&record.model)
            .purchase_price(purchase_price.unwrap_or(record.price))
            .monthly_cost(monthly_cost(annual_consumption, self.rate, self.usage))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::catalog::BtuPerHour;

    fn rate(text: &str) -> KilowattHourRate {
        text.parse().unwrap()
    }

    fn usage(hours_per_day: u8, days_per_month: u8) -> UsageProfile {
        UsageProfile::try_new(hours_per_day, days_per_month).unwrap()
    }

    #[test]
    fn test_monthly_cost_worked_figure() {
        let cost = monthly_cost(KilowattHours::from(550.0), rate("0.85"), usage(8, 30));
        assert_abs_diff_eq!(cost.0, 550.0 / 365.0 * 8.0 * 30.0 * 0.85, epsilon = 1e-12);
        assert_abs_diff_eq!(cost.0, 307.40, epsilon = 0.005);
    }

    #[test]
    fn test_monthly_cost_non_negative() {
        for hours in UsageProfile::HOURS_PER_DAY {
            for days in UsageProfile::DAYS_PER_MONTH {
                let cost = monthly_cost(KilowattHours::ZERO, rate("0.85"), usage(hours, days));
                assert!(cost >= Cost::ZERO);
                let cost = monthly_cost(KilowattHours::from(900.0), rate("0"), usage(hours, days));
                assert!(cost >= Cost::ZERO);
            }
        }
    }

    #[test]
    fn test_monthly_cost_linear() {
        let annual = KilowattHours::from(550.0);
        let base = monthly_cost(annual, rate("0.85"), usage(4, 10));
        assert_abs_diff_eq!(
            monthly_cost(annual, rate("0.85"), usage(12, 10)).0,
            base.0 * 3.0,
            epsilon = 1e-9,
        );
        assert_abs_diff_eq!(
            monthly_cost(annual, rate("0.85"), usage(4, 30)).0,
            base.0 * 3.0,
            epsilon = 1e-9,
        );
        assert_abs_diff_eq!(
            monthly_cost(annual, rate("1.7"), usage(4, 10)).0,
            base.0 * 2.0,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_cumulative_costs() {
        let estimate = CostEstimate::builder()
            .brand("LG")
            .model("S4")
            .purchase_price(Cost::from(2000.0))
            .monthly_cost(Cost::from(100.0))
            .build();
        let curve: Vec<_> = estimate.cumulative_costs().collect();
        assert_eq!(curve.len(), 37);
        assert_eq!(curve[0], (0, Cost::from(2000.0)));
        assert_eq!(curve[36], (36, Cost::from(5600.0)));
    }

    #[test]
    fn test_estimator_uses_catalog_price() -> Result {
        let record = ApplianceRecord::builder()
            .brand("LG")
            .model("S4")
            .btu(BtuPerHour::from(12000.0))
            .annual_consumption(KilowattHours::from(365.0))
            .price(Cost::from(1999.0))
            .build();
        let estimator = Estimator::builder().rate(rate("1")).usage(usage(1, 1)).build();

        let estimate = estimator.estimate(&record, None)?;
        assert_eq!(estimate.purchase_price, Cost::from(1999.0));
        assert_abs_diff_eq!(estimate.monthly_cost.0, 1.0, epsilon = 1e-12);

        let estimate = estimator.estimate(&record, Some(Cost::from(2500.0)))?;
        assert_eq!(estimate.purchase_price, Cost::from(2500.0));
        Ok(())
    }

    #[test]
    fn test_estimator_missing_consumption() {
        let record = ApplianceRecord::builder().brand("LG").model("S4").build();
        let estimator = Estimator::builder().rate(rate("0.85")).build();
        assert!(matches!(
            estimator.estimate(&record, None),
            Err(Error::MissingConsumption { .. }),
        ));
    }
}
