use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    estimate::{CostEstimate, payback::Payback},
    quantity::cost::Cost,
};

/// Months in the long-run savings projection.
pub const PROJECTION_MONTHS: f64 = 60.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Side {
    A,
    B,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Verdict {
    /// Both sides are the very same brand and model.
    Identical,

    /// Running costs and purchase prices are within a cent of each other.
    Tie,

    Winner { side: Side, monthly_savings: Cost },
}

impl Verdict {
    pub fn new(a: &CostEstimate, b: &CostEstimate) -> Self {
        if a.is_same_appliance(b) {
            return Self::Identical;
        }
        if a.monthly_cost.is_within_cent_of(b.monthly_cost)
            && a.purchase_price.is_within_cent_of(b.purchase_price)
        {
            return Self::Tie;
        }
        let side = if a.monthly_cost < b.monthly_cost {
            Side::A
        } else if b.monthly_cost < a.monthly_cost {
            Side::B
        } else if a.purchase_price < b.purchase_price {
            Side::A
        } else {
            Side::B
        };
        Self::Winner { side, monthly_savings: (a.monthly_cost - b.monthly_cost).abs() }
    }

    /// Savings over [`PROJECTION_MONTHS`], only when there is anything to save.
    #[must_use]
    pub fn five_year_savings(self) -> Option<Cost> {
        match self {
            Self::Winner { monthly_savings, .. } if monthly_savings > Cost::ZERO => {
                Some(monthly_savings * PROJECTION_MONTHS)
            }
            _ => None,
        }
    }
}

/// Full comparison of the two options.
#[must_use]
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct Comparison<'a> {
    pub a: &'a CostEstimate,
    pub b: &'a CostEstimate,
    pub verdict: Verdict,
    pub five_year_savings: Option<Cost>,

    /// How much cheaper to run the winner is, relative to the costlier one.
    pub savings_percentage: f64,

    pub payback: Payback,
}

impl<'a> Comparison<'a> {
    pub fn new(a: &'a CostEstimate, b: &'a CostEstimate) -> Self {
        let verdict = Verdict::new(a, b);
        let (cheaper_to_run, costlier_to_run) =
            if a.monthly_cost <= b.monthly_cost { (a, b) } else { (b, a) };
        let payback = Payback::months(
            cheaper_to_run.purchase_price - costlier_to_run.purchase_price,
            costlier_to_run.monthly_cost - cheaper_to_run.monthly_cost,
        );
        Self {
            a,
            b,
            verdict,
            five_year_savings: verdict.five_year_savings(),
            savings_percentage: savings_percentage(a.monthly_cost, b.monthly_cost),
            payback,
        }
    }
}

/// Relative difference between the two running costs, in percent of the higher one.
#[must_use]
pub fn savings_percentage(lhs: Cost, rhs: Cost) -> f64 {
    let higher = lhs.max(rhs);
    if higher > Cost::ZERO { (higher - lhs.min(rhs)) / higher * 100.0 } else { 0.0 }
}
