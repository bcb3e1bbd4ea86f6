use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, rate::KilowattHourRate};

pub type KilowattHours = Quantity<f64, 1, 1, 0>;

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}kWh", self.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Quantity(self.0 * rhs.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_mul_rate() {
        let cost = KilowattHours::from(100.0) * KilowattHourRate::from(Decimal::new(85, 2));
        assert_abs_diff_eq!(cost.0, 85.0, epsilon = 1e-9);
    }
}
