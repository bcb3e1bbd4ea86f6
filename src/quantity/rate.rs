use std::fmt::{Debug, Display, Formatter};

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::quantity::Quantity;

/// Brazilian reals per kilowatt-hour.
///
/// Kept as an exact decimal so that the flag surcharges add up without binary rounding.
pub type KilowattHourRate = Quantity<Decimal, -1, -1, 1>;

impl KilowattHourRate {
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Convert to the floating-point domain where the energy and cost arithmetic happens.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        // Every `Decimal` is representable (possibly rounded) as `f64`.
        self.0.to_f64().unwrap_or_default()
    }

    #[must_use]
    pub fn is_sign_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {:.3}/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R${}/kWh", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(KilowattHourRate::from_decimal(Decimal::new(744, 3)).to_string(), "R$ 0.744/kWh");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0.85".parse::<KilowattHourRate>().unwrap(), KilowattHourRate::from(Decimal::new(85, 2)));
    }

    #[test]
    fn test_is_sign_negative() {
        assert!(KilowattHourRate::from(Decimal::new(-1, 1)).is_sign_negative());
        assert!(!KilowattHourRate::ZERO.is_sign_negative());
    }
}
