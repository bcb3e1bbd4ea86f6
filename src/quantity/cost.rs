use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Brazilian reals.
pub type Cost = Quantity<f64, 0, 0, 1>;

impl Cost {
    pub const ONE_CENT: Self = Self(0.01);

    /// Whether the two amounts differ by less than a cent.
    pub fn is_within_cent_of(self, other: Self) -> bool {
        (self - other).abs() < Self::ONE_CENT
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(307.397_26).to_string(), "R$ 307.40");
    }

    #[test]
    fn test_is_within_cent_of() {
        assert!(Cost::from(100.0).is_within_cent_of(Cost::from(100.009)));
        assert!(!Cost::from(100.0).is_within_cent_of(Cost::from(100.02)));
    }
}
