//! Rule-of-thumb capacity suggestion for a room.
//!
//! This is a rough heuristic with no engineering standard behind it. It ignores insulation, sun
//! exposure, occupancy and appliances, so treat the result as a starting point only.

use crate::{
    catalog::BtuPerHour,
    error::{Error, Result},
};

pub const BTU_PER_SQUARE_METER: f64 = 700.0;

/// Capacities commonly sold in the market.
pub const COMMERCIAL_SIZES: [f64; 10] =
    [7000.0, 9000.0, 12000.0, 18000.0, 22000.0, 24000.0, 30000.0, 36000.0, 48000.0, 60000.0];

/// Suggest the commercial capacity closest to `area × 700` BTU/h, preferring the smaller one on a
/// tie.
pub fn suggest_btu(area_square_meters: f64) -> Result<BtuPerHour> {
    if !(area_square_meters.is_finite() && area_square_meters > 0.0) {
        return Err(Error::InvalidArea(area_square_meters));
    }
    let target = area_square_meters * BTU_PER_SQUARE_METER;
    let mut best = COMMERCIAL_SIZES[0];
    for size in COMMERCIAL_SIZES {
        if (size - target).abs() < (best - target).abs() {
            best = size;
        }
    }
    Ok(BtuPerHour::from(best))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_btu() -> Result {
        assert_eq!(suggest_btu(1.0)?, BtuPerHour::from(7000.0));
        assert_eq!(suggest_btu(17.0)?, BtuPerHour::from(12000.0));
        assert_eq!(suggest_btu(25.0)?, BtuPerHour::from(18000.0));
        assert_eq!(suggest_btu(500.0)?, BtuPerHour::from(60000.0));
        Ok(())
    }

    #[test]
    fn test_suggest_btu_tie_prefers_smaller() -> Result {
        // 15 m² → 10 500 BTU/h, exactly between 9000 and 12000.
        assert_eq!(suggest_btu(15.0)?, BtuPerHour::from(9000.0));
        Ok(())
    }

    #[test]
    fn test_suggest_btu_invalid_area() {
        assert!(matches!(suggest_btu(0.0), Err(Error::InvalidArea(_))));
        assert!(matches!(suggest_btu(-3.0), Err(Error::InvalidArea(_))));
        assert!(suggest_btu(f64::NAN).is_err());
    }
}
