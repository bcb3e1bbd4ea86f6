use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{Error, Result};

/// How long the appliance runs.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UsageProfile {
    hours_per_day: u8,
    days_per_month: u8,
}

impl UsageProfile {
    pub const HOURS_PER_DAY: RangeInclusive<u8> = 1..=24;
    pub const DAYS_PER_MONTH: RangeInclusive<u8> = 1..=30;

    pub fn try_new(hours_per_day: u8, days_per_month: u8) -> Result<Self> {
        if Self::HOURS_PER_DAY.contains(&hours_per_day)
            && Self::DAYS_PER_MONTH.contains(&days_per_month)
        {
            Ok(Self { hours_per_day, days_per_month })
        } else {
            Err(Error::InvalidUsage { hours_per_day, days_per_month })
        }
    }

    #[must_use]
    pub const fn hours_per_day(self) -> u8 {
        self.hours_per_day
    }

    #[must_use]
    pub const fn days_per_month(self) -> u8 {
        self.days_per_month
    }
}

impl Default for UsageProfile {
    fn default() -> Self {
        Self { hours_per_day: 8, days_per_month: 30 }
    }
}
