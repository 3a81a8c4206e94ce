//! Time sources for the calculator
//! The calendar date is read through [`Clock`] so date-dependent logic can be tested.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Today's date in the host's local calendar
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the host system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Build a clock from a calendar date, `None` if the date does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
