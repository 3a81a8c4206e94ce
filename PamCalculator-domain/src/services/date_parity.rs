use chrono::{Datelike, NaiveDate};

use crate::entities::syrup::SyrupAdvisory;

/// 1-based day of the year (Jan 1 = 1)
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Syrup advisory for a day: even days take the syrup, odd days do not
pub fn syrup_advisory(date: NaiveDate) -> SyrupAdvisory {
    if day_of_year(date) % 2 == 0 {
        SyrupAdvisory::TakeSyrup
    } else {
        SyrupAdvisory::NoSyrup
    }
}
