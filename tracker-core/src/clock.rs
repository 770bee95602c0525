//! Date source for the "Completed on" footer.

use chrono::{Local, NaiveDate};

/// Supplies today's date.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today's date formatted for display.
    fn today_label(&self) -> String {
        format_date(self.today())
    }
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// US short date without zero padding, e.g. `3/7/2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
