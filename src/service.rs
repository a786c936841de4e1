//! Labels for the service being recorded, derived from the calendar date.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Sunday,
    MidWeek,
    Other,
}

impl ServiceKind {
    /// Sundays hold the main service and Wednesdays the mid-week one.
    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sun => ServiceKind::Sunday,
            Weekday::Wed => ServiceKind::MidWeek,
            _ => ServiceKind::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Sunday => "Sunday Service",
            ServiceKind::MidWeek => "IPM Mid-week Service",
            ServiceKind::Other => "Other Day",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Long date shown above the attendance list, e.g. `Sunday, October 18, 2026`.
pub fn format_service_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
