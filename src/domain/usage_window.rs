use chrono::{Days, FixedOffset, NaiveDate, Utc};
use std::fmt::{Display, Formatter};

/// The single calendar day usage is queried for. Computed once per run so
/// every device is asked about the same day.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct UsageWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl UsageWindow {
    /// The day before the current date in the given reference offset.
    pub fn yesterday(offset: &FixedOffset) -> Self {
        Self::day_before(Utc::now().with_timezone(offset).date_naive())
    }

    pub fn day_before(today: NaiveDate) -> Self {
        let day = today - Days::new(1);
        UsageWindow { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl Display for UsageWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start.format("%Y-%m-%d"))
    }
}
