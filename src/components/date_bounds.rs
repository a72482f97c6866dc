use chrono::{Datelike, NaiveDate};
use smartedu_models::AcademicSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsSource {
    /// Term dates of the current academic session.
    AcademicSession,
    /// No current session: the calendar year of today.
    CalendarYear,
}

/// The selectable date range for date pickers tied to an academic session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    min: NaiveDate,
    max: NaiveDate,
    source: BoundsSource,
}

impl DateBounds {
    /// Bounds from the current session, or the calendar year of `today`.
    ///
    /// A session whose end precedes its start is ignored.
    pub fn for_session(current: Option<&AcademicSession>, today: NaiveDate) -> Self {
        match current {
            Some(session) if session.term_start_date <= session.term_end_date => Self {
                min: session.term_start_date,
                max: session.term_end_date,
                source: BoundsSource::AcademicSession,
            },
            _ => Self::calendar_year(today),
        }
    }

    pub fn calendar_year(today: NaiveDate) -> Self {
        let year = today.year();
        // Jan 1 and Dec 31 exist in every year chrono can represent.
        let min = NaiveDate::from_yo_opt(year, 1).unwrap_or(today);
        let max = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);
        Self {
            min,
            max,
            source: BoundsSource::CalendarYear,
        }
    }

    pub fn min(&self) -> NaiveDate {
        self.min
    }

    pub fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn source(&self) -> BoundsSource {
        self.source
    }

    pub fn accepts(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Parses a `YYYY-MM-DD` input and returns it only when in range.
    pub fn parse(&self, input: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .ok()
            .filter(|date| self.accepts(*date))
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    /// `min` attribute value for a date input.
    pub fn min_attr(&self) -> String {
        self.min.format("%Y-%m-%d").to_string()
    }

    /// `max` attribute value for a date input.
    pub fn max_attr(&self) -> String {
        self.max.format("%Y-%m-%d").to_string()
    }
}
