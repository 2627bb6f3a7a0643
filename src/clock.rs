//! Clock capability for the copyright line.
//!
//! The page reads "today" exactly once per render through this trait so that
//! tests can pin the date instead of depending on wall-clock time.

use chrono::{Datelike, Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;

    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Wall-clock time in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Clock pinned to 1 January of `year`, or `None` when chrono cannot
    /// represent that year.
    pub fn try_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(Self)
    }

    /// Clock pinned to 1 January of `year`.
    ///
    /// Only accepts years chrono can represent (roughly ±262,000); panics
    /// otherwise. Use `try_year` for untrusted input.
    pub fn year(year: i32) -> Self {
        match Self::try_year(year) {
            Some(clock) => clock,
            None => panic!("year {} is outside chrono's supported range", year),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_year() {
        assert_eq!(FixedClock::year(2024).current_year(), 2024);

        let new_years_eve = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(FixedClock(new_years_eve).current_year(), 2025);
    }

    #[test]
    fn unrepresentable_year_is_rejected() {
        assert!(FixedClock::try_year(i32::MAX).is_none());
        assert_eq!(FixedClock::try_year(2024).map(|c| c.current_year()), Some(2024));
    }

    #[test]
    #[should_panic(expected = "outside chrono's supported range")]
    fn year_panics_outside_range() {
        FixedClock::year(i32::MAX);
    }

    #[test]
    fn system_clock_matches_chrono_local() {
        let year = SystemClock.current_year();
        assert_eq!(year, Local::now().year());
    }
}
