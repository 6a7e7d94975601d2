//! Clock seam so the footer year can be pinned in tests.

use chrono::Datelike;

pub trait Clock {
    /// Current calendar year in local time.
    fn current_year(&self) -> i32;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Clock frozen at a given year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(i32);

impl FixedClock {
    pub fn year(year: i32) -> Self {
        Self(year)
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_matches_chrono() {
        let year = SystemClock.current_year();
        assert!(year >= 2024);
        assert_eq!(year, chrono::Local::now().year());
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock::year(1999).current_year(), 1999);
    }
}
