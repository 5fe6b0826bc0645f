//! Seeding configuration.

use chrono::{Datelike, Local, NaiveDate};

/// How many students to create and the admission-date range they get.
#[derive(Clone, Debug)]
pub struct StudentSeedConfig {
    pub count: usize,
    pub admitted_from: NaiveDate,
    pub admitted_to: NaiveDate,
}

impl StudentSeedConfig {
    /// `count` students admitted within the last five years.
    pub fn new(count: usize) -> Self {
        let today = Local::now().date_naive();
        let admitted_from = today
            .with_year(today.year() - 5)
            .unwrap_or(NaiveDate::MIN);
        Self {
            count,
            admitted_from,
            admitted_to: today,
        }
    }

    pub fn with_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.admitted_from = from.min(to);
        self.admitted_to = from.max(to);
        self
    }

    /// Days between the first and last admission date, inclusive.
    pub fn span_days(&self) -> i64 {
        (self.admitted_to - self.admitted_from).num_days() + 1
    }
}

impl Default for StudentSeedConfig {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_range_orders_bounds() {
        let a = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
        let config = StudentSeedConfig::new(1).with_range(b, a);
        assert_eq!(config.admitted_from, a);
        assert_eq!(config.admitted_to, b);
        assert_eq!(config.span_days(), 10);
    }
}
