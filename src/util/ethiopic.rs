//! Gregorian → Ethiopian calendar conversion.
//!
//! The Ethiopian calendar has twelve 30-day months plus Pagume (5 days, 6 in
//! leap years). Conversion goes through the Julian day number; the epoch
//! constant is the JDN of 1 Meskerem, year 1.

use chrono::{Datelike, Local, NaiveDate};

const ETHIOPIC_EPOCH: i64 = 1_723_856;

/// A date in the Ethiopian calendar. `month` is 1-13, `day` 1-30
/// (1-6 for Pagume).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthiopicDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl EthiopicDate {
    /// Convert a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        // chrono counts days from 0001-01-01 (CE day 1); JDN of that day
        // is 1721426.
        let jdn = i64::from(date.num_days_from_ce()) + 1_721_425;
        let r = (jdn - ETHIOPIC_EPOCH).rem_euclid(1461);
        let n = r % 365 + 365 * (r / 1460);
        let year = 4 * ((jdn - ETHIOPIC_EPOCH).div_euclid(1461)) + r / 365 - r / 1460;
        let month = n / 30 + 1;
        let day = n % 30 + 1;
        EthiopicDate {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Today's date in the Ethiopian calendar.
    pub fn today() -> Self {
        EthiopicDate::from_gregorian(Local::now().date_naive())
    }

    /// Zero-based index of the month, for indexing the month table
    pub fn month_index(&self) -> usize {
        (self.month - 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn g(y: i32, m: u32, d: u32) -> EthiopicDate {
        EthiopicDate::from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn new_year_boundary() {
        // Ethiopian new year 2016 fell on 2023-09-12
        assert_eq!(
            g(2023, 9, 11),
            EthiopicDate {
                year: 2015,
                month: 13,
                day: 6
            }
        );
        assert_eq!(
            g(2023, 9, 12),
            EthiopicDate {
                year: 2016,
                month: 1,
                day: 1
            }
        );
    }

    #[test]
    fn mid_year_dates() {
        // 2024-01-01 is Tahsas 22, 2016
        assert_eq!(
            g(2024, 1, 1),
            EthiopicDate {
                year: 2016,
                month: 4,
                day: 22
            }
        );
        // 2026-08-29 is Nehase 23, 2018
        assert_eq!(
            g(2026, 8, 29),
            EthiopicDate {
                year: 2018,
                month: 12,
                day: 23
            }
        );
    }

    #[test]
    fn pagume_length() {
        // 2015 EC was a leap year: Pagume ran 6 days, ending 2023-09-11
        assert_eq!(g(2023, 9, 6).month, 13);
        assert_eq!(g(2023, 9, 6).day, 1);
        assert_eq!(g(2023, 9, 11).day, 6);
        // 2016 EC: Pagume has 5 days, new year 2017 on 2024-09-11
        assert_eq!(
            g(2024, 9, 10),
            EthiopicDate {
                year: 2016,
                month: 13,
                day: 5
            }
        );
        assert_eq!(
            g(2024, 9, 11),
            EthiopicDate {
                year: 2017,
                month: 1,
                day: 1
            }
        );
    }

    #[test]
    fn month_index_is_zero_based() {
        assert_eq!(g(2023, 9, 12).month_index(), 0);
        assert_eq!(g(2023, 9, 11).month_index(), 12);
    }
}
