//! Whole-years age computation.
//!
//! Age is the number of complete years between a birthday and a reference
//! date: the raw year difference, minus one if this year's anniversary has
//! not happened yet. A future birthday yields a negative age — defined, not
//! rejected.
//!
//! Leap-day policy: a Feb 29 birthday counts from Mar 1 in non-leap years,
//! so such a person turns a year older on Mar 1.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::error::{Result, ServiceError};

/// Birthday strings must match this format exactly.
const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Age in whole years at `now` for someone born on `birthday`.
pub fn age_at(birthday: NaiveDate, now: NaiveDate) -> i32 {
    let mut years = now.year() - birthday.year();

    let anniversary = match NaiveDate::from_ymd_opt(now.year(), birthday.month(), birthday.day()) {
        Some(date) => date,
        // Feb 29 in a non-leap year: the anniversary is Mar 1.
        None => NaiveDate::from_ymd_opt(now.year(), 3, 1)
            .expect("Mar 1 exists in every year"),
    };

    if now < anniversary {
        years -= 1;
    }
    years
}

/// Parse a birthday in strict `YYYY-MM-DD` format.
///
/// Wrong separators, non-numeric fields, impossible calendar dates, and
/// trailing input all fail with [`ServiceError::InvalidBirthday`].
pub fn parse_birthday(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT).map_err(|source| {
        debug!(input = s, %source, "birthday parse failed");
        ServiceError::InvalidBirthday {
            input: s.to_string(),
            source,
        }
    })
}

/// Parse a birthday string and return the age as of today.
pub fn age_from_birthday(s: &str) -> Result<i32> {
    let birthday = parse_birthday(s)?;
    Ok(age_at(birthday, Local::now().date_naive()))
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_birthday(s).unwrap()
    }

    // Fixed reference date so the tests are deterministic.
    fn reference() -> NaiveDate {
        date("2026-02-26")
    }

    #[test]
    fn thirty_years_old() {
        assert_eq!(age_at(date("1996-02-26"), reference()), 30);
    }

    #[test]
    fn born_today_is_zero() {
        assert_eq!(age_at(date("2026-02-26"), reference()), 0);
    }

    #[test]
    fn anniversary_not_yet_this_year() {
        // Raw difference is 36, but Dec 31 has not happened yet.
        assert_eq!(age_at(date("1990-12-31"), reference()), 35);
    }

    #[test]
    fn future_birthday_is_negative() {
        assert_eq!(age_at(date("2030-01-01"), reference()), -4);
    }

    #[test]
    fn leap_day_birthday_in_leap_year() {
        let birthday = date("2004-02-29");
        assert_eq!(age_at(birthday, date("2024-02-28")), 19);
        assert_eq!(age_at(birthday, date("2024-02-29")), 20);
    }

    #[test]
    fn leap_day_birthday_counts_from_mar_1_in_non_leap_years() {
        let birthday = date("2004-02-29");
        assert_eq!(age_at(birthday, date("2025-02-28")), 20);
        assert_eq!(age_at(birthday, date("2025-03-01")), 21);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_birthday("not-a-date"),
            Err(ServiceError::InvalidBirthday { .. })
        ));
    }

    #[test]
    fn parse_rejects_wrong_separators() {
        assert!(parse_birthday("1996/02/26").is_err());
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(parse_birthday("1996-13-01").is_err());
        assert!(parse_birthday("1996-02-30").is_err());
        assert!(parse_birthday("2025-02-29").is_err());
    }

    #[test]
    fn parse_rejects_trailing_input() {
        assert!(parse_birthday("1996-02-26x").is_err());
    }

    #[test]
    fn parse_accepts_valid_dates() {
        let d = parse_birthday("1996-02-26").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1996, 2, 26));
    }

    #[test]
    fn invalid_birthday_error_names_the_input() {
        let err = parse_birthday("not-a-date").unwrap_err();
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn age_from_birthday_rejects_garbage() {
        assert!(age_from_birthday("not-a-date").is_err());
    }

    #[test]
    fn age_from_birthday_is_non_negative_for_past_dates() {
        let age = age_from_birthday("1996-02-26").unwrap();
        assert!(age >= 29, "got {age}");
    }
}
