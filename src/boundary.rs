// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar boundaries relative to today.
//!
//! "Today" is the host's local calendar date at the moment of the call.
//! Every function here is a one-liner over an [`adjuster`](crate::adjuster);
//! use the adjusters directly to ask the same questions about other dates.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::adjuster::{
    DateAdjustExt, FirstDayOfMonth, FirstDayOfNextMonth, FirstDayOfNextYear, FirstDayOfYear,
    FirstInMonth, LastDayOfMonth, LastDayOfYear, LastInMonth, NextWorkingDay,
};
use crate::format::format_date_time;

/// Today's date in the host's local calendar.
#[inline]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First day of the current month.
pub fn first_day_of_month() -> NaiveDate {
    today().with(FirstDayOfMonth)
}

/// Last day of the current month.
pub fn last_day_of_month() -> NaiveDate {
    today().with(LastDayOfMonth)
}

/// First day of next month.
pub fn first_day_of_next_month() -> NaiveDate {
    today().with(FirstDayOfNextMonth)
}

/// January 1st of the current year.
pub fn first_day_of_year() -> NaiveDate {
    today().with(FirstDayOfYear)
}

/// December 31st of the current year.
pub fn last_day_of_year() -> NaiveDate {
    today().with(LastDayOfYear)
}

/// January 1st of next year.
pub fn first_day_of_next_year() -> NaiveDate {
    today().with(FirstDayOfNextYear)
}

/// The next Monday–Friday after today.
pub fn next_working_day() -> NaiveDate {
    today().with(NextWorkingDay)
}

/// First `weekday` of the current month.
pub fn first_in_month(weekday: Weekday) -> NaiveDate {
    today().with(FirstInMonth(weekday))
}

/// Last `weekday` of the current month.
pub fn last_in_month(weekday: Weekday) -> NaiveDate {
    today().with(LastInMonth(weekday))
}

// ── time of day ───────────────────────────────────────────────────────────

/// `date` at 00:00:00.
#[inline]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// `date` at 23:59:59.999999999.
#[inline]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("23:59:59.999999999 is a valid time of day")
}

/// Today at 00:00:00.
pub fn first_time_of_day() -> NaiveDateTime {
    start_of_day(today())
}

/// Today at 23:59:59.999999999.
pub fn last_time_of_day() -> NaiveDateTime {
    end_of_day(today())
}

/// [`first_time_of_day`] rendered as `yyyy-MM-dd 00:00:00`.
pub fn format_first_time_of_day() -> String {
    format_date_time(first_time_of_day())
}

/// [`last_time_of_day`] rendered as `yyyy-MM-dd 23:59:59.999999999`.
pub fn format_last_time_of_day() -> String {
    format_date_time(last_time_of_day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    /// Runs `f` until today's date is the same before and after the call.
    fn on_one_day<T>(mut f: impl FnMut() -> T) -> (NaiveDate, T) {
        loop {
            let before = today();
            let value = f();
            if today() == before {
                return (before, value);
            }
        }
    }

    #[test]
    fn boundaries_agree_with_adjusters_on_today() {
        let (now, got) = on_one_day(|| {
            [
                first_day_of_month(),
                last_day_of_month(),
                first_day_of_next_month(),
                first_day_of_year(),
                last_day_of_year(),
                first_day_of_next_year(),
                next_working_day(),
                first_in_month(Weekday::Wed),
                last_in_month(Weekday::Wed),
            ]
        });
        assert_eq!(
            got,
            [
                now.with(FirstDayOfMonth),
                now.with(LastDayOfMonth),
                now.with(FirstDayOfNextMonth),
                now.with(FirstDayOfYear),
                now.with(LastDayOfYear),
                now.with(FirstDayOfNextYear),
                now.with(NextWorkingDay),
                now.with(FirstInMonth(Weekday::Wed)),
                now.with(LastInMonth(Weekday::Wed)),
            ]
        );
    }

    #[test]
    fn first_day_of_month_is_day_one() {
        let (_, (first, last)) = on_one_day(|| (first_day_of_month(), last_day_of_month()));
        assert_eq!(first.day(), 1);
        assert!(first <= last);
    }

    #[test]
    fn weekday_occurrences_in_current_month() {
        let (now, (first, last)) =
            on_one_day(|| (first_in_month(Weekday::Mon), last_in_month(Weekday::Mon)));
        assert_eq!(first.weekday(), Weekday::Mon);
        assert_eq!(last.weekday(), Weekday::Mon);
        assert_eq!((first.month(), last.month()), (now.month(), now.month()));
        assert!(first <= last);
    }

    #[test]
    fn next_working_day_is_a_weekday_after_today() {
        let (now, next) = on_one_day(next_working_day);
        assert!(next > now);
        assert!(!matches!(next.weekday(), Weekday::Sat | Weekday::Sun));
    }

    #[test]
    fn time_of_day_on_today() {
        let (now, (first, last)) = on_one_day(|| (first_time_of_day(), last_time_of_day()));
        assert_eq!(first, start_of_day(now));
        assert_eq!(last, end_of_day(now));
    }

    #[test]
    fn time_of_day_extremes() {
        let first = first_time_of_day();
        assert_eq!((first.hour(), first.minute(), first.second()), (0, 0, 0));
        assert_eq!(first.nanosecond(), 0);

        let last = last_time_of_day();
        assert_eq!((last.hour(), last.minute(), last.second()), (23, 59, 59));
        assert_eq!(last.nanosecond(), 999_999_999);
    }

    #[test]
    fn formatted_time_of_day() {
        let first = format_first_time_of_day();
        assert!(first.ends_with(" 00:00:00"), "{first}");
        assert_eq!(first.len(), "2020-10-09 00:00:00".len());

        let last = format_last_time_of_day();
        assert!(last.ends_with(" 23:59:59.999999999"), "{last}");
    }

    #[test]
    fn day_extremes_for_fixed_date() {
        let day = NaiveDate::from_ymd_opt(2020, 10, 9).unwrap();
        assert_eq!(format_date_time(start_of_day(day)), "2020-10-09 00:00:00");
        assert_eq!(
            format_date_time(end_of_day(day)),
            "2020-10-09 23:59:59.999999999"
        );
    }
}
