// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date adjusters.
//!
//! An adjuster maps a date to a related date: the first of its month, the
//! next working day, the last Friday of its month, ...  Each one is a small
//! `Copy` value implementing [`DateAdjuster`], applied through
//! [`DateAdjustExt::with`]:
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use datewise::{DateAdjustExt, LastInMonth, NextWorkingDay};
//!
//! let friday = NaiveDate::from_ymd_opt(2020, 10, 9).unwrap();
//! assert_eq!(friday.with(NextWorkingDay), NaiveDate::from_ymd_opt(2020, 10, 12).unwrap());
//! assert_eq!(
//!     friday.with(LastInMonth(Weekday::Sat)),
//!     NaiveDate::from_ymd_opt(2020, 10, 31).unwrap()
//! );
//! ```
//!
//! Only the ends of chrono's calendar (±262 143 years) can make an
//! adjustment impossible; there the input date is returned unchanged.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// A pure mapping from a date to a related date.
pub trait DateAdjuster: Copy + std::fmt::Debug {
    /// Adjust `date`.
    fn adjust(&self, date: NaiveDate) -> NaiveDate;
}

/// Method-call sugar for applying a [`DateAdjuster`].
pub trait DateAdjustExt {
    /// Returns `self` adjusted by `adjuster`.
    fn with<A: DateAdjuster>(self, adjuster: A) -> Self;
}

impl DateAdjustExt for NaiveDate {
    #[inline]
    fn with<A: DateAdjuster>(self, adjuster: A) -> Self {
        adjuster.adjust(self)
    }
}

// ---------------------------------------------------------------------------
// Month / year boundaries
// ---------------------------------------------------------------------------

/// First day of the date's month.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FirstDayOfMonth;

impl DateAdjuster for FirstDayOfMonth {
    #[inline]
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        month_start(date)
    }
}

/// Last day of the date's month.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LastDayOfMonth;

impl DateAdjuster for LastDayOfMonth {
    #[inline]
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        month_end(date)
    }
}

/// First day of the month after the date's month.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FirstDayOfNextMonth;

impl DateAdjuster for FirstDayOfNextMonth {
    #[inline]
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        next_month_start(date).unwrap_or(date)
    }
}

/// January 1st of the date's year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FirstDayOfYear;

impl DateAdjuster for FirstDayOfYear {
    #[inline]
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        date.with_ordinal(1).unwrap_or(date)
    }
}

/// December 31st of the date's year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LastDayOfYear;

impl DateAdjuster for LastDayOfYear {
    #[inline]
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
    }
}

/// January 1st of the following year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FirstDayOfNextYear;

impl DateAdjuster for FirstDayOfNextYear {
    #[inline]
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap_or(date)
    }
}

// ---------------------------------------------------------------------------
// Weekday based
// ---------------------------------------------------------------------------

/// The next Monday–Friday after the date.
///
/// Friday advances three days, Saturday two, every other day one.  No
/// holiday calendar is consulted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NextWorkingDay;

impl DateAdjuster for NextWorkingDay {
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        let step = match date.weekday() {
            Weekday::Fri => 3,
            Weekday::Sat => 2,
            _ => 1,
        };
        date.checked_add_days(Days::new(step)).unwrap_or(date)
    }
}

/// First occurrence of the weekday in the date's month.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FirstInMonth(pub Weekday);

impl DateAdjuster for FirstInMonth {
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        let first = month_start(date);
        let ahead = days_between(first.weekday(), self.0);
        first.checked_add_days(Days::new(ahead)).unwrap_or(date)
    }
}

/// Last occurrence of the weekday in the date's month.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LastInMonth(pub Weekday);

impl DateAdjuster for LastInMonth {
    fn adjust(&self, date: NaiveDate) -> NaiveDate {
        let last = month_end(date);
        let behind = days_between(self.0, last.weekday());
        last.checked_sub_days(Days::new(behind)).unwrap_or(date)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Days to walk forward from `from` to reach `to` (0..=6).
#[inline]
fn days_between(from: Weekday, to: Weekday) -> u64 {
    u64::from((7 + to.num_days_from_monday() - from.num_days_from_monday()) % 7)
}

#[inline]
fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn next_month_start(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

fn month_end(date: NaiveDate) -> NaiveDate {
    match next_month_start(date).and_then(|next| next.pred_opt()) {
        Some(end) => end,
        // Only December of chrono's last year has no successor month.
        None => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
    }
}
