// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date helpers
//!
//! Small, stateless helpers over [`chrono`] for everyday calendar chores and
//! for values that may be absent.
//!
//! # Month labels
//!
//! - [`MonthSequence`] — iterator over the months following an anchor date.
//! - [`limit_list`] / [`limit_string`] — the next `count` months rendered
//!   through a [`MonthPattern`] (`yyyyMM` by default).
//!
//! # Calendar boundaries
//!
//! Today-relative queries ([`first_day_of_month`], [`next_working_day`],
//! [`last_in_month`], [`format_last_time_of_day`], ...) are thin wrappers
//! over [`DateAdjuster`]s, which apply to any date:
//!
//! | Adjuster | Result |
//! |----------|--------|
//! | [`FirstDayOfMonth`] / [`LastDayOfMonth`] | ends of the month |
//! | [`FirstDayOfNextMonth`] | 1st of the following month |
//! | [`FirstDayOfYear`] / [`LastDayOfYear`] | Jan 1st / Dec 31st |
//! | [`FirstDayOfNextYear`] | Jan 1st of the following year |
//! | [`NextWorkingDay`] | next Monday–Friday |
//! | [`FirstInMonth`] / [`LastInMonth`] | first / last given weekday of the month |
//!
//! # Epoch conversions
//!
//! Wall-clock values cross to epoch milliseconds and [`LegacyDate`] through
//! a [`FixedZone`].  The free functions ([`date_to_epoch_millis`],
//! [`epoch_millis_to_date_time`], [`date_to_legacy`], ...) use
//! [`FixedZone::UTC_PLUS_8`].
//!
//! # Absent values
//!
//! [`or_default`], [`or_empty_list`], [`require_or_throw`],
//! [`parse_int_optional`].

pub mod adjuster;
pub mod boundary;
pub mod convert;
mod error;
pub(crate) mod format;
mod guard;
mod sequence;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use adjuster::{
    DateAdjustExt, DateAdjuster, FirstDayOfMonth, FirstDayOfNextMonth, FirstDayOfNextYear,
    FirstDayOfYear, FirstInMonth, LastDayOfMonth, LastDayOfYear, LastInMonth, NextWorkingDay,
};
pub use boundary::{
    end_of_day, first_day_of_month, first_day_of_next_month, first_day_of_next_year,
    first_day_of_year, first_in_month, first_time_of_day, format_first_time_of_day,
    format_last_time_of_day, last_day_of_month, last_day_of_year, last_in_month,
    last_time_of_day, next_working_day, start_of_day, today,
};
pub use convert::{
    date_time_to_epoch_millis, date_time_to_legacy, date_to_epoch_millis, date_to_legacy,
    epoch_millis_to_date, epoch_millis_to_date_time, legacy_to_date, legacy_to_date_time,
    LegacyDate,
};
pub use error::{Error, Result};
pub use format::{format_date_time, DateTimeDisplay, MonthPattern, DEFAULT_MONTH_PATTERN};
pub use guard::{
    is_absent, is_present, or_default, or_empty_list, parse_int_optional, require_or_throw,
};
pub use sequence::{
    limit_list, limit_list_with, limit_string, limit_string_with, months_after,
    months_after_string, next_months, next_months_string, MonthSequence,
};
pub use zone::FixedZone;
