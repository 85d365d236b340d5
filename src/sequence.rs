// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Month-label sequences.
//!
//! [`MonthSequence`] walks forward from an anchor date one calendar month at
//! a time, starting *after* the anchor's own month.  Each step is computed
//! from the anchor (`anchor + n months`), so a day that does not exist in
//! the target month is clamped once, not accumulated: from January 31st the
//! sequence is Feb 29 (or 28), Mar 31, Apr 30, ...
//!
//! The `limit_*` functions bound the walk with `take(count)` and render each
//! date through a [`MonthPattern`].

use chrono::{Months, NaiveDate};
use std::iter::FusedIterator;

use crate::boundary::today;
use crate::error::Result;
use crate::format::MonthPattern;

/// Unbounded iterator over `anchor + 1 month`, `anchor + 2 months`, ...
///
/// Ends only when chrono's calendar runs out.  Bound it with
/// [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct MonthSequence {
    anchor: NaiveDate,
    offset: u32,
}

impl MonthSequence {
    /// Sequence following `anchor`'s month.
    #[inline]
    pub fn after(anchor: NaiveDate) -> Self {
        Self { anchor, offset: 0 }
    }

    /// The anchor date.
    #[inline]
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }
}

impl Iterator for MonthSequence {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset.checked_add(1)?;
        let date = self.anchor.checked_add_months(Months::new(offset))?;
        self.offset = offset;
        Some(date)
    }
}

impl FusedIterator for MonthSequence {}

// ── labels ────────────────────────────────────────────────────────────────

/// The `count` months after `anchor` (today when `None`), each rendered
/// through `pattern`.
///
/// ```
/// use chrono::NaiveDate;
/// use datewise::{limit_list, MonthPattern};
///
/// let anchor = NaiveDate::from_ymd_opt(2020, 10, 9).unwrap();
/// let labels = limit_list(Some(anchor), 3, &MonthPattern::default());
/// assert_eq!(labels, ["202011", "202012", "202101"]);
/// ```
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn limit_list(
    anchor: Option<NaiveDate>,
    count: usize,
    pattern: &MonthPattern,
) -> Vec<String> {
    let anchor = anchor.unwrap_or_else(today);
    MonthSequence::after(anchor)
        .take(count)
        .map(|date| pattern.format(date))
        .collect()
}

/// [`limit_list`] joined with `,`.  Zero months yield `""`.
pub fn limit_string(anchor: Option<NaiveDate>, count: usize, pattern: &MonthPattern) -> String {
    limit_list(anchor, count, pattern).join(",")
}

/// [`limit_list`] with a pattern given as text.
///
/// # Errors
///
/// [`Error::InvalidPattern`](crate::Error::InvalidPattern) when `pattern`
/// does not compile.
pub fn limit_list_with(
    anchor: Option<NaiveDate>,
    count: usize,
    pattern: &str,
) -> Result<Vec<String>> {
    let pattern = MonthPattern::parse(pattern)?;
    Ok(limit_list(anchor, count, &pattern))
}

/// [`limit_string`] with a pattern given as text.
///
/// # Errors
///
/// [`Error::InvalidPattern`](crate::Error::InvalidPattern) when `pattern`
/// does not compile.
pub fn limit_string_with(
    anchor: Option<NaiveDate>,
    count: usize,
    pattern: &str,
) -> Result<String> {
    Ok(limit_list_with(anchor, count, pattern)?.join(","))
}

/// The next `count` month labels after today, as `yyyyMM`.
pub fn next_months(count: usize) -> Vec<String> {
    limit_list(None, count, &MonthPattern::default())
}

/// [`next_months`] joined with `,`.
pub fn next_months_string(count: usize) -> String {
    limit_string(None, count, &MonthPattern::default())
}

/// The `count` month labels after `anchor`, as `yyyyMM`.
pub fn months_after(anchor: NaiveDate, count: usize) -> Vec<String> {
    limit_list(Some(anchor), count, &MonthPattern::default())
}

/// [`months_after`] joined with `,`.
pub fn months_after_string(anchor: NaiveDate, count: usize) -> String {
    limit_string(Some(anchor), count, &MonthPattern::default())
}
