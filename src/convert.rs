// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversions between epoch milliseconds, wall-clock values and
//! [`LegacyDate`].
//!
//! Wall-clock values (`NaiveDate`, `NaiveDateTime`) carry no zone; crossing
//! to or from the epoch axis always goes through a [`FixedZone`].  The free
//! functions here use [`FixedZone::UTC_PLUS_8`]; the same operations exist as
//! methods on any other zone.
//!
//! ```text
//! NaiveDate ──(start of day)──┐
//!                             ├──► epoch millis ◄──► LegacyDate ◄──► SystemTime
//! NaiveDateTime ──────────────┘
//! ```
//!
//! Epoch millis are floored: a wall-clock time with sub-millisecond
//! precision maps to the millisecond at or before it, before and after
//! 1970 alike.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};
use crate::zone::FixedZone;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NANOS_PER_MILLI: u128 = 1_000_000;

// ═══════════════════════════════════════════════════════════════════════════
// LegacyDate
// ═══════════════════════════════════════════════════════════════════════════

/// Millisecond-precision instant, the shape of older date APIs.
///
/// A thin wrapper over signed epoch milliseconds.  It exists so that
/// interoperability code says *legacy timestamp* in its signatures instead
/// of a bare `i64`, and so the [`SystemTime`] bridge has a home.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct LegacyDate {
    millis: i64,
}

impl LegacyDate {
    /// The epoch itself, 1970-01-01T00:00:00Z.
    pub const EPOCH: Self = Self { millis: 0 };

    /// Wraps a count of milliseconds since the epoch.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Milliseconds since the epoch.
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// The same instant as a [`SystemTime`].
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the platform clock cannot represent it.
    pub fn to_system_time(&self) -> Result<SystemTime> {
        let magnitude = Duration::from_millis(self.millis.unsigned_abs());
        let time = if self.millis >= 0 {
            UNIX_EPOCH.checked_add(magnitude)
        } else {
            UNIX_EPOCH.checked_sub(magnitude)
        };
        time.ok_or_else(|| Error::overflow("system time", self.millis))
    }

    /// Floors a [`SystemTime`] to whole milliseconds.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the instant lies beyond ±`i64::MAX` ms.
    pub fn from_system_time(time: SystemTime) -> Result<Self> {
        let millis = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).ok(),
            Err(before) => {
                let ms = before.duration().as_nanos().div_ceil(NANOS_PER_MILLI);
                i64::try_from(ms).ok().map(|ms| -ms)
            }
        };
        millis
            .map(Self::from_millis)
            .ok_or_else(|| Error::overflow("legacy date", format!("{time:?}")))
    }
}

impl TryFrom<SystemTime> for LegacyDate {
    type Error = Error;

    #[inline]
    fn try_from(time: SystemTime) -> Result<Self> {
        Self::from_system_time(time)
    }
}

impl TryFrom<LegacyDate> for SystemTime {
    type Error = Error;

    #[inline]
    fn try_from(date: LegacyDate) -> Result<Self> {
        date.to_system_time()
    }
}

impl From<i64> for LegacyDate {
    #[inline]
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl From<LegacyDate> for i64 {
    #[inline]
    fn from(date: LegacyDate) -> Self {
        date.millis
    }
}

impl fmt::Display for LegacyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp_millis(self.millis) {
            Some(utc) => write!(f, "{}", utc.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{} ms", self.millis),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Zone-parameterised conversions
// ═══════════════════════════════════════════════════════════════════════════

impl FixedZone {
    // ── wall clock → epoch ────────────────────────────────────────────

    /// Epoch millis of `date` at 00:00 in this zone.
    #[inline]
    pub fn date_to_epoch_millis(&self, date: NaiveDate) -> i64 {
        self.date_time_to_epoch_millis(date.and_time(NaiveTime::MIN))
    }

    /// Epoch millis of `date_time` read as wall-clock time in this zone.
    ///
    /// chrono's calendar spans ±262 143 years, far inside the `i64`
    /// millisecond range, so this cannot overflow.
    #[inline]
    pub fn date_time_to_epoch_millis(&self, date_time: NaiveDateTime) -> i64 {
        date_time.and_utc().timestamp_millis() - self.offset_millis()
    }

    /// [`LegacyDate`] of `date` at 00:00 in this zone.
    #[inline]
    pub fn date_to_legacy(&self, date: NaiveDate) -> LegacyDate {
        LegacyDate::from_millis(self.date_to_epoch_millis(date))
    }

    /// [`LegacyDate`] of `date_time` in this zone, floored to milliseconds.
    #[inline]
    pub fn date_time_to_legacy(&self, date_time: NaiveDateTime) -> LegacyDate {
        LegacyDate::from_millis(self.date_time_to_epoch_millis(date_time))
    }

    // ── epoch → wall clock ────────────────────────────────────────────

    /// Wall-clock date-time observed in this zone at `millis`.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] when the result falls outside chrono's calendar.
    pub fn epoch_millis_to_date_time(&self, millis: i64) -> Result<NaiveDateTime> {
        millis
            .checked_add(self.offset_millis())
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|shifted| shifted.naive_utc())
            .ok_or_else(|| Error::overflow("date-time", millis))
    }

    /// Calendar date observed in this zone at `millis`.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] when the result falls outside chrono's calendar.
    #[inline]
    pub fn epoch_millis_to_date(&self, millis: i64) -> Result<NaiveDate> {
        self.epoch_millis_to_date_time(millis).map(|dt| dt.date())
    }

    /// Calendar date observed in this zone at `legacy`.
    #[inline]
    pub fn legacy_to_date(&self, legacy: LegacyDate) -> Result<NaiveDate> {
        self.epoch_millis_to_date(legacy.millis())
    }

    /// Wall-clock date-time observed in this zone at `legacy`.
    #[inline]
    pub fn legacy_to_date_time(&self, legacy: LegacyDate) -> Result<NaiveDateTime> {
        self.epoch_millis_to_date_time(legacy.millis())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UTC+8 free functions
// ═══════════════════════════════════════════════════════════════════════════

/// [`FixedZone::date_to_legacy`] in UTC+8.
pub fn date_to_legacy(date: NaiveDate) -> LegacyDate {
    FixedZone::UTC_PLUS_8.date_to_legacy(date)
}

/// [`FixedZone::date_time_to_legacy`] in UTC+8.
pub fn date_time_to_legacy(date_time: NaiveDateTime) -> LegacyDate {
    FixedZone::UTC_PLUS_8.date_time_to_legacy(date_time)
}

/// [`FixedZone::legacy_to_date`] in UTC+8.
pub fn legacy_to_date(legacy: LegacyDate) -> Result<NaiveDate> {
    FixedZone::UTC_PLUS_8.legacy_to_date(legacy)
}

/// [`FixedZone::legacy_to_date_time`] in UTC+8.
pub fn legacy_to_date_time(legacy: LegacyDate) -> Result<NaiveDateTime> {
    FixedZone::UTC_PLUS_8.legacy_to_date_time(legacy)
}

/// [`FixedZone::date_to_epoch_millis`] in UTC+8.
pub fn date_to_epoch_millis(date: NaiveDate) -> i64 {
    FixedZone::UTC_PLUS_8.date_to_epoch_millis(date)
}

/// [`FixedZone::date_time_to_epoch_millis`] in UTC+8.
pub fn date_time_to_epoch_millis(date_time: NaiveDateTime) -> i64 {
    FixedZone::UTC_PLUS_8.date_time_to_epoch_millis(date_time)
}

/// [`FixedZone::epoch_millis_to_date`] in UTC+8.
pub fn epoch_millis_to_date(millis: i64) -> Result<NaiveDate> {
    FixedZone::UTC_PLUS_8.epoch_millis_to_date(millis)
}

/// [`FixedZone::epoch_millis_to_date_time`] in UTC+8.
pub fn epoch_millis_to_date_time(millis: i64) -> Result<NaiveDateTime> {
    FixedZone::UTC_PLUS_8.epoch_millis_to_date_time(millis)
}
