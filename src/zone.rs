// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed UTC offsets.
//!
//! Every epoch ↔ wall-clock conversion in this crate goes through a
//! [`FixedZone`]: a constant offset east of UTC with no daylight-saving
//! rules.  The free functions in [`convert`](crate::convert) use
//! [`FixedZone::UTC_PLUS_8`]; callers needing another offset invoke the same
//! operations as methods on their own zone.

use chrono::FixedOffset;
use qtty::{Hour, Hours, Second, Seconds};
use std::fmt;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SECONDS_PER_DAY: i64 = 86_400;

/// A constant offset from UTC, in whole seconds east of Greenwich.
///
/// Always strictly within ±24 h, so it converts losslessly into a
/// [`chrono::FixedOffset`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedZone {
    seconds: i32,
}

impl FixedZone {
    /// UTC itself.
    pub const UTC: Self = Self { seconds: 0 };

    /// UTC+08:00, the offset used by the free conversion functions.
    pub const UTC_PLUS_8: Self = Self {
        seconds: 8 * 3_600,
    };

    /// Zone `seconds` east of UTC (negative for west).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOffset`] unless `-86400 < seconds < 86400`.
    pub fn east(seconds: i32) -> Result<Self> {
        if i64::from(seconds).abs() >= SECONDS_PER_DAY {
            return Err(Error::InvalidOffset {
                seconds: i64::from(seconds),
            });
        }
        Ok(Self { seconds })
    }

    /// Zone from a typed hour quantity, rounded to the nearest second.
    ///
    /// ```
    /// use datewise::FixedZone;
    /// use qtty::Hours;
    ///
    /// let india = FixedZone::from_hours(Hours::new(5.5)).unwrap();
    /// assert_eq!(india.offset_seconds(), 19_800);
    /// ```
    pub fn from_hours(offset: Hours) -> Result<Self> {
        let seconds = offset.to::<Second>().value().round();
        if !seconds.is_finite() || seconds.abs() >= SECONDS_PER_DAY as f64 {
            return Err(Error::InvalidOffset {
                seconds: if seconds.is_finite() {
                    seconds as i64
                } else {
                    i64::MAX
                },
            });
        }
        Self::east(seconds as i32)
    }

    /// Offset in seconds east of UTC.
    #[inline]
    pub const fn offset_seconds(&self) -> i32 {
        self.seconds
    }

    /// Offset in milliseconds east of UTC.
    #[inline]
    pub const fn offset_millis(&self) -> i64 {
        self.seconds as i64 * 1_000
    }

    /// Offset as a typed hour quantity.
    #[inline]
    pub fn offset_hours(&self) -> Hours {
        Seconds::new(f64::from(self.seconds)).to::<Hour>()
    }

    /// The equivalent chrono offset, for callers building
    /// `DateTime<FixedOffset>` values themselves.
    pub fn to_fixed_offset(&self) -> FixedOffset {
        // `seconds` is validated to lie strictly within ±24 h on construction.
        FixedOffset::east_opt(self.seconds).expect("FixedZone offset is always within ±24h")
    }
}

impl Default for FixedZone {
    fn default() -> Self {
        Self::UTC_PLUS_8
    }
}

impl fmt::Display for FixedZone {
    /// `UTC+08:00`, `UTC-03:30`, `UTC+05:45:30`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        let (h, m, s) = (abs / 3_600, abs / 60 % 60, abs % 60);
        if s == 0 {
            write!(f, "UTC{sign}{h:02}:{m:02}")
        } else {
            write!(f, "UTC{sign}{h:02}:{m:02}:{s:02}")
        }
    }
}

impl From<FixedZone> for FixedOffset {
    #[inline]
    fn from(zone: FixedZone) -> Self {
        zone.to_fixed_offset()
    }
}

impl From<FixedOffset> for FixedZone {
    #[inline]
    fn from(offset: FixedOffset) -> Self {
        Self {
            seconds: offset.local_minus_utc(),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for FixedZone {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.seconds)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for FixedZone {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = i32::deserialize(deserializer)?;
        Self::east(seconds).map_err(serde::de::Error::custom)
    }
}
