// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the datewise crate.

/// Error type for every fallible operation in the crate.
///
/// Unparseable integer text is deliberately absent here:
/// [`parse_int_optional`](crate::parse_int_optional) folds it into `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required value was absent.
    #[error("{message}")]
    IllegalArgument {
        /// Caller-supplied description of the missing value.
        message: String,
    },

    /// A conversion left the range representable by chrono or `i64` millis.
    #[error("{what} out of range: {value}")]
    Overflow {
        /// What was being produced (e.g. `"date-time"`).
        what: &'static str,
        /// The offending input, rendered for diagnostics.
        value: String,
    },

    /// A label pattern could not be compiled.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A fixed offset at or beyond one full day.
    #[error("invalid UTC offset: {seconds} s (must be strictly within ±86400 s)")]
    InvalidOffset {
        /// The rejected offset in seconds east of UTC.
        seconds: i64,
    },
}

impl Error {
    pub(crate) fn overflow(what: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        tracing::debug!(what, %value, "conversion overflowed");
        Error::Overflow { what, value }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
