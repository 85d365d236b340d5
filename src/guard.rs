// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Helpers for possibly-absent values.

use crate::error::{Error, Result};

/// `true` when `value` is absent.
#[inline]
pub fn is_absent<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// `true` when `value` is present.
#[inline]
pub fn is_present<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// `value`, or whatever `supplier` produces when it is absent.
///
/// `supplier` runs only in the absent case.
#[inline]
pub fn or_default<T, F>(value: Option<T>, supplier: F) -> T
where
    F: FnOnce() -> T,
{
    value.unwrap_or_else(supplier)
}

/// `value`, or an empty list when it is absent.
#[inline]
pub fn or_empty_list<T>(value: Option<Vec<T>>) -> Vec<T> {
    value.unwrap_or_default()
}

/// Fails with [`Error::IllegalArgument`] carrying `message` when `value` is
/// absent.
///
/// ```
/// use datewise::{require_or_throw, Error};
///
/// assert!(require_or_throw(&Some(5), "id is required").is_ok());
/// assert_eq!(
///     require_or_throw(&None::<i32>, "id is required"),
///     Err(Error::IllegalArgument { message: "id is required".into() })
/// );
/// ```
pub fn require_or_throw<T>(value: &Option<T>, message: impl Into<String>) -> Result<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(Error::IllegalArgument {
            message: message.into(),
        }),
    }
}

/// Parses a base-10 `i32` with an optional leading `+` or `-`.
///
/// Anything else (empty text, whitespace, other characters, values beyond
/// the `i32` range) yields `None`.
#[inline]
pub fn parse_int_optional(text: impl AsRef<str>) -> Option<i32> {
    text.as_ref().parse().ok()
}
