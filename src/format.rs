// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text renderings.
//!
//! - [`format_date_time`] — the crate's `yyyy-MM-dd HH:mm:ss[.fraction]`
//!   layout, with the shortest exact fraction.
//! - [`MonthPattern`] — a compiled date-only pattern in the familiar
//!   `uuuu`/`yyyy`/`MM`/`dd` letter notation, used for month labels.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

use crate::error::{Error, Result};

/// Pattern used for month labels when none is given: `202010`.
pub const DEFAULT_MONTH_PATTERN: &str = "yyyyMM";

const NANOS_PER_SECOND: u32 = 1_000_000_000;

// ═══════════════════════════════════════════════════════════════════════════
// Date-time layout
// ═══════════════════════════════════════════════════════════════════════════

/// Renders `date_time` as `yyyy-MM-dd HH:mm:ss` followed by `.` and the
/// fraction of a second with trailing zeros removed (nothing at all when the
/// fraction is zero).
///
/// The year is padded to four digits; years above 9999 carry a `+`.
///
/// ```
/// use chrono::NaiveDate;
/// use datewise::format_date_time;
///
/// let day = NaiveDate::from_ymd_opt(2020, 10, 9).unwrap();
/// assert_eq!(
///     format_date_time(day.and_hms_opt(0, 0, 0).unwrap()),
///     "2020-10-09 00:00:00"
/// );
/// assert_eq!(
///     format_date_time(day.and_hms_milli_opt(8, 30, 0, 500).unwrap()),
///     "2020-10-09 08:30:00.5"
/// );
/// ```
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    DateTimeDisplay(date_time).to_string()
}

/// [`Display`](fmt::Display) adapter behind [`format_date_time`], for
/// writing into an existing buffer without an intermediate `String`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateTimeDisplay(pub NaiveDateTime);

impl fmt::Display for DateTimeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.0;
        write_year(f, dt.year(), 4, true)?;
        write!(f, "-{:02}-{:02} ", dt.month(), dt.day())?;

        // chrono encodes a leap second as nanos in 1e9..2e9 of second 59.
        let (second, nanos) = if dt.nanosecond() >= NANOS_PER_SECOND {
            (dt.second() + 1, dt.nanosecond() - NANOS_PER_SECOND)
        } else {
            (dt.second(), dt.nanosecond())
        };
        write!(f, "{:02}:{:02}:{:02}", dt.hour(), dt.minute(), second)?;

        if nanos != 0 {
            let digits = format!("{nanos:09}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

/// Writes `year` zero-padded to `width`.  Negative years always carry `-`;
/// with `sign_when_wide`, years needing more than `width` digits carry `+`.
fn write_year<W: fmt::Write>(
    out: &mut W,
    year: i32,
    width: usize,
    sign_when_wide: bool,
) -> fmt::Result {
    let digits = year.unsigned_abs();
    if year < 0 {
        out.write_char('-')?;
    } else if sign_when_wide && digits.to_string().len() > width {
        out.write_char('+')?;
    }
    write!(out, "{digits:0width$}")
}

// ═══════════════════════════════════════════════════════════════════════════
// MonthPattern
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `u` is the signed proleptic year, `y` the year of era.
    Year {
        width: usize,
        sign_when_wide: bool,
        of_era: bool,
    },
    TwoDigitYear {
        of_era: bool,
    },
    Month { width: usize },
    Day { width: usize },
    Literal(String),
}

/// A compiled date-only pattern.
///
/// | Letters | Output for 2020-03-07 | Output for -0044-03-07 |
/// |---------|-----------------------|------------------------|
/// | `uuuu`  | `2020` (4+ digits, `+` beyond 9999) | `-0044` |
/// | `u`, `uuu` | `2020` (no `+`) | `-44` |
/// | `uu`    | `20` | `44` |
/// | `yyyy`  | `2020` | `0045` (year of era) |
/// | `y`, `yyy` | `2020` | `45` |
/// | `yy`    | `20` | `45` |
/// | `MM` / `M` | `03` / `3` | `03` / `3` |
/// | `dd` / `d` | `07` / `7` | `07` / `7` |
/// | `'text'` | `text` (`''` is a single quote) | `text` |
/// | `[` ... `]` | the enclosed fields, brackets dropped | |
///
/// `y` counts years of the era, so year 0 is `1` and year -44 is `45`; it is
/// never negative.  Any other non-letter is copied through, except the
/// reserved `{`, `}` and `#`.  Other letters (time fields, text month names,
/// eras, ...) are rejected at compile time, as is a `]` with no open `[`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPattern {
    source: String,
    segments: Vec<Segment>,
}

impl MonthPattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPattern`] for unsupported letters, over-long fields,
    /// reserved characters, unterminated quotes and unbalanced `]`.
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason: String| {
            tracing::debug!(pattern, %reason, "rejected label pattern");
            Error::InvalidPattern {
                pattern: pattern.to_owned(),
                reason,
            }
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();
        let mut optional_depth = 0usize;

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            literal.push('\'');
                        } else {
                            closed = true;
                            break;
                        }
                    } else {
                        literal.push(q);
                    }
                }
                if !closed {
                    return Err(invalid("unterminated quoted literal".into()));
                }
                continue;
            }

            // Date fields always resolve, so an optional section always prints.
            match c {
                '[' => {
                    optional_depth += 1;
                    continue;
                }
                ']' => {
                    if optional_depth == 0 {
                        return Err(invalid("']' without a preceding '['".into()));
                    }
                    optional_depth -= 1;
                    continue;
                }
                '{' | '}' | '#' => {
                    return Err(invalid(format!("reserved character '{c}'")));
                }
                _ => {}
            }

            if !c.is_ascii_alphabetic() {
                literal.push(c);
                continue;
            }

            let mut count = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                count += 1;
            }
            let segment = match (c, count) {
                ('y' | 'u', 2) => Segment::TwoDigitYear { of_era: c == 'y' },
                ('y' | 'u', n) => Segment::Year {
                    width: n,
                    sign_when_wide: n >= 4,
                    of_era: c == 'y',
                },
                ('M', n @ 1..=2) => Segment::Month { width: n },
                ('d', n @ 1..=2) => Segment::Day { width: n },
                ('M' | 'd', n) => {
                    return Err(invalid(format!("field '{c}' repeated {n} times")));
                }
                _ => return Err(invalid(format!("unsupported field letter '{c}'"))),
            };
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: pattern.to_owned(),
            segments,
        })
    }

    /// The pattern text this was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders `date` through the pattern.
    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::with_capacity(self.source.len() + 4);
        self.write_to(&mut out, date)
            .expect("writing into a String cannot fail");
        out
    }

    fn write_to<W: fmt::Write>(&self, out: &mut W, date: NaiveDate) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Year {
                    width,
                    sign_when_wide,
                    of_era,
                } => {
                    let year = if *of_era {
                        year_of_era(date.year())
                    } else {
                        date.year()
                    };
                    write_year(out, year, *width, *sign_when_wide)?;
                }
                Segment::TwoDigitYear { of_era } => {
                    let year = if *of_era {
                        year_of_era(date.year())
                    } else {
                        date.year()
                    };
                    write!(out, "{:02}", year.unsigned_abs() % 100)?;
                }
                Segment::Month { width } => write!(out, "{:0w$}", date.month(), w = *width)?,
                Segment::Day { width } => write!(out, "{:0w$}", date.day(), w = *width)?,
                Segment::Literal(text) => out.write_str(text)?,
            }
        }
        Ok(())
    }
}

/// Year counted within its era: 1 BCE is proleptic year 0.
#[inline]
fn year_of_era(year: i32) -> i32 {
    if year > 0 {
        year
    } else {
        1 - year
    }
}

impl Default for MonthPattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_MONTH_PATTERN.to_owned(),
            segments: vec![
                Segment::Year {
                    width: 4,
                    sign_when_wide: true,
                    of_era: true,
                },
                Segment::Month { width: 2 },
            ],
        }
    }
}

impl std::str::FromStr for MonthPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for MonthPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
