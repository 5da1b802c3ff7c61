//! Break interval records and their text format.
//!
//! A record is written `hh:mmhh:mm`: the start time immediately followed by
//! the end time, each field exactly two digits. Both ends are inclusive and
//! must fall on the same day.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::clock::{HOURS_PER_DAY, MINUTES_PER_HOUR, Minute};

/// Pre-compiled pattern for a whole record line.
static RECORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})([0-9]{2}):([0-9]{2})$").unwrap());

/// One of the four numeric fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockField {
    StartHour,
    StartMinute,
    EndHour,
    EndMinute,
}

impl ClockField {
    /// Human-readable field name, capitalised for the start of a sentence.
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartHour => "Start hour",
            Self::StartMinute => "Start minute",
            Self::EndHour => "End hour",
            Self::EndMinute => "End minute",
        }
    }

    /// Largest value the field accepts.
    pub const fn max_value(self) -> u16 {
        match self {
            Self::StartHour | Self::EndHour => HOURS_PER_DAY - 1,
            Self::StartMinute | Self::EndMinute => MINUTES_PER_HOUR - 1,
        }
    }
}

impl fmt::Display for ClockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a record was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The line is not four two-digit fields in `hh:mmhh:mm` layout.
    #[error("Pattern does not match.")]
    PatternMismatch,

    /// A field exceeds its bound.
    #[error("{field} value is too large.")]
    ValueTooLarge { field: ClockField, value: u16 },

    /// The start of the break comes after its end.
    #[error("Start time exceeds end time.")]
    StartAfterEnd { start: Minute, end: Minute },
}

/// Broad class of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The line has the wrong shape.
    Format,
    /// A numeric field is out of bounds.
    Range,
    /// Start and end are in the wrong order.
    Ordering,
}

/// A record line that could not be turned into an [`Interval`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed parsing time range `{line}`! {reason}")]
pub struct ParseError {
    line: String,
    reason: RejectReason,
}

impl ParseError {
    fn new(line: &str, reason: RejectReason) -> Self {
        Self {
            line: line.to_string(),
            reason,
        }
    }

    /// The offending input, verbatim.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub const fn reason(&self) -> &RejectReason {
        &self.reason
    }

    pub const fn kind(&self) -> ErrorKind {
        match self.reason {
            RejectReason::PatternMismatch => ErrorKind::Format,
            RejectReason::ValueTooLarge { .. } => ErrorKind::Range,
            RejectReason::StartAfterEnd { .. } => ErrorKind::Ordering,
        }
    }
}

/// A validated, inclusive break on the minute clock.
///
/// `start <= end` always holds; a one-minute break has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Minute,
    end: Minute,
}

impl Interval {
    /// Creates an interval, rejecting a start after the end.
    pub fn new(start: Minute, end: Minute) -> Result<Self, RejectReason> {
        if start > end {
            return Err(RejectReason::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> Minute {
        self.start
    }

    pub const fn end(&self) -> Minute {
        self.end
    }

    /// Number of minutes covered, counting both ends.
    pub const fn len_minutes(&self) -> usize {
        self.end.index() - self.start.index() + 1
    }

    pub fn contains(&self, minute: Minute) -> bool {
        self.start <= minute && minute <= self.end
    }

    /// Table positions covered by this interval.
    pub const fn indices(&self) -> RangeInclusive<usize> {
        self.start.index()..=self.end.index()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
    }
}

/// Reads the two-digit field in capture group `group`.
fn two_digits(caps: &Captures<'_>, group: usize) -> u16 {
    caps[group]
        .bytes()
        .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
}

/// Parses and validates one record line.
///
/// Checks run in a fixed order and the first failure wins: pattern, start
/// hour, start minute, end hour, end minute, then ordering.
pub fn parse_interval(line: &str) -> Result<Interval, ParseError> {
    let Some(caps) = RECORD_RE.captures(line) else {
        return Err(ParseError::new(line, RejectReason::PatternMismatch));
    };

    let fields = [
        (ClockField::StartHour, two_digits(&caps, 1)),
        (ClockField::StartMinute, two_digits(&caps, 2)),
        (ClockField::EndHour, two_digits(&caps, 3)),
        (ClockField::EndMinute, two_digits(&caps, 4)),
    ];
    for (field, value) in fields {
        if value > field.max_value() {
            return Err(ParseError::new(
                line,
                RejectReason::ValueTooLarge { field, value },
            ));
        }
    }

    let [(_, start_hour), (_, start_minute), (_, end_hour), (_, end_minute)] = fields;
    let start = Minute::from_checked_hm(start_hour, start_minute);
    let end = Minute::from_checked_hm(end_hour, end_minute);

    Interval::new(start, end).map_err(|reason| ParseError::new(line, reason))
}
