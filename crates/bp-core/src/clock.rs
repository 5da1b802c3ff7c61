//! Minute-of-day clock on a single 24-hour day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const HOURS_PER_DAY: u16 = 24;
pub const MINUTES_PER_HOUR: u16 = 60;
const DAY_LENGTH: u16 = HOURS_PER_DAY * MINUTES_PER_HOUR;
pub const MINUTES_PER_DAY: usize = DAY_LENGTH as usize;

/// Errors building a [`Minute`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The offset does not fit on the clock.
    #[error("minute of day must be below 1440, got {value}")]
    OutOfRange { value: u16 },

    /// Hour component above 23.
    #[error("hour must be at most 23, got {hour}")]
    HourTooLarge { hour: u16 },

    /// Minute component above 59.
    #[error("minute must be at most 59, got {minute}")]
    MinuteTooLarge { minute: u16 },

    /// Text is not a zero-padded `HH:MM` time.
    #[error("expected a time formatted as HH:MM, got `{value}`")]
    InvalidFormat { value: String },
}

/// An offset in minutes from midnight, in `[0, 1439]`.
///
/// There is no date and no timezone: every `Minute` lives on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Minute(u16);

impl Minute {
    /// Midnight, `00:00`.
    pub const FIRST: Self = Self(0);

    /// The last minute of the day, `23:59`.
    pub const LAST: Self = Self(DAY_LENGTH - 1);

    /// Creates a minute from a raw offset.
    pub const fn new(value: u16) -> Result<Self, ClockError> {
        if value >= DAY_LENGTH {
            return Err(ClockError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Creates a minute from hour and minute components.
    pub const fn from_hm(hour: u16, minute: u16) -> Result<Self, ClockError> {
        if hour >= HOURS_PER_DAY {
            return Err(ClockError::HourTooLarge { hour });
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(ClockError::MinuteTooLarge { minute });
        }
        Ok(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Combines components the caller has already bounds-checked.
    pub(crate) const fn from_checked_hm(hour: u16, minute: u16) -> Self {
        debug_assert!(hour < HOURS_PER_DAY && minute < MINUTES_PER_HOUR);
        Self(hour * MINUTES_PER_HOUR + minute)
    }

    pub const fn hour(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub const fn minute(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    /// The raw offset from midnight.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Position of this minute in a per-minute table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every minute of the day, in order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..DAY_LENGTH).map(Minute)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for Minute {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClockError::InvalidFormat {
            value: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let (hh, mm) = (&s[..2], &s[3..]);
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour = hh.parse().map_err(|_| invalid())?;
        let minute = mm.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for Minute {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Minute> for String {
    fn from(minute: Minute) -> Self {
        minute.to_string()
    }
}
