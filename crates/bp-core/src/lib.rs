//! Core domain logic for busiest break period detection.
//!
//! This crate contains:
//! - Clock: the minute-of-day type every record lives on
//! - Intervals: parsing and validating `hh:mmhh:mm` break records
//! - Count table: per-minute overlap accounting and peak finding

pub mod clock;
pub mod interval;
mod table;

pub use clock::{ClockError, MINUTES_PER_DAY, Minute};
pub use interval::{ClockField, ErrorKind, Interval, ParseError, RejectReason, parse_interval};
pub use table::{CountTable, PeakWindow};
