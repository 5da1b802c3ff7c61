//! Per-minute overlap counts and busiest-period detection.
//!
//! The day has only 1440 minutes, so the table is a dense array and the
//! peak is recomputed with a full scan on every request.

use std::fmt;

use serde::Serialize;

use crate::clock::{MINUTES_PER_DAY, Minute};
use crate::interval::Interval;

/// The longest stretch of minutes sharing the day's highest overlap count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PeakWindow {
    /// First minute of the window.
    pub start: Minute,
    /// Last minute of the window, inclusive.
    pub end: Minute,
    /// Number of breaks covering every minute of the window.
    pub drivers: u32,
}

impl PeakWindow {
    pub const fn len_minutes(&self) -> usize {
        self.end.index() - self.start.index() + 1
    }
}

impl fmt::Display for PeakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.drivers > 1 { "s" } else { "" };
        write!(
            f,
            "Busiest range is {}-{} with {} driver{plural} taking a break.",
            self.start, self.end, self.drivers
        )
    }
}

/// Running count of accepted breaks covering each minute of the day.
///
/// Counts only ever grow: [`CountTable::apply`] is the sole mutator and
/// there is no way to remove a break once applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable {
    counts: [u32; MINUTES_PER_DAY],
    accepted: usize,
}

impl Default for CountTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CountTable {
    /// Creates an all-zero table.
    pub const fn new() -> Self {
        Self {
            counts: [0; MINUTES_PER_DAY],
            accepted: 0,
        }
    }

    /// Records one break, bumping every minute it covers.
    pub fn apply(&mut self, interval: Interval) {
        for count in &mut self.counts[interval.indices()] {
            *count += 1;
        }
        self.accepted += 1;
        tracing::trace!(%interval, accepted = self.accepted, "applied interval");
    }

    /// Finds the busiest period of the day.
    ///
    /// Among all runs of minutes at the maximum count the longest one is
    /// reported; between runs of equal length the earliest wins. With no
    /// breaks applied the whole day is one run at zero.
    pub fn find_peak(&self) -> PeakWindow {
        let max = self.counts.iter().copied().max().unwrap_or(0);

        let mut best: Option<(Minute, Minute)> = None;
        let mut open: Option<Minute> = None;
        let mut previous = Minute::FIRST;

        for (minute, &count) in Minute::all().zip(&self.counts) {
            if count == max {
                open.get_or_insert(minute);
            } else if let Some(start) = open.take() {
                best = keep_longer(best, (start, previous));
            }
            previous = minute;
        }
        if let Some(start) = open {
            best = keep_longer(best, (start, Minute::LAST));
        }

        let (start, end) = best.unwrap_or((Minute::FIRST, Minute::LAST));
        PeakWindow {
            start,
            end,
            drivers: max,
        }
    }

    /// Raw per-minute counts, indexed by [`Minute::index`].
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub const fn count_at(&self, minute: Minute) -> u32 {
        self.counts[minute.index()]
    }

    /// Sum of all counts: the total break minutes recorded.
    pub fn total_area(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Number of breaks applied so far.
    pub const fn accepted(&self) -> usize {
        self.accepted
    }

    pub const fn is_empty(&self) -> bool {
        self.accepted == 0
    }
}

/// Replaces `best` only when `run` is strictly longer.
fn keep_longer(
    best: Option<(Minute, Minute)>,
    run: (Minute, Minute),
) -> Option<(Minute, Minute)> {
    let len = |(start, end): (Minute, Minute)| end.index() - start.index();
    match best {
        Some(current) if len(current) >= len(run) => Some(current),
        _ => Some(run),
    }
}
