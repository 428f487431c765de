//! Remaining-fleet summaries for display.
use std::{collections::BTreeMap, fmt};

use crate::placement::FleetSpec;

/// Markers used in the text form of a [`FleetStatus`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StatusSymbols {
    /// Drawn for lengths that still have ships afloat.
    pub remaining: char,
    /// Drawn for lengths whose ships are all sunk.
    pub sunk: char,
}

impl Default for StatusSymbols {
    fn default() -> Self {
        Self {
            remaining: '☐',
            sunk: '☒',
        }
    }
}

/// How many ships of one length the fleet had and how many are left.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FleetEntry {
    /// Length of the ships.
    pub length: usize,
    /// Ships of this length in the fleet.
    pub total: usize,
    /// Ships of this length still afloat.
    pub remaining: usize,
}

/// Snapshot of the fleet still to sink, ordered from the shortest length to the
/// longest.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetStatus {
    entries: Vec<FleetEntry>,
}

impl FleetStatus {
    /// Build a status from the configured fleet and the ships of each length still
    /// afloat. Lengths missing from `to_sink` count as fully sunk.
    pub fn new(fleet: &FleetSpec, to_sink: &BTreeMap<usize, usize>) -> Self {
        Self {
            entries: fleet
                .iter()
                .map(|(length, total)| FleetEntry {
                    length,
                    total,
                    remaining: to_sink.get(&length).copied().unwrap_or(0),
                })
                .collect(),
        }
    }

    /// Per-length entries.
    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    /// Total ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.entries.iter().map(|e| e.remaining).sum()
    }

    /// Returns true if nothing is left to sink.
    pub fn won(&self) -> bool {
        self.entries.iter().all(|e| e.remaining == 0)
    }

    /// Wraps this status for display with custom markers.
    pub fn display_with(&self, symbols: StatusSymbols) -> StatusText<'_> {
        StatusText {
            status: self,
            symbols,
        }
    }
}

impl fmt::Display for FleetStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(StatusSymbols::default()), f)
    }
}

/// Display helper that prints a [`FleetStatus`] with the given markers.
#[derive(Debug, Copy, Clone)]
pub struct StatusText<'a> {
    status: &'a FleetStatus,
    symbols: StatusSymbols,
}

impl fmt::Display for StatusText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.status.won() {
            return f.write_str("Nothing to sink -- YOU WON");
        }
        f.write_str("To sink: ")?;
        for entry in self.status.entries() {
            let marker = if entry.remaining == 0 {
                self.symbols.sunk
            } else {
                self.symbols.remaining
            };
            write!(f, "{} x ", entry.remaining)?;
            for _ in 0..entry.length {
                write!(f, "{}", marker)?;
            }
            f.write_str("   ")?;
        }
        Ok(())
    }
}
