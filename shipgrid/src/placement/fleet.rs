use std::{collections::BTreeMap, fmt, iter::FromIterator, str::FromStr};

use crate::placement::ParseFleetError;

/// Number of ships of each length that make up a fleet.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FleetSpec(BTreeMap<usize, usize>);

impl FleetSpec {
    /// An empty fleet.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The fleet of the standard 13x13 game: four ships of length 3, three of length
    /// 4, and two each of lengths 5 and 6.
    pub fn standard() -> Self {
        [(3, 4), (4, 3), (5, 2), (6, 2)].iter().copied().collect()
    }

    /// Add `count` ships of the given length. The count of a length saturates at
    /// `usize::max_value()`.
    pub fn add(&mut self, length: usize, count: usize) -> &mut Self {
        if count > 0 {
            let total = self.0.entry(length).or_insert(0);
            *total = total.saturating_add(count);
        }
        self
    }

    /// Number of ships of the given length.
    pub fn count_of(&self, length: usize) -> usize {
        self.0.get(&length).copied().unwrap_or(0)
    }

    /// Iterate `(length, count)` pairs from the shortest length to the longest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&length, &count)| (length, count))
    }

    /// The distinct ship lengths, shortest first.
    pub fn lengths(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    /// Total number of ships, saturating at `usize::max_value()`.
    pub fn total_ships(&self) -> usize {
        self.0.values().fold(0, |total, &count| total.saturating_add(count))
    }

    /// Total number of cells covered by all ships, saturating at `usize::max_value()`.
    pub fn total_cells(&self) -> usize {
        self.iter().fold(0, |total, (length, count)| {
            total.saturating_add(length.saturating_mul(count))
        })
    }

    /// Returns true if the fleet has no ships.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(usize, usize)> for FleetSpec {
    /// Collect `(length, count)` pairs. Repeated lengths are summed.
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        let mut fleet = FleetSpec::new();
        for (length, count) in iter {
            fleet.add(length, count);
        }
        fleet
    }
}

impl FromStr for FleetSpec {
    type Err = ParseFleetError;

    /// Parse a comma separated list of `LENGTH:COUNT` entries, e.g. `"3:4,4:3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|entry| -> Result<(usize, usize), ParseFleetError> {
                let entry = entry.trim();
                let mut parts = entry.splitn(2, ':');
                match (parts.next(), parts.next()) {
                    (Some(length), Some(count)) => Ok((
                        parse_number(entry, length)?,
                        parse_number(entry, count)?,
                    )),
                    _ => Err(ParseFleetError::Malformed(entry.to_owned())),
                }
            })
            .collect()
    }
}

fn parse_number(entry: &str, part: &str) -> Result<usize, ParseFleetError> {
    part.trim()
        .parse()
        .map_err(|source| ParseFleetError::InvalidNumber {
            entry: entry.to_owned(),
            source,
        })
}

impl fmt::Display for FleetSpec {
    /// Formats in the same `LENGTH:COUNT,...` form that [`FromStr`] accepts.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (length, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", length, count)?;
        }
        Ok(())
    }
}
