//! Sleep cycle length and cycle-count sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Length of one sleep cycle, in minutes.
pub const CYCLE_MINUTES: i64 = 90;

/// Cycle counts offered for a full night.
pub const DEFAULT_CYCLES: [i32; 3] = [4, 5, 6];

/// Cycle counts offered for a nap.
pub const NAP_CYCLES: [i32; 2] = [2, 3];

/// Ordered cycle counts to allot, e.g. `4,5,6`.
///
/// Order is significant and preserved by every calculation. Zero and negative
/// counts are accepted; they yield instants at or before the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CycleCountRepr", into = "Vec<i32>")]
pub struct CycleCountSet(Vec<i32>);

impl CycleCountSet {
    /// Creates a set from counts in the given order.
    pub fn new(counts: Vec<i32>) -> Self {
        Self(counts)
    }

    /// The full-night set `{4, 5, 6}`.
    pub fn standard() -> Self {
        Self(DEFAULT_CYCLES.to_vec())
    }

    /// The nap set `{2, 3}`.
    pub fn nap() -> Self {
        Self(NAP_CYCLES.to_vec())
    }

    pub fn counts(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
}

/// Minutes spanned by `cycles` sleep cycles.
pub fn cycle_minutes(cycles: i32) -> i64 {
    i64::from(cycles) * CYCLE_MINUTES
}

impl Default for CycleCountSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<CycleCountSet> for Vec<i32> {
    fn from(set: CycleCountSet) -> Self {
        set.0
    }
}

impl fmt::Display for CycleCountSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for count in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", count)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for CycleCountSet {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ValidationError::empty_field("cycles"));
        }

        s.split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<i32>().map_err(|_| {
                    ValidationError::invalid_format(
                        "cycles",
                        format!("'{}' is not a whole number", part),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Accepted config shapes: a list (`[4, 5, 6]`) or a string (`"4,5,6"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum CycleCountRepr {
    List(Vec<i32>),
    Text(String),
}

impl TryFrom<CycleCountRepr> for CycleCountSet {
    type Error = ValidationError;

    fn try_from(repr: CycleCountRepr) -> Result<Self, Self::Error> {
        match repr {
            CycleCountRepr::List(counts) => Ok(Self(counts)),
            CycleCountRepr::Text(text) => text.parse(),
        }
    }
}
