//! Travel directions for passengers and cars.
//!
//! A passenger's [`Direction`] is a two-valued tag derived from its floor
//! pair at construction time — it is never stored independently, which keeps
//! it consistent with origin/destination by construction.  A car's
//! [`Heading`] adds the `Idle` state for cars with nothing to do.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// The direction a passenger wants to travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Derive the travel direction for a floor pair.
    ///
    /// `Up` iff `destination > origin`.  Callers must reject degenerate
    /// (equal-floor) pairs before calling; for equal floors this returns
    /// `Down`, matching integer comparison.
    #[inline]
    pub fn between(origin: u32, destination: u32) -> Direction {
        if destination > origin { Direction::Up } else { Direction::Down }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

// ── Heading ───────────────────────────────────────────────────────────────────

/// The movement state of a car: travelling up, travelling down, or idle.
///
/// Invariant (enforced by `lift-car`): a car's heading is `Idle` iff its stop
/// queue and cabin are both empty.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Up,
    Down,
    #[default]
    Idle,
}

impl Heading {
    /// The heading needed to travel from `from` toward `to`.
    ///
    /// Returns `Idle` when the floors are equal (no movement required).
    #[inline]
    pub fn toward(from: u32, to: u32) -> Heading {
        use std::cmp::Ordering;
        match to.cmp(&from) {
            Ordering::Greater => Heading::Up,
            Ordering::Less => Heading::Down,
            Ordering::Equal => Heading::Idle,
        }
    }

    /// Does this heading serve passengers travelling in `direction`?
    #[inline]
    pub fn matches(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Heading::Up, Direction::Up) | (Heading::Down, Direction::Down)
        )
    }

    /// The travel direction, or `None` when idle.
    #[inline]
    pub fn as_direction(self) -> Option<Direction> {
        match self {
            Heading::Up => Some(Direction::Up),
            Heading::Down => Some(Direction::Down),
            Heading::Idle => None,
        }
    }
}

impl From<Direction> for Heading {
    #[inline]
    fn from(d: Direction) -> Heading {
        match d {
            Direction::Up => Heading::Up,
            Direction::Down => Heading::Down,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Up => write!(f, "up"),
            Heading::Down => write!(f, "down"),
            Heading::Idle => write!(f, "idle"),
        }
    }
}
