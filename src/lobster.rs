//! The lobster actor: identity, position and heading on an unbounded grid.

use crate::direction::Direction;
use crate::error::{LobsterError, Result};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide ids for lobsters created through [`Lobster::new`].
static GLOBAL_IDS: IdCounter = IdCounter::new();

/// Identity of a lobster. Unique per [`IdCounter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobsterId(pub u64);

impl fmt::Display for LobsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id generator.
///
/// Ids are handed out with an atomic increment, so a counter shared between
/// threads still never repeats an id. Ids are contiguous in the order
/// [`next_id`](Self::next_id) calls complete.
///
/// The counter never wraps. `u64::MAX` is never issued: once the next id
/// would be `u64::MAX`, [`next_id`](Self::next_id) fails with
/// [`LobsterError::IdsExhausted`] and keeps failing.
#[derive(Debug, Default)]
pub struct IdCounter {
    next: AtomicU64,
}

impl IdCounter {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Takes the next id and advances the counter.
    pub fn next_id(&self) -> Result<LobsterId> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map(LobsterId)
            .map_err(|_| LobsterError::IdsExhausted)
    }

    /// The id the next call to [`next_id`](Self::next_id) would return.
    pub fn peek(&self) -> LobsterId {
        LobsterId(self.next.load(Ordering::Relaxed))
    }
}

/// A movable actor with a grid position and a heading.
///
/// Not `Clone`: a copy would share its id with the original.
#[derive(Debug)]
pub struct Lobster {
    id: LobsterId,
    position: Point,
    direction: Direction,
}

impl Lobster {
    /// Creates a lobster with an id from the process-wide counter.
    ///
    /// Use [`with_counter`](Self::with_counter) or a
    /// [`Hatchery`](crate::Hatchery) when ids must be predictable.
    ///
    /// # Panics
    ///
    /// If the process-wide counter is exhausted.
    pub fn new(position: Point, direction: Direction) -> Self {
        Self::with_counter(&GLOBAL_IDS, position, direction)
    }

    /// Creates a lobster at `position` facing the default heading (east).
    ///
    /// # Panics
    ///
    /// If the process-wide counter is exhausted.
    pub fn at(position: Point) -> Self {
        Self::new(position, Direction::default())
    }

    /// Creates a lobster with an id drawn from `ids`.
    ///
    /// # Panics
    ///
    /// If `ids` is exhausted. Use [`try_with_counter`](Self::try_with_counter)
    /// when the counter may start near the top of the id range.
    pub fn with_counter(ids: &IdCounter, position: Point, direction: Direction) -> Self {
        match Self::try_with_counter(ids, position, direction) {
            Ok(lobster) => lobster,
            Err(err) => panic!("cannot create lobster: {err}"),
        }
    }

    /// Creates a lobster with an id drawn from `ids`, failing once `ids` is exhausted.
    pub fn try_with_counter(
        ids: &IdCounter,
        position: Point,
        direction: Direction,
    ) -> Result<Self> {
        Ok(Self {
            id: ids.next_id()?,
            position,
            direction,
        })
    }

    pub fn id(&self) -> LobsterId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves `steps` cells along the current heading.
    ///
    /// Negative counts walk backwards, zero does nothing. No bounds apply.
    pub fn step(&mut self, steps: i64) {
        let from = self.position;
        self.position += Point::from_direction(self.direction) * steps;
        tracing::trace!(id = %self.id, %from, to = %self.position, steps, "lobster stepped");
    }

    /// Moves a single cell forward.
    pub fn advance(&mut self) {
        self.step(1);
    }

    /// Rotates clockwise by `offset` quarter-turns, wrapping modulo 4.
    pub fn turn(&mut self, offset: i64) {
        let from = self.direction;
        self.direction += offset;
        tracing::trace!(id = %self.id, %from, to = %self.direction, offset, "lobster turned");
    }

    /// Serializable copy of the current state.
    pub fn snapshot(&self) -> LobsterState {
        LobsterState {
            id: self.id,
            position: self.position,
            direction: self.direction,
        }
    }
}

impl Default for Lobster {
    fn default() -> Self {
        Self::new(Point::ORIGIN, Direction::East)
    }
}

impl fmt::Display for Lobster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lobster {} at {} facing {}",
            self.id, self.position, self.direction
        )
    }
}

/// Point-in-time record of a lobster, for diagnostics and dumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobsterState {
    pub id: LobsterId,
    pub position: Point,
    pub direction: Direction,
}
