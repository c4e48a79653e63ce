//! Cardinal headings and quarter-turn rotation.

use crate::error::{LobsterError, Result};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// One of the four compass headings.
///
/// Ordinals run clockwise on screen (y grows downward): east, south, west,
/// north. Adding an offset rotates by that many quarter-turns; the result is
/// always reduced modulo 4, so rotation can never leave the four variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    #[default]
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Direction {
    /// All headings in ordinal order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Position of this heading in the clockwise cycle, `0..=3`.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up the heading with the given ordinal.
    ///
    /// Unlike [`rotated`](Self::rotated) this does not wrap: anything outside
    /// `0..=3` is rejected with [`LobsterError::InvalidDirection`].
    pub fn from_ordinal(ordinal: i64) -> Result<Self> {
        match ordinal {
            0..=3 => Ok(Self::ALL[ordinal as usize]),
            _ => Err(LobsterError::InvalidDirection(ordinal)),
        }
    }

    /// Rotates clockwise by `offset` quarter-turns (negative turns counter-clockwise).
    pub fn rotated(self, offset: i64) -> Self {
        // rem_euclid first so the sum cannot overflow for extreme offsets.
        let index = (i64::from(self.ordinal()) + offset.rem_euclid(4)) % 4;
        Self::ALL[index as usize]
    }

    /// Upper-case name, e.g. `"NORTH"`.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
            Direction::North => "NORTH",
        }
    }

    /// Unit displacement of one step along this heading.
    pub fn unit(self) -> Point {
        Point::from_direction(self)
    }
}

impl TryFrom<i64> for Direction {
    type Error = LobsterError;

    fn try_from(ordinal: i64) -> Result<Self> {
        Self::from_ordinal(ordinal)
    }
}

impl Add<i64> for Direction {
    type Output = Direction;

    fn add(self, offset: i64) -> Direction {
        self.rotated(offset)
    }
}

impl Sub<i64> for Direction {
    type Output = Direction;

    fn sub(self, offset: i64) -> Direction {
        // Turning back by `offset` is turning forward by `4 - offset mod 4`;
        // avoids negating i64::MIN.
        self.rotated(4 - offset.rem_euclid(4))
    }
}

impl AddAssign<i64> for Direction {
    fn add_assign(&mut self, offset: i64) {
        *self = *self + offset;
    }
}

impl SubAssign<i64> for Direction {
    fn sub_assign(&mut self, offset: i64) {
        *self = *self - offset;
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = LobsterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LobsterError::UnknownDirection(s.to_string()))
    }
}
