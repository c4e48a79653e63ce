//! Integer grid vectors, used both as positions and as displacements.

use crate::direction::Direction;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An immutable 2D integer vector.
///
/// Uses screen coordinates: `x` grows to the east, `y` grows to the south.
/// Equality and hashing compare both coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Unit displacement for one step along `direction`.
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::East => Self::new(1, 0),
            Direction::South => Self::new(0, 1),
            Direction::West => Self::new(-1, 0),
            Direction::North => Self::new(0, -1),
        }
    }

    /// Taxicab distance from the origin.
    pub fn manhattan_length(self) -> u64 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }
}

impl From<Direction> for Point {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<I64Vec2> for Point {
    fn from(v: I64Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for I64Vec2 {
    fn from(p: Point) -> Self {
        I64Vec2::new(p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Scales both coordinates.
impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, k: i64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

/// Elementwise (Hadamard) product.
impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl MulAssign<i64> for Point {
    fn mul_assign(&mut self, k: i64) {
        *self = *self * k;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={},y={})", self.x, self.y)
    }
}
