//! # superlobster
//!
//! The geometry and actor kernel of the Superlobster esoteric language.
//!
//! A [`Lobster`] sits on an unbounded integer grid, holding a [`Point`]
//! position and a [`Direction`] heading. An interpreter drives it with two
//! moves: [`Lobster::step`] walks along the heading, [`Lobster::turn`] rotates
//! it in quarter-turns. Coordinates are screen-style, so north is `-y`.

pub mod direction;
pub mod error;
pub mod hatchery;
pub mod lobster;
pub mod point;

pub use direction::*;
pub use error::*;
pub use hatchery::*;
pub use lobster::*;
pub use point::*;
