//! Lobster factory with an explicit id counter.
//!
//! The entry point is [`Hatchery`]. Configure where new lobsters appear with a
//! [`HatcheryConfig`], then call [`Hatchery::hatch`] or [`Hatchery::hatch_at`].
//! Each hatchery owns its own [`IdCounter`], so two hatcheries never interfere
//! and tests can rely on ids starting from a known value.

use crate::direction::Direction;
use crate::error::Result;
use crate::lobster::{IdCounter, Lobster};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Configuration for newly hatched lobsters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HatcheryConfig {
    /// Id given to the first lobster.
    pub first_id: u64,
    /// Position used by [`Hatchery::hatch`].
    pub spawn_position: Point,
    /// Heading used by [`Hatchery::hatch`].
    pub spawn_direction: Direction,
}

impl Default for HatcheryConfig {
    fn default() -> Self {
        Self {
            first_id: 0,
            spawn_position: Point::ORIGIN,
            spawn_direction: Direction::East,
        }
    }
}

/// Creates lobsters with ids from a counter it owns.
#[derive(Debug, Default)]
pub struct Hatchery {
    config: HatcheryConfig,
    ids: IdCounter,
    hatched: AtomicU64,
}

impl Hatchery {
    pub fn new(config: HatcheryConfig) -> Self {
        Self {
            ids: IdCounter::starting_at(config.first_id),
            hatched: AtomicU64::new(0),
            config,
        }
    }

    pub fn config(&self) -> &HatcheryConfig {
        &self.config
    }

    /// Hatches a lobster at the configured spawn point and heading.
    pub fn hatch(&self) -> Result<Lobster> {
        self.hatch_at(self.config.spawn_position, self.config.spawn_direction)
    }

    /// Hatches a lobster at an explicit position and heading.
    ///
    /// Fails with [`LobsterError::IdsExhausted`](crate::LobsterError::IdsExhausted)
    /// once every id from `first_id` up to `u64::MAX - 1` has been handed out.
    pub fn hatch_at(&self, position: Point, direction: Direction) -> Result<Lobster> {
        let lobster = Lobster::try_with_counter(&self.ids, position, direction).inspect_err(
            |err| tracing::warn!(first_id = self.config.first_id, %err, "hatchery exhausted"),
        )?;
        self.hatched.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(id = %lobster.id(), %position, %direction, "hatched lobster");
        Ok(lobster)
    }

    /// Number of lobsters hatched so far.
    pub fn hatched(&self) -> u64 {
        self.hatched.load(Ordering::Relaxed)
    }
}
