//! Taxi movement logic
//!
//! Standalone implementation that doesn't depend on Bevy.

use log::debug;

use super::block::{any_collision, Block};
use super::types::{BlockId, Orientation, Rect};

/// Why a movement request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedReason {
    Collision(BlockId), // Candidate overlaps this block
    OutOfBounds,        // Candidate leaves the map
}

/// Result of a movement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Idle,                   // Zero delta, nothing to do
    Moved,                  // Position translated
    Turned,                 // Width/height swapped, position unchanged
    Blocked(BlockedReason), // Request rejected, state unchanged
}

/// The player-controlled taxi
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub orientation: Orientation,
    /// Pixels moved per accepted tick
    pub speed: i32,
}

impl Vehicle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, orientation: Orientation, speed: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            orientation,
            speed,
        }
    }

    /// Current footprint, rebuilt from the live fields
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Apply a movement request of `(dx, dy)`.
    ///
    /// The candidate is the current rectangle translated by the delta. If it
    /// overlaps a block or leaves the map the request is dropped. A request
    /// perpendicular to the current orientation turns the taxi in place and
    /// the translation for that tick is discarded.
    pub fn try_move(
        &mut self,
        dx: i32,
        dy: i32,
        blocks: &[Block],
        map_width: i32,
        map_height: i32,
    ) -> MoveOutcome {
        if dx == 0 && dy == 0 {
            return MoveOutcome::Idle;
        }

        let candidate = self.rect().translated(dx, dy);

        if let Some(block_id) = any_collision(&candidate, blocks) {
            debug!(
                "Move ({}, {}) blocked by block {:?} at ({}, {})",
                dx, dy, block_id.0, self.x, self.y
            );
            return MoveOutcome::Blocked(BlockedReason::Collision(block_id));
        }

        if !candidate.within_bounds(map_width, map_height) {
            debug!(
                "Move ({}, {}) blocked by map edge at ({}, {})",
                dx, dy, self.x, self.y
            );
            return MoveOutcome::Blocked(BlockedReason::OutOfBounds);
        }

        let perpendicular = match self.orientation {
            Orientation::Vertical => dx != 0,
            Orientation::Horizontal => dy != 0,
        };

        if perpendicular {
            self.turn();
            MoveOutcome::Turned
        } else {
            self.x += dx;
            self.y += dy;
            MoveOutcome::Moved
        }
    }

    fn turn(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        self.orientation = self.orientation.flipped();
        debug!("Taxi turned {:?} at ({}, {})", self.orientation, self.x, self.y);
    }
}
