//! Exponential-decay smoothing of the lens position.
//!
//! Every animation frame the smoothed position moves a fixed fraction of
//! the remaining distance toward the target. This damps high-frequency
//! input noise from touch sensors and turns jittery pointer samples into
//! fluid lens motion. Event handlers write the target; only the frame loop
//! steps the current position (single-writer rule).

#[cfg(test)]
#[path = "smoothing_test.rs"]
mod smoothing_test;

use crate::consts::{SETTLE_EPSILON_PX, SMOOTHING_FACTOR};
use crate::geometry::Point;

/// Smoothed position chasing a target position.
#[derive(Debug, Clone, Copy)]
pub struct Follower {
    current: Point,
    target: Point,
    factor: f64,
}

impl Default for Follower {
    fn default() -> Self {
        Self { current: Point::default(), target: Point::default(), factor: SMOOTHING_FACTOR }
    }
}

impl Follower {
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor: factor.clamp(f64::MIN_POSITIVE, 1.0), ..Self::default() }
    }

    /// Place current and target on the same point, e.g. at gesture start.
    /// Seeding both prevents a visible snap on the first frame.
    pub fn seed(&mut self, pt: Point) {
        self.current = pt;
        self.target = pt;
    }

    /// Move the chase target. The smoothed position is untouched; it will
    /// converge over subsequent [`Follower::step`] calls.
    pub fn set_target(&mut self, pt: Point) {
        self.target = pt;
    }

    /// Advance one animation frame:
    /// `current += (target - current) * factor`.
    pub fn step(&mut self) -> Point {
        self.current.x += (self.target.x - self.current.x) * self.factor;
        self.current.y += (self.target.y - self.current.y) * self.factor;
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether the smoothed position has effectively reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current.distance_to(self.target) < SETTLE_EPSILON_PX
    }
}
