//! Clamped hit point tracks.
//!
//! Health never leaves `0..=max`. The player's track has a fixed maximum of
//! [`MAX_PLAYER_HEALTH`]; enemies start full at whatever maximum their
//! content gives them.

use serde::{Deserialize, Serialize};

/// Maximum (and starting) health of the player.
pub const MAX_PLAYER_HEALTH: i32 = 100;

/// A hit point value clamped between zero and a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Create a full track with the given maximum.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Create a track at a specific value, clamped into range.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Current value.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum value.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Adjust by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = self.current.saturating_add(delta).clamp(0, self.max);
        self.current
    }

    /// Returns true once the track has hit zero.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if the track is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_full() {
        let h = Health::new(MAX_PLAYER_HEALTH);
        assert_eq!(h.current(), 100);
        assert!(h.is_full());
        assert!(!h.is_depleted());
    }

    #[test]
    fn adjust_clamps_both_ways() {
        let mut h = Health::new(50);
        assert_eq!(h.adjust(-80), 0);
        assert!(h.is_depleted());
        assert_eq!(h.adjust(500), 50);
        assert!(h.is_full());
    }

    #[test]
    fn with_current_clamps() {
        assert_eq!(Health::with_current(120, 100).current(), 100);
        assert_eq!(Health::with_current(-5, 100).current(), 0);
        assert_eq!(Health::with_current(90, 100).current(), 90);
    }

    #[test]
    fn display() {
        assert_eq!(Health::with_current(42, 100).to_string(), "42/100");
    }
}
