//! Grid coordinates and cardinal movement.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tile coordinate on a planet grid. `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column, growing eastwards.
    pub x: i32,
    /// Row, growing southwards.
    pub y: i32,
}

impl Position {
    /// The landing tile every planet starts the player on.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position in the given direction. May lie off-grid.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// Parse a direction from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Grid delta `(dx, dy)` for one step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas() {
        let origin = Position::new(1, 1);
        assert_eq!(origin.step(Direction::North), Position::new(1, 0));
        assert_eq!(origin.step(Direction::South), Position::new(1, 2));
        assert_eq!(origin.step(Direction::East), Position::new(2, 1));
        assert_eq!(origin.step(Direction::West), Position::new(0, 1));
    }

    #[test]
    fn parse_directions() {
        assert_eq!(Direction::parse("North"), Some(Direction::North));
        assert_eq!(Direction::parse("west"), Some(Direction::West));
        assert_eq!(Direction::parse("n"), None);
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, 1).to_string(), "(3, 1)");
        assert_eq!(Direction::East.to_string(), "east");
    }
}
