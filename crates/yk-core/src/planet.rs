//! Planet grids: area placement, player movement, and visited tracking.

use std::collections::HashMap;

use log::{debug, warn};
use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::area::Area;
use crate::error::{CoreError, CoreResult};
use crate::position::{Direction, Position};

/// Narrative shown when leaving and reaching a planet.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TravelCopy {
    /// Paragraphs printed on arrival.
    pub to: Vec<String>,
    /// Paragraphs printed on departure.
    pub from: Vec<String>,
}

/// What a map tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// The player stands here.
    Player,
    /// Visited before.
    Visited,
    /// An area waits here, not yet visited.
    Area,
    /// Nothing special.
    Empty,
}

impl MapTile {
    /// The plain glyph for this tile.
    pub fn glyph(&self) -> char {
        match self {
            Self::Player => 'P',
            Self::Visited => 'o',
            Self::Area | Self::Empty => '*',
        }
    }
}

/// A rectangular world with areas placed on it.
#[derive(Debug, Clone, Serialize)]
pub struct Planet {
    /// Display name.
    pub name: String,
    /// Short description shown on arrival and in the map header.
    pub description: String,
    /// Grid width.
    pub width: i32,
    /// Grid height.
    pub height: i32,
    /// Areas in declaration order.
    pub areas: Vec<Area>,
    /// Departure and arrival narrative.
    pub travel: TravelCopy,

    // Runtime state
    #[serde(skip)]
    placement: HashMap<Position, usize>,
    #[serde(skip)]
    visited: Vec<Vec<bool>>,
    #[serde(skip)]
    player_pos: Position,
    #[serde(skip)]
    player_prev_pos: Position,
}

impl Planet {
    /// Create an empty planet. Dimensions are raised to at least 1x1.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        width: i32,
        height: i32,
    ) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            name: name.into(),
            description: description.into(),
            width,
            height,
            areas: Vec::new(),
            travel: TravelCopy::default(),
            placement: HashMap::new(),
            visited: vec![vec![false; width as usize]; height as usize],
            player_pos: Position::ORIGIN,
            player_prev_pos: Position::ORIGIN,
        }
    }

    /// Add an area.
    pub fn with_area(mut self, area: Area) -> Self {
        self.areas.push(area);
        self
    }

    /// Set the travel narrative.
    pub fn with_travel(mut self, to: Vec<String>, from: Vec<String>) -> Self {
        self.travel = TravelCopy { to, from };
        self
    }

    /// Returns true if the position lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    /// Place every area on the grid.
    ///
    /// Fixed positions are honored first, in declaration order. An area whose
    /// fixed tile is off-grid or already taken, and every area without one,
    /// then lands on a uniformly random free tile.
    pub fn place_areas(&mut self, rng: &mut StdRng) -> CoreResult<()> {
        self.placement.clear();
        let mut floating = Vec::new();

        for (index, area) in self.areas.iter().enumerate() {
            match area.fixed_position {
                Some(pos) if self.contains(pos) && !self.placement.contains_key(&pos) => {
                    debug!("{}: fixed {} at {pos}", self.name, area.name);
                    self.placement.insert(pos, index);
                }
                Some(pos) => {
                    warn!(
                        "{}: fixed position {pos} for {} is unusable, placing randomly",
                        self.name, area.name
                    );
                    floating.push(index);
                }
                None => floating.push(index),
            }
        }

        for index in floating {
            let pos = self.random_free_tile(index, rng)?;
            debug!("{}: placed {} at {pos}", self.name, self.areas[index].name);
            self.placement.insert(pos, index);
        }
        Ok(())
    }

    fn random_free_tile(&self, index: usize, rng: &mut StdRng) -> CoreResult<Position> {
        let capacity = (self.width * self.height) as usize;
        if self.placement.len() >= capacity {
            return Err(CoreError::GridFull {
                planet: self.name.clone(),
                area: self.areas[index].name.clone(),
            });
        }
        loop {
            let pos = Position::new(
                rng.random_range(0..self.width),
                rng.random_range(0..self.height),
            );
            if !self.placement.contains_key(&pos) {
                return Ok(pos);
            }
        }
    }

    /// Index into `areas` of the area at a position.
    pub fn area_index_at(&self, pos: Position) -> Option<usize> {
        self.placement.get(&pos).copied()
    }

    /// The area at a position.
    pub fn area_at(&self, pos: Position) -> Option<&Area> {
        self.area_index_at(pos).and_then(|i| self.areas.get(i))
    }

    /// Mutable access to the area at a position.
    pub fn area_at_mut(&mut self, pos: Position) -> Option<&mut Area> {
        let index = self.area_index_at(pos)?;
        self.areas.get_mut(index)
    }

    /// Where an area was placed, by name.
    pub fn position_of(&self, area_name: &str) -> Option<Position> {
        self.placement
            .iter()
            .find(|(_, index)| self.areas[**index].name == area_name)
            .map(|(pos, _)| *pos)
    }

    // -----------------------------------------------------------------------
    // Player position
    // -----------------------------------------------------------------------

    /// The player's tile.
    pub fn player_pos(&self) -> Position {
        self.player_pos
    }

    /// The tile the player came from.
    pub fn player_prev_pos(&self) -> Position {
        self.player_prev_pos
    }

    /// Step the player one tile. Returns the new tile, or `None` if the step
    /// would leave the grid (the player stays put).
    pub fn move_player(&mut self, direction: Direction) -> Option<Position> {
        let target = self.player_pos.step(direction);
        if !self.contains(target) {
            return None;
        }
        self.player_prev_pos = self.player_pos;
        self.player_pos = target;
        Some(target)
    }

    /// Send the player back to the tile they came from.
    pub fn return_to_previous(&mut self) {
        self.player_pos = self.player_prev_pos;
    }

    /// Put the player back on the landing tile.
    pub fn reset_player(&mut self) {
        self.player_pos = Position::ORIGIN;
        self.player_prev_pos = Position::ORIGIN;
    }

    // -----------------------------------------------------------------------
    // Visited tracking
    // -----------------------------------------------------------------------

    /// Returns true if an interaction has resolved on this tile before.
    pub fn is_visited(&self, pos: Position) -> bool {
        if !self.contains(pos) {
            return false;
        }
        self.visited[pos.y as usize][pos.x as usize]
    }

    /// Mark a tile visited. Returns true if it was not visited before.
    pub fn mark_visited(&mut self, pos: Position) -> bool {
        if !self.contains(pos) || self.is_visited(pos) {
            return false;
        }
        self.visited[pos.y as usize][pos.x as usize] = true;
        true
    }

    /// Number of visited tiles.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().flatten().filter(|v| **v).count()
    }

    // -----------------------------------------------------------------------
    // Map
    // -----------------------------------------------------------------------

    /// The map as rows of semantic tiles, top row first.
    pub fn map_rows(&self) -> Vec<Vec<MapTile>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let pos = Position::new(x, y);
                        if pos == self.player_pos {
                            MapTile::Player
                        } else if self.is_visited(pos) {
                            MapTile::Visited
                        } else if self.placement.contains_key(&pos) {
                            MapTile::Area
                        } else {
                            MapTile::Empty
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
