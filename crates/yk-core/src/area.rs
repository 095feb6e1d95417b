//! Story-bearing tiles.

use serde::{Deserialize, Serialize};

use crate::character::{Enemy, Neutral};
use crate::item::Item;
use crate::position::Position;
use crate::story::Story;

/// A named location on a planet grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    /// Display name.
    pub name: String,
    /// Played on the first visit.
    pub story_initial: Story,
    /// Played on every later visit.
    pub story_revisit: Story,
    /// Optional hostile character.
    pub enemy: Option<Enemy>,
    /// Optional friendly character. Gated behind the enemy if both exist.
    pub neutral: Option<Neutral>,
    /// Items that can be found with `search`.
    pub items: Vec<Item>,
    /// Preferred tile. Falls back to a random free tile if unusable.
    pub fixed_position: Option<Position>,
}

impl Area {
    /// Create an area with its two storylines.
    pub fn new(name: impl Into<String>, story_initial: Story, story_revisit: Story) -> Self {
        Self {
            name: name.into(),
            story_initial,
            story_revisit,
            enemy: None,
            neutral: None,
            items: Vec::new(),
            fixed_position: None,
        }
    }

    /// Station an enemy here.
    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemy = Some(enemy);
        self
    }

    /// Station a neutral here.
    pub fn with_neutral(mut self, neutral: Neutral) -> Self {
        self.neutral = Some(neutral);
        self
    }

    /// Lay an item here.
    pub fn with_item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Pin the area to a tile.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.fixed_position = Some(Position::new(x, y));
        self
    }

    /// Returns true if a living enemy still guards the area.
    pub fn is_guarded(&self) -> bool {
        self.enemy.as_ref().is_some_and(|e| !e.is_defeated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Enemy, EnemyStories};
    use crate::item::Potion;

    #[test]
    fn builder() {
        let area = Area::new("Crystal Hills", vec![], vec![])
            .at(3, 1)
            .with_item(Potion::new("Small Potion", 20));
        assert_eq!(area.fixed_position, Some(Position::new(3, 1)));
        assert_eq!(area.items.len(), 1);
        assert!(!area.is_guarded());
    }

    #[test]
    fn guarded_until_enemy_falls() {
        let mut area = Area::new("Windmill Farm", vec![], vec![]).with_enemy(Enemy::new(
            "Scarecrow",
            10,
            5,
            1,
            EnemyStories::default(),
        ));
        assert!(area.is_guarded());
        if let Some(enemy) = area.enemy.as_mut() {
            enemy.health.adjust(-10);
        }
        assert!(!area.is_guarded());
    }
}
