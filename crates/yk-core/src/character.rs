//! The player, hostile enemies, and friendly neutrals.

use serde::{Deserialize, Serialize};

use crate::health::{Health, MAX_PLAYER_HEALTH};
use crate::item::{Armour, Item, Potion, Slot, Special, Weapon};
use crate::story::Story;

/// Base attack of a freshly created player.
pub const BASE_ATTACK: u32 = 10;

/// Base defense of a freshly created player.
pub const BASE_DEFENSE: u32 = 5;

/// The player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// The name chosen at setup.
    pub name: String,
    /// Hit points, `0..=100`.
    pub health: Health,
    /// Base attack, before the weapon bonus.
    pub attack: u32,
    /// Base defense, before the armour bonus.
    pub defense: u32,
    /// Carried non-potion items.
    pub inventory: Vec<Item>,
    /// Carried potions, one entry per instance.
    pub potions: Vec<Potion>,
    /// Equipped weapon.
    pub weapon: Option<Weapon>,
    /// Equipped armour.
    pub armour: Option<Armour>,
}

impl Player {
    /// Create a player with full health and base stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Health::new(MAX_PLAYER_HEALTH),
            attack: BASE_ATTACK,
            defense: BASE_DEFENSE,
            inventory: Vec::new(),
            potions: Vec::new(),
            weapon: None,
            armour: None,
        }
    }

    /// Base attack plus the equipped weapon's bonus.
    pub fn effective_attack(&self) -> u32 {
        self.attack + self.weapon.as_ref().map_or(0, |w| w.attack)
    }

    /// Base defense plus the equipped armour's bonus.
    pub fn effective_defense(&self) -> u32 {
        self.defense + self.armour.as_ref().map_or(0, |a| a.defense)
    }

    /// Check if any inventory item carries the given name.
    pub fn has_item_named(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.name() == name)
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Add a potion instance.
    pub fn add_potion(&mut self, potion: Potion) {
        self.potions.push(potion);
    }

    /// Equip a weapon, returning the one it replaced.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    /// Equip armour, returning the piece it replaced.
    pub fn equip_armour(&mut self, armour: Armour) -> Option<Armour> {
        self.armour.replace(armour)
    }

    /// Empty a slot, returning what was in it.
    pub fn unequip(&mut self, slot: Slot) -> Option<Item> {
        match slot {
            Slot::Weapon => self.weapon.take().map(Item::Weapon),
            Slot::Armour => self.armour.take().map(Item::Armour),
        }
    }

    /// Remove and return one potion instance by name.
    pub fn take_potion(&mut self, name: &str) -> Option<Potion> {
        let index = self.potions.iter().position(|p| p.name == name)?;
        Some(self.potions.remove(index))
    }

    /// Potions grouped by name with their counts, in first-seen order.
    pub fn potion_groups(&self) -> Vec<(&Potion, usize)> {
        let mut groups: Vec<(&Potion, usize)> = Vec::new();
        for potion in &self.potions {
            if let Some(group) = groups.iter_mut().find(|(p, _)| p.name == potion.name) {
                group.1 += 1;
            } else {
                groups.push((potion, 1));
            }
        }
        groups
    }

    /// Returns true while the player has hit points left.
    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}

/// The six storylines of an enemy encounter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyStories {
    /// First meeting.
    pub initial: Story,
    /// Coming back before any blow was traded.
    pub revisit: Story,
    /// Coming back after retreating from a fight.
    pub mid_fight: Story,
    /// The enemy falls.
    pub won: Story,
    /// The player falls. Usually ends in a game over.
    pub lost: Story,
    /// Coming back after the enemy was defeated.
    pub defeated: Story,
}

/// A hostile character guarding an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name.
    pub name: String,
    /// Hit points.
    pub health: Health,
    /// Attack.
    pub attack: u32,
    /// Defense.
    pub defense: u32,
    /// Set once the first round of combat is fought. Survives retreats.
    pub fought: bool,
    /// Encounter storylines.
    pub stories: EnemyStories,
}

impl Enemy {
    /// Create an enemy at full health.
    pub fn new(
        name: impl Into<String>,
        health: i32,
        attack: u32,
        defense: u32,
        stories: EnemyStories,
    ) -> Self {
        Self {
            name: name.into(),
            health: Health::new(health),
            attack,
            defense,
            fought: false,
            stories,
        }
    }

    /// An enemy at zero health never fights again.
    pub fn is_defeated(&self) -> bool {
        self.health.is_depleted()
    }
}

/// The storylines of a friendly character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeutralStories {
    /// First meeting.
    pub initial: Story,
    /// Any later visit without the quest item.
    pub revisit: Story,
    /// Visit while carrying the quest item.
    pub quest_complete: Option<Story>,
}

/// A friendly character, optionally waiting for a quest item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neutral {
    /// Display name.
    pub name: String,
    /// Visit storylines.
    pub stories: NeutralStories,
    /// The item whose name completes this character's quest.
    pub quest_item: Option<Special>,
}

impl Neutral {
    /// Create a neutral without a quest.
    pub fn new(name: impl Into<String>, stories: NeutralStories) -> Self {
        Self {
            name: name.into(),
            stories,
            quest_item: None,
        }
    }

    /// Attach the quest item this character is waiting for.
    pub fn with_quest_item(mut self, item: Special) -> Self {
        self.quest_item = Some(item);
        self
    }

    /// The quest-complete story, if the player carries the quest item.
    pub fn quest_story_for(&self, player: &Player) -> Option<&Story> {
        let wanted = self.quest_item.as_ref()?;
        if player.has_item_named(&wanted.name) {
            self.stories.quest_complete.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Generic;

    #[test]
    fn new_player_stats() {
        let p = Player::new("Ava");
        assert_eq!(p.health.current(), 100);
        assert_eq!(p.effective_attack(), BASE_ATTACK);
        assert_eq!(p.effective_defense(), BASE_DEFENSE);
        assert!(p.inventory.is_empty());
    }

    #[test]
    fn equipment_bonus_counted_once() {
        let mut p = Player::new("Ava");
        assert!(p.equip_weapon(Weapon::new("Stick", 2)).is_none());
        let old = p.equip_weapon(Weapon::new("Feathered Blade", 18));
        assert_eq!(old.map(|w| w.name), Some("Stick".to_string()));
        assert_eq!(p.effective_attack(), BASE_ATTACK + 18);

        p.equip_armour(Armour::new("Feathered Armor", 20));
        assert_eq!(p.effective_defense(), BASE_DEFENSE + 20);

        let removed = p.unequip(Slot::Armour);
        assert!(matches!(removed, Some(Item::Armour(_))));
        assert_eq!(p.effective_defense(), BASE_DEFENSE);
    }

    #[test]
    fn potion_grouping_and_taking() {
        let mut p = Player::new("Ava");
        p.add_potion(Potion::new("Small Potion", 20));
        p.add_potion(Potion::new("Medium Potion", 50));
        p.add_potion(Potion::new("Small Potion", 20));

        let groups = p.potion_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0.name, "Small Potion");
        assert_eq!(groups[0].1, 2);

        assert!(p.take_potion("Small Potion").is_some());
        assert_eq!(p.potions.len(), 2);
        assert!(p.take_potion("Large Potion").is_none());
    }

    #[test]
    fn quest_story_requires_matching_name() {
        let neutral = Neutral::new(
            "Timekeeper",
            NeutralStories {
                quest_complete: Some(vec![]),
                ..NeutralStories::default()
            },
        )
        .with_quest_item(Special::new("The Time Crystal"));

        let mut p = Player::new("Ava");
        assert!(neutral.quest_story_for(&p).is_none());
        p.add_item(Generic::new("The Time Crystal").into());
        assert!(neutral.quest_story_for(&p).is_some());
    }

    #[test]
    fn enemy_defeat() {
        let mut e = Enemy::new("Scarecrow", 30, 8, 3, EnemyStories::default());
        assert!(!e.is_defeated());
        e.health.adjust(-30);
        assert!(e.is_defeated());
    }
}
