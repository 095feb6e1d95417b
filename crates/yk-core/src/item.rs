//! Item variants carried by the player or lying in an area.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::story::Story;

/// Name that content scripts use on a weapon or armour grant to mean
/// "unequip this slot".
pub const UNEQUIP_SENTINEL: &str = "none";

/// An equipment slot on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// The weapon hand.
    Weapon,
    /// The body armour slot.
    Armour,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armour => write!(f, "armour"),
        }
    }
}

/// A plain inventory item with no behaviour of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generic {
    /// Display name.
    pub name: String,
    /// Optional inspection text.
    pub description: Option<String>,
    /// Optional line printed when the item is granted.
    pub received: Option<String>,
}

/// A weapon. At most one is equipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name.
    pub name: String,
    /// Attack bonus while equipped.
    pub attack: u32,
    /// Optional inspection text.
    pub description: Option<String>,
    /// Optional line printed when the weapon is granted.
    pub received: Option<String>,
}

/// A piece of armour. At most one is equipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armour {
    /// Display name.
    pub name: String,
    /// Defense bonus while equipped.
    pub defense: u32,
    /// Optional inspection text.
    pub description: Option<String>,
    /// Optional line printed when the armour is granted.
    pub received: Option<String>,
}

/// A consumable healing potion. Multiple instances stack in the potion bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    /// Display name.
    pub name: String,
    /// Hit points restored on use.
    pub heal_amount: i32,
}

/// A readable book. Using it runs its story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Display name.
    pub name: String,
    /// Inspection text.
    pub description: String,
    /// Story played when the book is read.
    pub story: Story,
    /// Optional line printed when the book is granted.
    pub received: Option<String>,
}

/// A spaceship. Using it opens the travel menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spaceship {
    /// Display name.
    pub name: String,
    /// Inspection text.
    pub description: String,
}

/// A story-relevant item. Quest items and unlock items are specials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Special {
    /// Display name. Quest state is keyed on this.
    pub name: String,
    /// Optional inspection text.
    pub description: Option<String>,
    /// Optional story played when the item is used.
    pub story: Option<Story>,
    /// Optional line printed when the item is granted.
    pub received: Option<String>,
}

/// Any item in the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// See [`Generic`].
    Generic(Generic),
    /// See [`Weapon`].
    Weapon(Weapon),
    /// See [`Armour`].
    Armour(Armour),
    /// See [`Potion`].
    Potion(Potion),
    /// See [`Book`].
    Book(Book),
    /// See [`Spaceship`].
    Spaceship(Spaceship),
    /// See [`Special`].
    Special(Special),
}

impl Item {
    /// The item's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Generic(i) => &i.name,
            Self::Weapon(i) => &i.name,
            Self::Armour(i) => &i.name,
            Self::Potion(i) => &i.name,
            Self::Book(i) => &i.name,
            Self::Spaceship(i) => &i.name,
            Self::Special(i) => &i.name,
        }
    }

    /// The item's inspection text, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Generic(i) => i.description.as_deref(),
            Self::Weapon(i) => i.description.as_deref(),
            Self::Armour(i) => i.description.as_deref(),
            Self::Potion(_) => None,
            Self::Book(i) => Some(&i.description),
            Self::Spaceship(i) => Some(&i.description),
            Self::Special(i) => i.description.as_deref(),
        }
    }

    /// The custom "you received" line, if any.
    pub fn received(&self) -> Option<&str> {
        match self {
            Self::Generic(i) => i.received.as_deref(),
            Self::Weapon(i) => i.received.as_deref(),
            Self::Armour(i) => i.received.as_deref(),
            Self::Book(i) => i.received.as_deref(),
            Self::Special(i) => i.received.as_deref(),
            Self::Potion(_) | Self::Spaceship(_) => None,
        }
    }

    /// Lowercase label of the variant, for listings.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Generic(_) => "item",
            Self::Weapon(_) => "weapon",
            Self::Armour(_) => "armour",
            Self::Potion(_) => "potion",
            Self::Book(_) => "book",
            Self::Spaceship(_) => "spaceship",
            Self::Special(_) => "special",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon(w) => write!(f, "{} (+{} attack)", w.name, w.attack),
            Self::Armour(a) => write!(f, "{} (+{} defense)", a.name, a.defense),
            Self::Potion(p) => write!(f, "{} (heals {})", p.name, p.heal_amount),
            other => f.write_str(other.name()),
        }
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl Generic {
    /// Create a generic item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            received: None,
        }
    }

    /// Attach an inspection text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a custom "received" line.
    pub fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }
}

impl Weapon {
    /// Create a weapon with an attack bonus.
    pub fn new(name: impl Into<String>, attack: u32) -> Self {
        Self {
            name: name.into(),
            attack,
            description: None,
            received: None,
        }
    }

    /// The sentinel weapon that unequips the weapon slot when granted.
    pub fn unequip() -> Self {
        Self::new(UNEQUIP_SENTINEL, 0)
    }

    /// Returns true for the unequip sentinel.
    pub fn is_unequip(&self) -> bool {
        self.name == UNEQUIP_SENTINEL
    }

    /// Attach an inspection text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a custom "received" line.
    pub fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }
}

impl Armour {
    /// Create armour with a defense bonus.
    pub fn new(name: impl Into<String>, defense: u32) -> Self {
        Self {
            name: name.into(),
            defense,
            description: None,
            received: None,
        }
    }

    /// The sentinel armour that unequips the armour slot when granted.
    pub fn unequip() -> Self {
        Self::new(UNEQUIP_SENTINEL, 0)
    }

    /// Returns true for the unequip sentinel.
    pub fn is_unequip(&self) -> bool {
        self.name == UNEQUIP_SENTINEL
    }

    /// Attach an inspection text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a custom "received" line.
    pub fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }
}

impl Potion {
    /// Create a potion.
    pub fn new(name: impl Into<String>, heal_amount: i32) -> Self {
        Self {
            name: name.into(),
            heal_amount,
        }
    }
}

impl Book {
    /// Create a book with its reading story.
    pub fn new(name: impl Into<String>, description: impl Into<String>, story: Story) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            story,
            received: None,
        }
    }
}

impl Spaceship {
    /// Create a spaceship.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Special {
    /// Create a special item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            story: None,
            received: None,
        }
    }

    /// Attach an inspection text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a story played on use.
    pub fn with_story(mut self, story: Story) -> Self {
        self.story = Some(story);
        self
    }

    /// Attach a custom "received" line.
    pub fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }
}

impl From<Generic> for Item {
    fn from(value: Generic) -> Self {
        Self::Generic(value)
    }
}

impl From<Weapon> for Item {
    fn from(value: Weapon) -> Self {
        Self::Weapon(value)
    }
}

impl From<Armour> for Item {
    fn from(value: Armour) -> Self {
        Self::Armour(value)
    }
}

impl From<Potion> for Item {
    fn from(value: Potion) -> Self {
        Self::Potion(value)
    }
}

impl From<Book> for Item {
    fn from(value: Book) -> Self {
        Self::Book(value)
    }
}

impl From<Spaceship> for Item {
    fn from(value: Spaceship) -> Self {
        Self::Spaceship(value)
    }
}

impl From<Special> for Item {
    fn from(value: Special) -> Self {
        Self::Special(value)
    }
}
