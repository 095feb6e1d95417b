//! Story scripts: the instruction set of the narrative interpreter.
//!
//! A [`Story`] is a flat list of [`StoryStep`]s. Each step carries one
//! [`StepAction`] plus presentation hints (blank lines before it, a pacing
//! delay after it, and an optional color).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::{Item, Slot};

/// A scripted sequence of story steps.
pub type Story = Vec<StoryStep>;

/// Default number of blank lines printed before a step.
pub const DEFAULT_SPACE: u8 = 1;

/// Default pause after a step, in seconds.
pub const DEFAULT_DELAY: f32 = 0.2;

/// Semantic text colors. The terminal decides the actual escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Danger, damage, defeat.
    Red,
    /// Success, healing, gains.
    Green,
    /// Warnings and emphasis.
    Yellow,
    /// Travel and space.
    Blue,
    /// Magic and mystery.
    Magenta,
    /// Dialogue.
    Cyan,
    /// De-emphasized text.
    Grey,
}

/// How a line of text should be presented. Missing fields take their
/// defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Blank lines before the text.
    pub space: u8,
    /// Seconds to pause after the text.
    pub delay: f32,
    /// Optional color.
    pub color: Option<Color>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            space: DEFAULT_SPACE,
            delay: DEFAULT_DELAY,
            color: None,
        }
    }
}

impl TextStyle {
    /// Default style in the given color.
    pub fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Style with no leading blank line and no delay, for menus and tables.
    pub fn tight() -> Self {
        Self {
            space: 0,
            delay: 0.0,
            color: None,
        }
    }

    /// Override the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the leading blank lines.
    pub fn with_space(mut self, space: u8) -> Self {
        self.space = space;
        self
    }
}

/// The single action a story step performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StepAction {
    /// Clear the terminal.
    Clear,
    /// Print a wrapped paragraph.
    Text(String),
    /// Wait for the player to press enter.
    Continue,
    /// Give an item to the player.
    Grant(Item),
    /// Empty an equipment slot.
    Unequip(Slot),
    /// End the scenario; the game resets.
    GameOver,
    /// A step shape the engine does not understand. Executed as a no-op.
    Unrecognized(String),
}

/// One instruction in a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryStep {
    /// What the step does.
    pub action: StepAction,
    /// How any printed output is presented.
    #[serde(default)]
    pub style: TextStyle,
}

impl StoryStep {
    /// Create a step with default presentation.
    pub fn new(action: StepAction) -> Self {
        Self {
            action,
            style: TextStyle::default(),
        }
    }

    /// A paragraph of narrative text.
    pub fn text(body: impl Into<String>) -> Self {
        Self::new(StepAction::Text(body.into()))
    }

    /// Clear the screen.
    pub fn clear() -> Self {
        Self::new(StepAction::Clear)
    }

    /// Wait for enter.
    pub fn pause() -> Self {
        Self::new(StepAction::Continue)
    }

    /// Grant an item.
    pub fn grant(item: impl Into<Item>) -> Self {
        Self::new(StepAction::Grant(item.into()))
    }

    /// Unequip a slot.
    pub fn unequip(slot: Slot) -> Self {
        Self::new(StepAction::Unequip(slot))
    }

    /// End the scenario.
    pub fn game_over() -> Self {
        Self::new(StepAction::GameOver)
    }

    /// Set the color.
    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Set the blank lines before the step.
    pub fn space(mut self, space: u8) -> Self {
        self.style.space = space;
        self
    }

    /// Set the pause after the step.
    pub fn delay(mut self, seconds: f32) -> Self {
        self.style.delay = seconds;
        self
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Text(_) => write!(f, "text"),
            Self::Continue => write!(f, "continue"),
            Self::Grant(item) => write!(f, "grant {}", item.name()),
            Self::Unequip(slot) => write!(f, "unequip {slot}"),
            Self::GameOver => write!(f, "gameover"),
            Self::Unrecognized(shape) => write!(f, "unrecognized {shape}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Potion;

    #[test]
    fn defaults() {
        let step = StoryStep::text("Hello");
        assert_eq!(step.style.space, DEFAULT_SPACE);
        assert!((step.style.delay - DEFAULT_DELAY).abs() < f32::EPSILON);
        assert_eq!(step.style.color, None);
    }

    #[test]
    fn builder_overrides() {
        let step = StoryStep::text("Boom").color(Color::Red).space(2).delay(1.5);
        assert_eq!(step.style.color, Some(Color::Red));
        assert_eq!(step.style.space, 2);
        assert!((step.style.delay - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn action_display() {
        assert_eq!(StoryStep::clear().action.to_string(), "clear");
        assert_eq!(
            StoryStep::grant(Potion::new("Small Potion", 20))
                .action
                .to_string(),
            "grant Small Potion"
        );
        assert_eq!(
            StoryStep::unequip(Slot::Armour).action.to_string(),
            "unequip armour"
        );
    }

    #[test]
    fn style_defaults_when_missing_in_json() {
        let step: StoryStep =
            serde_json::from_str(r#"{"action":{"kind":"text","value":"Hi"}}"#).unwrap();
        assert_eq!(step.style, TextStyle::default());
    }

    #[test]
    fn partial_style_fills_in_defaults() {
        let step: StoryStep = serde_json::from_str(
            r#"{"action":{"kind":"text","value":"Hi"},"style":{"space":3}}"#,
        )
        .unwrap();
        assert_eq!(step.style.space, 3);
        assert!((step.style.delay - DEFAULT_DELAY).abs() < f32::EPSILON);
        assert_eq!(step.style.color, None);
    }
}
