//! Per-round combat records.

use std::fmt;

use serde::Serialize;

/// What one round of combat left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundOutcome {
    /// Both sides are still standing.
    Ongoing,
    /// The enemy fell to the player's strike.
    Won,
    /// The player fell to the enemy's counter.
    Lost,
}

/// How a whole fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CombatOutcome {
    /// The enemy was defeated.
    Won,
    /// The player was defeated.
    Lost,
    /// The player fled between rounds.
    Retreat,
}

impl fmt::Display for CombatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
            Self::Retreat => write!(f, "retreat"),
        }
    }
}

/// A recorded round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    /// Round number within the encounter (1-based).
    pub round: u32,
    /// Enemy display name.
    pub enemy: String,
    /// Damage the player dealt.
    pub player_damage: i32,
    /// Damage the enemy dealt, if it got to strike back.
    pub enemy_damage: Option<i32>,
    /// Player health after the round.
    pub player_health: i32,
    /// Enemy health after the round.
    pub enemy_health: i32,
    /// Result of the round.
    pub outcome: RoundOutcome,
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Round {}: you hit {} for {} ({} left).",
            self.round, self.enemy, self.player_damage, self.enemy_health
        )?;
        if let Some(dmg) = self.enemy_damage {
            write!(
                f,
                " {} hits you for {dmg} ({} left).",
                self.enemy, self.player_health
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(enemy_damage: Option<i32>) -> RoundRecord {
        RoundRecord {
            round: 2,
            enemy: "Grumpy Scarecrow".to_string(),
            player_damage: 7,
            enemy_damage,
            player_health: 91,
            enemy_health: 0,
            outcome: RoundOutcome::Won,
        }
    }

    #[test]
    fn display_killing_blow() {
        assert_eq!(
            record(None).to_string(),
            "Round 2: you hit Grumpy Scarecrow for 7 (0 left)."
        );
    }

    #[test]
    fn display_exchange() {
        assert_eq!(
            record(Some(4)).to_string(),
            "Round 2: you hit Grumpy Scarecrow for 7 (0 left). Grumpy Scarecrow hits you for 4 (91 left)."
        );
    }
}
