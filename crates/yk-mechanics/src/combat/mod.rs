//! Encounter state and round resolution.
//!
//! An [`Encounter`] is one fight from first swing to its end. Each call to
//! [`Encounter::next_round`] plays a full exchange: the player strikes, and
//! if the enemy survives it strikes back. Between rounds the caller decides
//! whether to press on or flee; [`Encounter::run`] wires that decision in
//! as a closure.

pub mod round;

pub use round::{CombatOutcome, RoundOutcome, RoundRecord};

use log::debug;
use rand::rngs::StdRng;
use yk_core::character::{Enemy, Player};

use crate::damage::roll_damage;
use crate::error::{MechError, MechResult};

/// The state of one fight.
#[derive(Debug, Clone, Default)]
pub struct Encounter {
    /// Rounds played so far.
    pub round: u32,
    /// Log of all rounds.
    pub log: Vec<RoundRecord>,
}

impl Encounter {
    /// Create a fresh encounter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent round, if any.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.log.last()
    }

    /// Play one round and return its record, which is also appended to
    /// the log.
    ///
    /// Marks the enemy as fought. Fails if either side is already down.
    pub fn next_round(
        &mut self,
        player: &mut Player,
        enemy: &mut Enemy,
        rng: &mut StdRng,
    ) -> MechResult<RoundRecord> {
        if enemy.is_defeated() {
            return Err(MechError::AlreadyDefeated(enemy.name.clone()));
        }
        if !player.is_alive() {
            return Err(MechError::PlayerDown(player.name.clone()));
        }

        enemy.fought = true;
        self.round += 1;

        let player_damage = roll_damage(player.effective_attack(), enemy.defense, rng);
        enemy.health.adjust(-player_damage);

        let (enemy_damage, outcome) = if enemy.is_defeated() {
            (None, RoundOutcome::Won)
        } else {
            let dmg = roll_damage(enemy.attack, player.effective_defense(), rng);
            player.health.adjust(-dmg);
            let outcome = if player.is_alive() {
                RoundOutcome::Ongoing
            } else {
                RoundOutcome::Lost
            };
            (Some(dmg), outcome)
        };

        debug!(
            "round {} vs {}: dealt {player_damage}, took {enemy_damage:?}, {:?}",
            self.round, enemy.name, outcome
        );

        let record = RoundRecord {
            round: self.round,
            enemy: enemy.name.clone(),
            player_damage,
            enemy_damage,
            player_health: player.health.current(),
            enemy_health: enemy.health.current(),
            outcome,
        };
        self.log.push(record.clone());
        Ok(record)
    }

    /// Fight to the end. `keep_fighting` is asked after every round in
    /// which both sides survive; returning false retreats.
    pub fn run(
        &mut self,
        player: &mut Player,
        enemy: &mut Enemy,
        rng: &mut StdRng,
        mut keep_fighting: impl FnMut(&RoundRecord) -> bool,
    ) -> MechResult<CombatOutcome> {
        loop {
            let record = self.next_round(player, enemy, rng)?;
            match record.outcome {
                RoundOutcome::Won => return Ok(CombatOutcome::Won),
                RoundOutcome::Lost => return Ok(CombatOutcome::Lost),
                RoundOutcome::Ongoing => {
                    if !keep_fighting(&record) {
                        return Ok(CombatOutcome::Retreat);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use yk_core::character::EnemyStories;
    use yk_core::item::{Armour, Weapon};

    fn scarecrow() -> Enemy {
        Enemy::new("Grumpy Scarecrow", 30, 9, 3, EnemyStories::default())
    }

    #[test]
    fn first_round_marks_enemy_fought() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut player = Player::new("Hero");
        let mut enemy = scarecrow();
        let mut encounter = Encounter::new();
        encounter.next_round(&mut player, &mut enemy, &mut rng).unwrap();
        assert!(enemy.fought);
        assert_eq!(encounter.round, 1);
        assert_eq!(encounter.log.len(), 1);
    }

    #[test]
    fn returned_record_matches_log() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut player = Player::new("Hero");
        let mut enemy = scarecrow();
        let mut encounter = Encounter::new();
        let first = encounter.next_round(&mut player, &mut enemy, &mut rng).unwrap();
        let second = encounter.next_round(&mut player, &mut enemy, &mut rng).unwrap();
        assert_eq!(first.round, 1);
        assert_eq!(second.round, 2);
        let last = encounter.last_round().unwrap();
        assert_eq!(last.round, second.round);
        assert_eq!(last.player_health, player.health.current());
        assert_eq!(last.enemy_health, enemy.health.current());
        assert_eq!(encounter.log.len(), 2);
    }

    #[test]
    fn killing_blow_skips_counter() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut player = Player::new("Hero");
        let mut enemy = Enemy::new("Moth", 1, 50, 0, EnemyStories::default());
        let mut encounter = Encounter::new();
        let record = encounter.next_round(&mut player, &mut enemy, &mut rng).unwrap();
        assert_eq!(record.outcome, RoundOutcome::Won);
        assert_eq!(record.enemy_damage, None);
        assert!(player.health.is_full());
    }

    #[test]
    fn enemy_can_win() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut player = Player::new("Hero");
        player.health.adjust(-99);
        let mut enemy = Enemy::new("Golem", 500, 30, 0, EnemyStories::default());
        let outcome = Encounter::new()
            .run(&mut player, &mut enemy, &mut rng, |_| true)
            .unwrap();
        assert_eq!(outcome, CombatOutcome::Lost);
        assert!(!player.is_alive());
        assert!(!enemy.is_defeated());
    }

    #[test]
    fn retreat_keeps_damage() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut player = Player::new("Hero");
        let mut enemy = Enemy::new("Golem", 500, 5, 0, EnemyStories::default());
        let mut encounter = Encounter::new();
        let outcome = encounter
            .run(&mut player, &mut enemy, &mut rng, |_| false)
            .unwrap();
        assert_eq!(outcome, CombatOutcome::Retreat);
        assert_eq!(encounter.round, 1);
        assert!(enemy.fought);
        assert!(enemy.health.current() < 500);
    }

    #[test]
    fn geared_player_beats_scarecrow() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut player = Player::new("Hero");
        player.equip_weapon(Weapon::new("Feathered Blade", 18));
        player.equip_armour(Armour::new("Feathered Armor", 20));
        let mut enemy = scarecrow();
        let outcome = Encounter::new()
            .run(&mut player, &mut enemy, &mut rng, |_| true)
            .unwrap();
        assert_eq!(outcome, CombatOutcome::Won);
        assert!(enemy.is_defeated());
    }

    #[test]
    fn defeated_enemy_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut player = Player::new("Hero");
        let mut enemy = scarecrow();
        enemy.health.adjust(-30);
        let err = Encounter::new()
            .next_round(&mut player, &mut enemy, &mut rng)
            .unwrap_err();
        assert!(matches!(err, MechError::AlreadyDefeated(_)));
    }
}
