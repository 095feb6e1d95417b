//! The damage roll shared by both sides of a fight.
//!
//! A hit lands for `max(floor(U(A/2, A) - U(0, D)), 1)` where `A` is the
//! attacker's attack, `D` the defender's defense and `U` a uniform real
//! draw over the closed interval.

use rand::Rng;
use rand::rngs::StdRng;

/// The smallest hit that can ever land.
pub const MIN_DAMAGE: i32 = 1;

/// Roll the damage of one hit.
pub fn roll_damage(attack: u32, defense: u32, rng: &mut StdRng) -> i32 {
    let attack = f64::from(attack);
    let swing = uniform(rng, attack * 0.5, attack);
    let block = uniform(rng, 0.0, f64::from(defense));
    ((swing - block).floor() as i32).max(MIN_DAMAGE)
}

fn uniform(rng: &mut StdRng, low: f64, high: f64) -> f64 {
    if high <= low {
        return low;
    }
    rng.random_range(low..=high)
}
