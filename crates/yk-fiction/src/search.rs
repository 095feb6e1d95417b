//! Searching the current tile for loose items.

use log::debug;
use yk_core::item::Item;
use yk_core::story::{Color, TextStyle};

use crate::error::FictionResult;
use crate::presenter::Presenter;
use crate::state::GameState;

/// List the items on the player's tile and let them take one.
///
/// Equipment is worn at once; whatever it replaces is left lying on the
/// tile so it can be picked up again later.
pub fn search(state: &mut GameState, out: &mut dyn Presenter) -> FictionResult<()> {
    let pos = state.planet().player_pos();
    let items: Vec<String> = match state.planet().area_at(pos) {
        Some(area) if !area.items.is_empty() => {
            area.items.iter().map(ToString::to_string).collect()
        }
        _ => {
            out.paragraph("You search around but find nothing of use.", TextStyle::default())?;
            return Ok(());
        }
    };

    let tight = TextStyle::tight();
    out.text("You find:", tight.with_space(1))?;
    for (i, item) in items.iter().enumerate() {
        out.text(&format!("  {}. {item}", i + 1), tight)?;
    }
    let allowed: Vec<usize> = (0..=items.len()).collect();
    let choice = out.choose_number("Choose an item (0 to cancel)", &allowed)?;
    if choice == 0 {
        return Ok(());
    }
    take(state, choice - 1, out)
}

fn take(state: &mut GameState, index: usize, out: &mut dyn Presenter) -> FictionResult<()> {
    let pos = state.planet().player_pos();
    let Some(item) = state
        .planet()
        .area_at(pos)
        .and_then(|a| a.items.get(index))
        .cloned()
    else {
        return Ok(());
    };

    let prompt = match &item {
        Item::Weapon(_) | Item::Armour(_) => format!("Equip the {}?", item.name()),
        _ => format!("Pick up the {}?", item.name()),
    };
    if !out.confirm(&prompt)? {
        return Ok(());
    }

    let GameState {
        player,
        planets,
        current,
        ..
    } = state;
    let Some(area) = planets[*current].1.area_at_mut(pos) else {
        return Ok(());
    };
    area.items.remove(index);
    debug!("took {} from {}", item.name(), area.name);

    let style = TextStyle::colored(Color::Green);
    match item {
        Item::Weapon(weapon) => {
            out.paragraph(
                &format!("You equip the {} (+{} attack).", weapon.name, weapon.attack),
                style,
            )?;
            if let Some(old) = player.equip_weapon(weapon) {
                out.paragraph(&format!("You leave the {} here.", old.name), TextStyle::tight())?;
                area.items.push(old.into());
            }
        }
        Item::Armour(armour) => {
            out.paragraph(
                &format!("You put on the {} (+{} defense).", armour.name, armour.defense),
                style,
            )?;
            if let Some(old) = player.equip_armour(armour) {
                out.paragraph(&format!("You leave the {} here.", old.name), TextStyle::tight())?;
                area.items.push(old.into());
            }
        }
        Item::Potion(potion) => {
            out.paragraph(&format!("You pick up the {}.", potion.name), style)?;
            player.add_potion(potion);
        }
        other => {
            out.paragraph(&format!("You pick up the {}.", other.name()), style)?;
            player.add_item(other);
        }
    }
    Ok(())
}
