//! Inventory and equipment: grants, item use, potions and the stats sheet.

use comfy_table::{ContentArrangement, Table};
use log::debug;
use yk_core::character::Player;
use yk_core::health::MAX_PLAYER_HEALTH;
use yk_core::item::{Item, Slot};
use yk_core::story::{Color, TextStyle};

use crate::error::FictionResult;
use crate::interpreter::{Signal, run_story};
use crate::presenter::Presenter;
use crate::state::GameState;
use crate::travel;

/// Hand an item to the player.
///
/// Potions go to the potion bag. Weapons and armour are equipped at once,
/// replacing whatever was worn; a piece named `"none"` empties the slot.
/// Everything else lands in the inventory.
pub fn grant(item: Item, player: &mut Player, out: &mut dyn Presenter) -> FictionResult<()> {
    debug!("granting {} ({})", item.name(), item.kind_label());
    let style = TextStyle::colored(Color::Green);
    match item {
        Item::Potion(potion) => {
            out.paragraph(&format!("You received a {}.", potion.name), style)?;
            player.add_potion(potion);
        }
        Item::Weapon(weapon) if weapon.is_unequip() => unequip(Slot::Weapon, player, out)?,
        Item::Armour(armour) if armour.is_unequip() => unequip(Slot::Armour, player, out)?,
        Item::Weapon(weapon) => {
            let received = weapon.received.clone().unwrap_or_else(|| {
                format!("You equipped the {} (+{} attack).", weapon.name, weapon.attack)
            });
            out.paragraph(&received, style)?;
            if let Some(description) = &weapon.description {
                out.paragraph(description, TextStyle::tight())?;
            }
            player.equip_weapon(weapon);
        }
        Item::Armour(armour) => {
            let received = armour.received.clone().unwrap_or_else(|| {
                format!("You equipped the {} (+{} defense).", armour.name, armour.defense)
            });
            out.paragraph(&received, style)?;
            if let Some(description) = &armour.description {
                out.paragraph(description, TextStyle::tight())?;
            }
            player.equip_armour(armour);
        }
        other => {
            let received = other
                .received()
                .map(str::to_string)
                .unwrap_or_else(|| format!("You received {}.", other.name()));
            out.paragraph(&received, style)?;
            player.add_item(other);
        }
    }
    Ok(())
}

/// Empty an equipment slot. The removed piece is gone.
pub fn unequip(slot: Slot, player: &mut Player, out: &mut dyn Presenter) -> FictionResult<()> {
    if let Some(old) = player.unequip(slot) {
        debug!("unequipped {}", old.name());
        out.paragraph(
            &format!("You are no longer using the {}.", old.name()),
            TextStyle::colored(Color::Yellow),
        )?;
    }
    Ok(())
}

/// Drink one potion by name.
pub fn use_potion(name: &str, player: &mut Player, out: &mut dyn Presenter) -> FictionResult<()> {
    if player.health.is_full() {
        out.paragraph("Your health is already full.", TextStyle::colored(Color::Yellow))?;
        return Ok(());
    }
    let Some(potion) = player.take_potion(name) else {
        out.error(&format!("You have no {name}."))?;
        return Ok(());
    };
    let healed = player.health.adjust(potion.heal_amount);
    debug!("{} healed {healed}", potion.name);
    out.paragraph(
        &format!(
            "You drink the {}. Health: {}/{MAX_PLAYER_HEALTH}.",
            potion.name,
            player.health.current()
        ),
        TextStyle::colored(Color::Green),
    )?;
    Ok(())
}

/// Use an inventory item by index.
///
/// Books read their story, a spaceship starts travel, a special item plays
/// its story if it has one. Anything else does nothing.
pub fn use_item(
    index: usize,
    state: &mut GameState,
    out: &mut dyn Presenter,
) -> FictionResult<Signal> {
    let Some(item) = state.player.inventory.get(index) else {
        return Ok(Signal::Continue);
    };
    match item {
        Item::Book(book) => {
            let story = book.story.clone();
            run_story(&story, &mut state.player, out)
        }
        Item::Spaceship(_) => travel::launch(state, out),
        Item::Special(special) => match special.story.clone() {
            Some(story) => run_story(&story, &mut state.player, out),
            None => {
                out.paragraph("Nothing happens.", TextStyle::default())?;
                Ok(Signal::Continue)
            }
        },
        other => {
            out.paragraph(
                &format!("You can't use the {} right now.", other.name()),
                TextStyle::default(),
            )?;
            Ok(Signal::Continue)
        }
    }
}

/// The inventory menu: pick an item, then use or inspect it.
pub fn inventory_menu(state: &mut GameState, out: &mut dyn Presenter) -> FictionResult<Signal> {
    let tight = TextStyle::tight();
    out.text("Equipped:", tight.with_space(1))?;
    let player = &state.player;
    let weapon = player.weapon.as_ref().map_or("nothing".to_string(), |w| {
        format!("{} (+{} attack)", w.name, w.attack)
    });
    let armour = player.armour.as_ref().map_or("nothing".to_string(), |a| {
        format!("{} (+{} defense)", a.name, a.defense)
    });
    out.text(&format!("  Weapon: {weapon}"), tight)?;
    out.text(&format!("  Armour: {armour}"), tight)?;

    if player.inventory.is_empty() {
        out.text("Your bag is empty.", tight.with_space(1))?;
        return Ok(Signal::Continue);
    }

    out.text("Items:", tight.with_space(1))?;
    for (i, item) in player.inventory.iter().enumerate() {
        out.text(&format!("  {}. {item}", i + 1), tight)?;
    }
    let allowed: Vec<usize> = (0..=player.inventory.len()).collect();
    let choice = out.choose_number("Choose an item (0 to cancel)", &allowed)?;
    if choice == 0 {
        return Ok(Signal::Continue);
    }
    let index = choice - 1;

    match out.choose_option("Use or inspect?", &["use", "inspect"])? {
        0 => use_item(index, state, out),
        _ => {
            if let Some(item) = state.player.inventory.get(index) {
                let description = item.description().unwrap_or("Nothing remarkable.");
                out.paragraph(&format!("{}: {description}", item.name()), TextStyle::default())?;
            }
            Ok(Signal::Continue)
        }
    }
}

/// The potion menu: potions grouped by name, pick one to drink.
pub fn potion_menu(player: &mut Player, out: &mut dyn Presenter) -> FictionResult<()> {
    let groups: Vec<(String, i32, usize)> = player
        .potion_groups()
        .into_iter()
        .map(|(p, n)| (p.name.clone(), p.heal_amount, n))
        .collect();
    if groups.is_empty() {
        out.paragraph("You have no potions.", TextStyle::default())?;
        return Ok(());
    }

    let tight = TextStyle::tight();
    out.text(
        &format!("Health: {}/{MAX_PLAYER_HEALTH}", player.health.current()),
        tight.with_space(1),
    )?;
    for (i, (name, heal, count)) in groups.iter().enumerate() {
        out.text(&format!("  {}. {name} x{count} (heals {heal})", i + 1), tight)?;
    }
    let allowed: Vec<usize> = (0..=groups.len()).collect();
    let choice = out.choose_number("Choose a potion (0 to cancel)", &allowed)?;
    if choice == 0 {
        return Ok(());
    }
    use_potion(&groups[choice - 1].0, player, out)
}

/// Render the player's stats as a table.
pub fn stats_table(player: &Player) -> String {
    let weapon_bonus = player.weapon.as_ref().map_or(0, |w| w.attack);
    let armour_bonus = player.armour.as_ref().map_or(0, |a| a.defense);
    let weapon = player.weapon.as_ref().map_or("none", |w| w.name.as_str());
    let armour = player.armour.as_ref().map_or("none", |a| a.name.as_str());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value"]);
    table.add_row(vec!["Name".to_string(), player.name.clone()]);
    table.add_row(vec![
        "Health".to_string(),
        format!("{}/{MAX_PLAYER_HEALTH}", player.health.current()),
    ]);
    table.add_row(vec![
        "Attack".to_string(),
        format!("{} ({} + {weapon_bonus})", player.effective_attack(), player.attack),
    ]);
    table.add_row(vec![
        "Defense".to_string(),
        format!("{} ({} + {armour_bonus})", player.effective_defense(), player.defense),
    ]);
    table.add_row(vec!["Weapon".to_string(), weapon.to_string()]);
    table.add_row(vec!["Armour".to_string(), armour.to_string()]);
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::ScriptedPresenter;
    use yk_core::item::{Armour, Book, Generic, Potion, Weapon};
    use yk_core::story::StoryStep;

    #[test]
    fn grant_weapon_replaces_previous() {
        let mut player = Player::new("Hero");
        let mut out = ScriptedPresenter::default();
        grant(Weapon::new("Rusty Sword", 6).into(), &mut player, &mut out).unwrap();
        grant(
            Weapon::new("Feathered Blade", 18).with_description("Sharp.").into(),
            &mut player,
            &mut out,
        )
        .unwrap();
        assert_eq!(player.weapon.as_ref().unwrap().name, "Feathered Blade");
        assert!(player.inventory.is_empty());
        assert!(out.contains("You equipped the Feathered Blade (+18 attack)."));
        assert!(out.contains("Sharp."));
    }

    #[test]
    fn grant_uses_received_message() {
        let mut player = Player::new("Hero");
        let mut out = ScriptedPresenter::default();
        let feather = Generic::new("Golden Feather").with_received("Pip hands you a feather.");
        grant(feather.into(), &mut player, &mut out).unwrap();
        assert!(player.has_item_named("Golden Feather"));
        assert!(out.contains("Pip hands you a feather."));
    }

    #[test]
    fn none_armour_unequips_without_touching_inventory() {
        let mut player = Player::new("Hero");
        player.equip_armour(Armour::new("Leather Vest", 8));
        player.add_item(Generic::new("Golden Feather").into());
        let mut out = ScriptedPresenter::default();
        grant(Armour::unequip().into(), &mut player, &mut out).unwrap();
        assert!(player.armour.is_none());
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn potion_heals_to_cap_and_is_consumed() {
        let mut player = Player::new("Hero");
        player.health.adjust(-10);
        player.add_potion(Potion::new("Medium Potion", 50));
        let mut out = ScriptedPresenter::default();
        use_potion("Medium Potion", &mut player, &mut out).unwrap();
        assert_eq!(player.health.current(), 100);
        assert!(player.potions.is_empty());
    }

    #[test]
    fn potion_refused_at_full_health() {
        let mut player = Player::new("Hero");
        player.add_potion(Potion::new("Small Potion", 20));
        let mut out = ScriptedPresenter::default();
        use_potion("Small Potion", &mut player, &mut out).unwrap();
        assert_eq!(player.potions.len(), 1);
        assert!(out.contains("already full"));
    }

    #[test]
    fn potion_menu_picks_by_group() {
        let mut player = Player::new("Hero");
        player.health.adjust(-60);
        player.add_potion(Potion::new("Small Potion", 20));
        player.add_potion(Potion::new("Small Potion", 20));
        player.add_potion(Potion::new("Large Potion", 100));
        let mut out = ScriptedPresenter::new(["1"]);
        potion_menu(&mut player, &mut out).unwrap();
        assert!(out.contains("Small Potion x2 (heals 20)"));
        assert_eq!(player.health.current(), 60);
        assert_eq!(player.potions.len(), 2);
    }

    #[test]
    fn book_story_is_read() {
        let mut out = ScriptedPresenter::default();
        let mut player = Player::new("Hero");
        let book = Book::new("Legends", "Old tales.", vec![StoryStep::text("Once upon a time")]);
        run_story(&book.story, &mut player, &mut out).unwrap();
        assert!(out.contains("Once upon a time"));
    }

    #[test]
    fn stats_table_shows_breakdown() {
        let mut player = Player::new("Hero");
        player.equip_weapon(Weapon::new("Feathered Blade", 18));
        let table = stats_table(&player);
        assert!(table.contains("28 (10 + 18)"));
        assert!(table.contains("5 (5 + 0)"));
        assert!(table.contains("Feathered Blade"));
        assert!(table.contains("100/100"));
    }
}
