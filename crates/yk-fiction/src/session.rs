//! The game session: setup, the command loop and resets.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use yk_core::content::TITLE_ART;
use yk_core::position::Direction;
use yk_core::scenario::Scenario;
use yk_core::story::{Color, TextStyle};

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::interaction;
use crate::interpreter::Signal;
use crate::inventory;
use crate::parser::{COMMANDS, Command, parse_command};
use crate::presenter::Presenter;
use crate::search;
use crate::state::GameState;

/// Shortest allowed player name.
pub const MIN_NAME_LEN: usize = 3;
/// Longest allowed player name.
pub const MAX_NAME_LEN: usize = 24;

/// What the command loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Tear the run down and set up a new one.
    Reset,
    /// Stop playing.
    Quit,
}

/// A game session. Owns the run state and rebuilds it on every reset.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    state: Option<GameState>,
}

impl GameSession {
    /// Create a session. Nothing is set up until [`GameSession::start`].
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// The current run, once started.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Mutable access to the current run.
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    /// Play until the player quits.
    pub fn run(&mut self, out: &mut dyn Presenter) -> FictionResult<()> {
        loop {
            if self.start(out)?.is_game_over() {
                game_over(out)?;
                continue;
            }
            loop {
                let line = out.prompt_line("What would you like to do?")?;
                match self.process(&line, out)? {
                    Flow::Continue => {}
                    Flow::Reset => break,
                    Flow::Quit => return Ok(()),
                }
            }
        }
    }

    /// Set up a fresh run: title, scenario, name, world, then the landing
    /// interaction.
    pub fn start(&mut self, out: &mut dyn Presenter) -> FictionResult<Signal> {
        out.clear()?;
        for line in TITLE_ART.lines().filter(|l| !l.trim().is_empty()) {
            out.text(line, TextStyle::tight().with_color(Color::Yellow))?;
        }

        let scenario = match self.config.scenario {
            Some(scenario) => scenario,
            None => choose_scenario(out)?,
        };
        let name = match &self.config.player_name {
            Some(name) => validate_name(name)?,
            None => ask_name(out)?,
        };

        let rng = match self.state.take() {
            Some(previous) => previous.rng,
            None => self.fresh_rng(),
        };
        let state = self.state.insert(GameState::new(scenario, &name, rng)?);

        out.paragraph(
            &format!("Good luck, {name}. Type 'help' for a list of commands."),
            TextStyle::colored(Color::Green),
        )?;
        interaction::on_enter(state, out)
    }

    fn fresh_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Parse and execute one line of input.
    pub fn process(&mut self, input: &str, out: &mut dyn Presenter) -> FictionResult<Flow> {
        self.execute(parse_command(input), out)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command, out: &mut dyn Presenter) -> FictionResult<Flow> {
        let Some(state) = self.state.as_mut() else {
            return Ok(Flow::Reset);
        };
        debug!("command: {command:?}");

        let signal = match command {
            Command::Move(direction) => do_move(state, direction, out)?,
            Command::Map => {
                do_map(state, out)?;
                Signal::Continue
            }
            Command::Search => {
                search::search(state, out)?;
                Signal::Continue
            }
            Command::Inventory => inventory::inventory_menu(state, out)?,
            Command::Potion => {
                inventory::potion_menu(&mut state.player, out)?;
                Signal::Continue
            }
            Command::Stats => {
                for line in inventory::stats_table(&state.player).lines() {
                    out.text(line, TextStyle::tight())?;
                }
                Signal::Continue
            }
            Command::Contents => {
                do_contents(state, out)?;
                Signal::Continue
            }
            Command::Help => {
                do_help(out)?;
                Signal::Continue
            }
            Command::Reset => {
                info!("reset requested");
                out.paragraph("Starting over...", TextStyle::colored(Color::Yellow))?;
                return Ok(Flow::Reset);
            }
            Command::Quit => {
                out.paragraph("Goodbye!", TextStyle::default())?;
                return Ok(Flow::Quit);
            }
            Command::Empty => Signal::Continue,
            Command::Unknown { input, suggestion } => {
                out.error(&FictionError::UnknownCommand(input).to_string())?;
                if let Some(word) = suggestion {
                    out.text(&format!("Did you mean '{word}'?"), TextStyle::tight())?;
                }
                out.text("Type 'help' for a list of commands.", TextStyle::tight())?;
                Signal::Continue
            }
        };

        match signal {
            Signal::Continue => Ok(Flow::Continue),
            Signal::GameOver => {
                game_over(out)?;
                Ok(Flow::Reset)
            }
        }
    }
}

fn game_over(out: &mut dyn Presenter) -> FictionResult<()> {
    info!("game over, resetting");
    out.text("GAME OVER", TextStyle::colored(Color::Red).with_space(2))?;
    out.pause_for_enter(1)?;
    Ok(())
}

/// Check a player name: 3 to 24 ASCII letters or digits.
pub fn validate_name(name: &str) -> FictionResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FictionError::EmptyInput);
    }
    let valid_len = (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len());
    if !valid_len || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FictionError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

fn choose_scenario(out: &mut dyn Presenter) -> FictionResult<Scenario> {
    out.text("Choose your adventure:", TextStyle::tight().with_space(1))?;
    for scenario in Scenario::ALL {
        out.text(&format!("  {scenario}"), TextStyle::tight())?;
    }
    let allowed: Vec<usize> = Scenario::ALL.iter().map(|s| s.number() as usize).collect();
    let number = out.choose_number("Scenario number", &allowed)?;
    Ok(Scenario::from_number(number as u32)?)
}

fn ask_name(out: &mut dyn Presenter) -> FictionResult<String> {
    loop {
        let line = out.prompt_line("What is your name, traveller?")?;
        match validate_name(&line) {
            Ok(name) => return Ok(name),
            Err(e) => out.error(&e.to_string())?,
        }
    }
}

fn do_move(
    state: &mut GameState,
    direction: Direction,
    out: &mut dyn Presenter,
) -> FictionResult<Signal> {
    if state.planet_mut().move_player(direction).is_none() {
        out.error(&format!(
            "You can't go {direction}. That is the edge of {}.",
            state.planet().name
        ))?;
        return Ok(Signal::Continue);
    }
    debug!("moved {direction} to {}", state.planet().player_pos());
    interaction::on_enter(state, out)
}

fn do_map(state: &GameState, out: &mut dyn Presenter) -> FictionResult<()> {
    let planet = state.planet();
    out.render_map(&planet.name, &planet.map_rows())?;
    let grey = TextStyle::tight().with_color(Color::Grey);
    out.text("P = you   o = visited   * = unexplored", grey.with_space(1))?;
    Ok(())
}

fn do_contents(state: &GameState, out: &mut dyn Presenter) -> FictionResult<()> {
    let planet = state.planet();
    let pos = planet.player_pos();
    let tight = TextStyle::tight();
    let Some(area) = planet.area_at(pos) else {
        out.paragraph(
            &format!("Open ground on {} at {pos}. Nothing is here.", planet.name),
            TextStyle::default(),
        )?;
        return Ok(());
    };

    out.text(&format!("{} ({} {pos})", area.name, planet.name), tight.with_space(1))?;
    if let Some(enemy) = &area.enemy {
        let line = if area.is_guarded() {
            format!("  {} is here, health {}.", enemy.name, enemy.health.current())
        } else {
            format!("  {} lies defeated here.", enemy.name)
        };
        out.text(&line, tight)?;
    }
    if let Some(neutral) = &area.neutral {
        out.text(&format!("  {} is here.", neutral.name), tight)?;
    }
    if area.items.is_empty() {
        out.text("  No items lie here.", tight)?;
    } else {
        let names: Vec<&str> = area.items.iter().map(|i| i.name()).collect();
        out.text(&format!("  Items: {}", names.join(", ")), tight)?;
    }
    Ok(())
}

fn do_help(out: &mut dyn Presenter) -> FictionResult<()> {
    let tight = TextStyle::tight();
    out.text("Commands:", tight.with_space(1))?;
    for (word, aliases, summary) in COMMANDS {
        let label = if aliases.is_empty() {
            (*word).to_string()
        } else {
            format!("{word} ({})", aliases.join(", "))
        };
        out.text(&format!("  {label:<24} {summary}"), tight)?;
    }
    Ok(())
}
