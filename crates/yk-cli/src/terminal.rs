//! ANSI terminal presenter.
//!
//! Colors come from `colored`, screen clearing from `crossterm`. Story text
//! is word-wrapped and paced with short sleeps.

use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use yk_core::{Color, MapTile, TextStyle};
use yk_fiction::Presenter;

pub const DEFAULT_WRAP_WIDTH: usize = 80;
pub const MIN_WRAP_WIDTH: usize = 40;
pub const MAX_WRAP_WIDTH: usize = 200;

/// How the terminal presents the game.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenterConfig {
    pub wrap_width: usize,
    /// Multiplier on story delays. 0 disables them.
    pub pacing: f32,
    /// Whether "press enter" pauses block.
    pub pauses: bool,
    pub color: bool,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            pacing: 1.0,
            pauses: true,
            color: true,
        }
    }
}

impl PresenterConfig {
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.clamp(MIN_WRAP_WIDTH, MAX_WRAP_WIDTH);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// No delays, no pauses. For scripted and piped play.
    pub fn fast(mut self) -> Self {
        self.pacing = 0.0;
        self.pauses = false;
        self
    }
}

pub struct TerminalPresenter<R, W> {
    config: PresenterConfig,
    input: R,
    output: W,
    interactive: bool,
}

impl TerminalPresenter<io::StdinLock<'static>, io::Stdout> {
    /// Present on the process's stdin and stdout.
    pub fn new(config: PresenterConfig) -> Self {
        let output = io::stdout();
        let interactive = output.is_terminal();
        Self {
            config,
            input: io::stdin().lock(),
            output,
            interactive,
        }
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    /// Present on arbitrary streams. Never clears the screen.
    #[cfg(test)]
    fn with_io(config: PresenterConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
            interactive: false,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, line: &str, color: Option<Color>) -> String {
        match color {
            Some(color) if self.config.color => line.color(ansi(color)).to_string(),
            _ => line.to_string(),
        }
    }

    /// Player highlighted, visited dim, unvisited areas accented, the rest plain.
    fn tile_cell(&self, tile: MapTile) -> String {
        let glyph = tile.glyph().to_string();
        if !self.config.color {
            return glyph;
        }
        match tile {
            MapTile::Player => glyph.yellow().bold().to_string(),
            MapTile::Visited => glyph.bright_black().to_string(),
            MapTile::Area => glyph.cyan().bold().to_string(),
            MapTile::Empty => glyph,
        }
    }

    fn blank_lines(&mut self, count: u8) -> io::Result<()> {
        for _ in 0..count {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn linger(&mut self, seconds: f32) -> io::Result<()> {
        self.output.flush()?;
        let seconds = seconds * self.config.pacing;
        if seconds > 0.0 {
            thread::sleep(Duration::from_secs_f32(seconds));
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.interactive {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn text(&mut self, line: &str, style: TextStyle) -> io::Result<()> {
        self.blank_lines(style.space)?;
        let painted = self.paint(line, style.color);
        writeln!(self.output, "{painted}")?;
        self.linger(style.delay)
    }

    fn paragraph(&mut self, body: &str, style: TextStyle) -> io::Result<()> {
        self.blank_lines(style.space)?;
        for line in wrap(body, self.config.wrap_width) {
            let painted = self.paint(&line, style.color);
            writeln!(self.output, "{painted}")?;
        }
        self.linger(style.delay)
    }

    fn pause_for_enter(&mut self, space: u8) -> io::Result<()> {
        if !self.config.pauses {
            return Ok(());
        }
        self.blank_lines(space)?;
        let hint = self.paint("Press enter to continue...", Some(Color::Grey));
        write!(self.output, "{hint}")?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output)?;
        let prompt = if self.config.color {
            prompt.bold().to_string()
        } else {
            prompt.to_string()
        };
        write!(self.output, "{prompt} > ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn render_map(&mut self, name: &str, rows: &[Vec<MapTile>]) -> io::Result<()> {
        writeln!(self.output)?;
        let header = self.paint(&format!("Map of {name}"), Some(Color::Yellow));
        writeln!(self.output, "{header}")?;
        for row in rows {
            let cells: Vec<String> = row.iter().map(|tile| self.tile_cell(*tile)).collect();
            writeln!(self.output, "  {}", cells.join(" "))?;
        }
        self.output.flush()
    }
}

fn ansi(color: Color) -> colored::Color {
    match color {
        Color::Red => colored::Color::Red,
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Blue => colored::Color::Blue,
        Color::Magenta => colored::Color::Magenta,
        Color::Cyan => colored::Color::Cyan,
        Color::Grey => colored::Color::BrightBlack,
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
