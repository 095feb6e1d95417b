//! The presentation port.
//!
//! Everything the engine shows or asks goes through [`Presenter`]. The
//! terminal front end and the [`ScriptedPresenter`] used for headless play
//! both implement it. Menu prompts have default implementations built on
//! [`Presenter::prompt_line`] that re-ask until the answer is valid.

mod scripted;

pub use scripted::ScriptedPresenter;

use std::io;

use yk_core::planet::MapTile;
use yk_core::story::{Color, TextStyle};

/// Output and input surface consumed by the engine.
pub trait Presenter {
    /// Clear the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Show a single unwrapped line.
    fn text(&mut self, line: &str, style: TextStyle) -> io::Result<()>;

    /// Show a block of prose, wrapped to the output width.
    fn paragraph(&mut self, body: &str, style: TextStyle) -> io::Result<()>;

    /// Wait for the player to press enter.
    fn pause_for_enter(&mut self, space: u8) -> io::Result<()>;

    /// Read one line of free text. End of input is `UnexpectedEof`.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Draw a planet map.
    fn render_map(&mut self, name: &str, rows: &[Vec<MapTile>]) -> io::Result<()>;

    /// Report rejected input.
    fn error(&mut self, message: &str) -> io::Result<()> {
        self.text(message, TextStyle::tight().with_color(Color::Red))
    }

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let answer = self.prompt_line(&format!("{prompt} (y/n)"))?;
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.error("Please answer y or n.")?,
            }
        }
    }

    /// Ask for a number from an explicit set.
    fn choose_number(&mut self, prompt: &str, allowed: &[usize]) -> io::Result<usize> {
        loop {
            let answer = self.prompt_line(prompt)?;
            match answer.trim().parse::<usize>() {
                Ok(n) if allowed.contains(&n) => return Ok(n),
                _ => self.error(&format!("Invalid choice. Enter one of: {}.", join(allowed)))?,
            }
        }
    }

    /// Ask the player to pick one of several named options. Accepts the
    /// option itself, its first letter, or its 1-based number. Returns the
    /// 0-based index.
    fn choose_option(&mut self, prompt: &str, options: &[&str]) -> io::Result<usize> {
        loop {
            let answer = self.prompt_line(&format!("{prompt} ({})", options.join("/")))?;
            if let Some(index) = match_option(answer.trim(), options) {
                return Ok(index);
            }
            self.error(&format!("Please choose {}.", options.join(" or ")))?;
        }
    }
}

fn join(allowed: &[usize]) -> String {
    allowed
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn match_option(answer: &str, options: &[&str]) -> Option<usize> {
    let answer = answer.to_lowercase();
    if answer.is_empty() {
        return None;
    }
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }
    options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(&answer))
        .or_else(|| {
            let hits: Vec<usize> = options
                .iter()
                .enumerate()
                .filter(|(_, o)| o.to_lowercase().starts_with(&answer))
                .map(|(i, _)| i)
                .collect();
            (hits.len() == 1).then(|| hits[0])
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_matching() {
        let options = ["fight", "retreat"];
        assert_eq!(match_option("fight", &options), Some(0));
        assert_eq!(match_option("R", &options), Some(1));
        assert_eq!(match_option("2", &options), Some(1));
        assert_eq!(match_option("3", &options), None);
        assert_eq!(match_option("", &options), None);
        assert_eq!(match_option("dance", &options), None);
    }

    #[test]
    fn ambiguous_prefix_is_rejected() {
        assert_eq!(match_option("c", &["continue", "cower"]), None);
        assert_eq!(match_option("co", &["continue", "flee"]), Some(0));
    }

    #[test]
    fn menus_reprompt_until_valid() {
        let mut out = ScriptedPresenter::new(["7", "x", "2"]);
        assert_eq!(out.choose_number("Pick", &[0, 1, 2]).unwrap(), 2);
        assert!(out.contains("Invalid choice"));

        let mut out = ScriptedPresenter::new(["maybe", "Y"]);
        assert!(out.confirm("Sure?").unwrap());

        let mut out = ScriptedPresenter::new(["flee"]);
        assert_eq!(out.choose_option("Next?", &["continue", "flee"]).unwrap(), 1);
    }

    #[test]
    fn running_dry_is_eof() {
        let mut out = ScriptedPresenter::new(Vec::<String>::new());
        let err = out.confirm("Sure?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
