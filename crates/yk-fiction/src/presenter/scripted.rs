//! A presenter fed from a queue of canned answers.

use std::collections::VecDeque;
use std::io;

use yk_core::planet::MapTile;
use yk_core::story::TextStyle;

use super::Presenter;

/// Presenter for headless play and tests.
///
/// Answers prompts from a queue and records everything shown in a
/// transcript. Pauses and clears never consume input. An empty queue
/// reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPresenter {
    /// Create a presenter that will answer with `inputs` in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Queue more answers.
    pub fn push_inputs<I, S>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Every line shown so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Returns true if any transcript line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Forget the transcript.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }
}

impl Presenter for ScriptedPresenter {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn text(&mut self, line: &str, _style: TextStyle) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn paragraph(&mut self, body: &str, _style: TextStyle) -> io::Result<()> {
        self.transcript.push(body.to_string());
        Ok(())
    }

    fn pause_for_enter(&mut self, _space: u8) -> io::Result<()> {
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        let answer = self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })?;
        self.transcript.push(format!("{prompt} > {answer}"));
        Ok(answer)
    }

    fn render_map(&mut self, name: &str, rows: &[Vec<MapTile>]) -> io::Result<()> {
        self.transcript.push(format!("Map of {name}"));
        for row in rows {
            let line: Vec<String> = row.iter().map(|t| t.glyph().to_string()).collect();
            self.transcript.push(line.join(" "));
        }
        Ok(())
    }
}
