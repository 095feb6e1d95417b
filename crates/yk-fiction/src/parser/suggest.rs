//! "Did you mean" hints for mistyped commands.

use strsim::jaro_winkler;

use super::command::COMMANDS;

/// Minimum Jaro-Winkler similarity for a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The known command word closest to `input`, if it is close enough.
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    COMMANDS
        .iter()
        .map(|(word, _, _)| (*word, jaro_winkler(&input, word)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typos() {
        assert_eq!(suggest_command("serch"), Some("search"));
        assert_eq!(suggest_command("inventroy"), Some("inventory"));
        assert_eq!(suggest_command("STATS"), Some("stats"));
    }

    #[test]
    fn nothing_close() {
        assert_eq!(suggest_command("xyzzy"), None);
        assert_eq!(suggest_command("dance"), None);
    }
}
