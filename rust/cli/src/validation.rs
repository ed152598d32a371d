//! Parsing of typed table commands.

use cardroom_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    /// `summary` or `s`
    Summary,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts (case-insensitive) `fold`/`f`, `check`/`c`, `call`,
/// `raise <amount>`/`r <amount>`, `summary`/`s` and `q`/`quit`. The raise amount is the
/// increment above what the seat owes.
///
/// ```rust
/// use cardroom_cli::validation::{parse_player_action, ParseResult};
/// use cardroom_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(parse_player_action("Raise 20"), ParseResult::Action(PlayerAction::Raise(20)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("shove") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "summary" | "s" => ParseResult::Summary,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => match parts.get(1).map(|s| s.parse::<u32>()) {
            None => ParseResult::Invalid(
                "Raise requires an amount (e.g., 'raise 20')".to_string(),
            ),
            Some(Ok(amount)) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
            Some(Ok(_)) => ParseResult::Invalid("Raise amount must be positive".to_string()),
            Some(Err(_)) => ParseResult::Invalid("Invalid raise amount".to_string()),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, summary, q",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_forms() {
        assert_eq!(parse_player_action("f"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action(" C "), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action("r 15"), ParseResult::Action(PlayerAction::Raise(15)));
        assert_eq!(parse_player_action("QUIT"), ParseResult::Quit);
        assert_eq!(parse_player_action("s"), ParseResult::Summary);
        assert_eq!(parse_player_action("Summary"), ParseResult::Summary);
    }

    #[test]
    fn raise_amount_errors() {
        for (input, expected) in [
            ("raise", "requires an amount"),
            ("raise 0", "must be positive"),
            ("raise -4", "Invalid raise amount"),
            ("raise lots", "Invalid raise amount"),
        ] {
            match parse_player_action(input) {
                ParseResult::Invalid(msg) => assert!(msg.contains(expected), "{input}: {msg}"),
                other => panic!("{input} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn empty_line_is_invalid() {
        assert_eq!(
            parse_player_action("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
    }
}
