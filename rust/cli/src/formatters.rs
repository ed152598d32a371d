//! Terminal rendering of cards, seats and match results.
//!
//! Cards use suit glyphs (`A♠`) where the terminal can show them and fall
//! back to letters (`As`) elsewhere.

use cardroom_engine::cards::{Card, normalize_glyphs};
use cardroom_engine::game::{GameSnapshot, PlayerView};
use cardroom_engine::table::MatchOutcome;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_card(card: &Card) -> String {
    if supports_unicode() {
        card.to_string()
    } else {
        card.ascii()
    }
}

pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

/// A feed line from the engine, with glyphs swapped out when the terminal
/// cannot show them.
pub fn format_feed_line(line: &str) -> String {
    if supports_unicode() {
        line.to_string()
    } else {
        normalize_glyphs(line)
    }
}

/// One row of the seat table, e.g. `  Alice (D)  stack 990  bet 10  [A♠ K♦]`.
pub fn format_seat(seat: &PlayerView, to_act: bool) -> String {
    let marker = if to_act { ">" } else { " " };
    let dealer = if seat.is_dealer { " (D)" } else { "" };
    let mut line = format!(
        "{} {}{}  stack {}  bet {}",
        marker, seat.name, dealer, seat.stack, seat.current_bet
    );
    if seat.folded {
        line.push_str("  folded");
    } else if seat.thinking {
        line.push_str("  thinking...");
    }
    if !seat.hand.is_empty() {
        line.push_str("  ");
        line.push_str(&format_board(&seat.hand));
    }
    line
}

/// Table state as shown to `viewer` before they act.
pub fn render_table(snapshot: &GameSnapshot, viewer: &str) -> Vec<String> {
    let mut lines = vec![format!(
        "Hand {} | {} | Pot: {} | Board: {}",
        snapshot.hand_number,
        snapshot.street,
        snapshot.pot,
        format_board(&snapshot.board)
    )];
    for seat in &snapshot.players {
        let to_act = snapshot.current_actor.as_deref() == Some(seat.name.as_str());
        lines.push(format_seat(seat, to_act));
    }
    if let Some(me) = snapshot.players.iter().find(|p| p.name == viewer) {
        let to_call = snapshot.current_bet.saturating_sub(me.current_bet).min(me.stack);
        lines.push(format!("To call: {}  Your stack: {}", to_call, me.stack));
    }
    lines
}

pub fn format_outcome(outcome: &MatchOutcome) -> String {
    match outcome {
        MatchOutcome::Won(name) => format!("Match over: {} wins", name),
        MatchOutcome::HumanEliminated => "Match over: you were eliminated".to_string(),
        MatchOutcome::HandLimitReached => "Match over: hand limit reached".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardroom_engine::cards::{Rank, Suit};
    use cardroom_engine::logger::Street;

    fn seat(name: &str, stack: u32, bet: u32) -> PlayerView {
        PlayerView {
            name: name.to_string(),
            stack,
            current_bet: bet,
            folded: false,
            hand: Vec::new(),
            thinking: false,
            revealed: false,
            is_dealer: false,
        }
    }

    #[test]
    fn card_is_glyph_or_ascii() {
        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        let formatted = format_card(&ace_spades);
        assert!(formatted == "A♠" || formatted == "As");
    }

    #[test]
    fn empty_board() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn seat_markers() {
        let mut alice = seat("Alice", 990, 10);
        alice.is_dealer = true;
        let line = format_seat(&alice, true);
        assert!(line.starts_with("> Alice (D)"));
        assert!(line.contains("stack 990"));

        let mut bob = seat("Bob", 500, 0);
        bob.folded = true;
        bob.thinking = true;
        let line = format_seat(&bob, false);
        assert!(line.ends_with("folded"));
        assert!(!line.contains("thinking"));
    }

    #[test]
    fn table_shows_amount_to_call() {
        let snapshot = GameSnapshot {
            hand_number: 3,
            street: Street::Flop,
            players: vec![seat("Alice", 990, 10), seat("Bob", 970, 30)],
            board: vec![
                Card::new(Rank::Two, Suit::Hearts),
                Card::new(Rank::Nine, Suit::Clubs),
                Card::new(Rank::King, Suit::Spades),
            ],
            pot: 60,
            current_bet: 30,
            current_actor: Some("Alice".to_string()),
            actions: Vec::new(),
            messages: Vec::new(),
            win_message: None,
        };
        let lines = render_table(&snapshot, "Alice");
        assert!(lines[0].starts_with("Hand 3 | "));
        assert!(lines[0].contains("Pot: 60"));
        assert!(lines[1].starts_with("> Alice"));
        assert_eq!(lines.last().map(String::as_str), Some("To call: 20  Your stack: 990"));
    }

    #[test]
    fn outcomes() {
        assert_eq!(
            format_outcome(&MatchOutcome::Won("Robo-Rob".into())),
            "Match over: Robo-Rob wins"
        );
    }
}
