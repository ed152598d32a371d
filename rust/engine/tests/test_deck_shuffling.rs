use std::collections::HashSet;

use cardroom_engine::cards::Card;
use cardroom_engine::deck::Deck;
use cardroom_engine::errors::GameError;

#[test]
fn fresh_deck_has_52_unique_cards_then_fails() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn shuffle_restores_a_full_deck() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    deck.draw_n(20).unwrap();
    assert_eq!(deck.remaining(), 32);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.draw_n(10).unwrap();
    let b: Vec<Card> = d2.draw_n(10).unwrap();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a = d1.draw_n(10).unwrap();
    let b = d2.draw_n(10).unwrap();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn draw_n_past_the_end_is_an_error() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    deck.draw_n(50).unwrap();
    assert_eq!(deck.draw_n(3), Err(GameError::EmptyDeck));
}
