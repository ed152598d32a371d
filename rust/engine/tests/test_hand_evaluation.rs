use cardroom_engine::cards::{Card, Rank as R, Suit as S};
use cardroom_engine::hand::{compare_hands, evaluate_hand, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let hs = evaluate_hand(&cards);
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.kickers[0], 14);
}

#[test]
fn category_ordering_is_correct() {
    let quads = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
    ];
    let full_house = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
    ];
    let a = evaluate_hand(&quads);
    let b = evaluate_hand(&full_house);
    assert_eq!(b.category, Category::FullHouse);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn straight_beats_three_of_a_kind() {
    let straight = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
    ];
    let trips = [
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Six),
    ];
    let a = evaluate_hand(&straight);
    let b = evaluate_hand(&trips);
    assert_eq!(b.category, Category::ThreeOfAKind);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
        c(S::Diamonds, R::Four),
        c(S::Clubs, R::Five),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Nine),
    ];
    let six_high = [
        c(S::Clubs, R::Two),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Four),
        c(S::Diamonds, R::Five),
        c(S::Clubs, R::Six),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Nine),
    ];
    let a = evaluate_hand(&wheel);
    let b = evaluate_hand(&six_high);
    assert_eq!(a.category, Category::Straight);
    assert_eq!(a.kickers[0], 5);
    assert!(compare_hands(&b, &a).is_gt());
}

#[test]
fn flush_beats_straight_and_is_detected() {
    let flush = [
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Nine),
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::King),
    ];
    let straight = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
    ];
    let a = evaluate_hand(&flush);
    assert_eq!(a.category, Category::Flush);
    let b = evaluate_hand(&straight);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn third_pair_plays_as_two_pair_kicker() {
    // KK QQ 99 + 3: best five are KKQQ9
    let cards = [
        c(S::Clubs, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Clubs, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Three),
    ];
    let hs = evaluate_hand(&cards);
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.kickers, [13, 12, 9, 0, 0]);
}

#[test]
fn kicker_breaks_pair_tie() {
    let board = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Seven),
        c(S::Diamonds, R::Four),
        c(S::Clubs, R::Two),
    ];
    let mut a = board.to_vec();
    a.extend([c(S::Spades, R::King), c(S::Spades, R::Three)]);
    let mut b = board.to_vec();
    b.extend([c(S::Hearts, R::Queen), c(S::Hearts, R::Jack)]);
    assert!(compare_hands(&evaluate_hand(&a), &evaluate_hand(&b)).is_gt());
}

#[test]
fn pair_vs_high_card() {
    let pair = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
        c(S::Diamonds, R::Six),
        c(S::Hearts, R::Eight),
    ];
    let high = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Eight),
        c(S::Clubs, R::Seven),
        c(S::Diamonds, R::Three),
        c(S::Hearts, R::Two),
    ];
    let a = evaluate_hand(&pair);
    let b = evaluate_hand(&high);
    assert_eq!(a.category, Category::OnePair);
    assert_eq!(b.category, Category::HighCard);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn two_hole_cards_alone_evaluate() {
    let hs = evaluate_hand(&[c(S::Clubs, R::Nine), c(S::Hearts, R::Nine)]);
    assert_eq!(hs.category, Category::OnePair);
    assert_eq!(hs.kickers[0], 9);
}
