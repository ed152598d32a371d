use std::cmp::Ordering;

use crate::cards::Card;
use crate::hand::{compare_hands, evaluate_hand, HandStrength};

/// Ranks the best five-card hand available in 2 to 7 cards.
pub trait HandEvaluator: Send + Sync {
    fn evaluate(&self, cards: &[Card]) -> HandStrength;
}

/// In-crate evaluator backed by [`evaluate_hand`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate(&self, cards: &[Card]) -> HandStrength {
        evaluate_hand(cards)
    }
}

/// One seat's entry into a showdown.
#[derive(Debug, Clone)]
pub struct Contender<'a> {
    pub seat: usize,
    pub hole: &'a [Card],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    /// Best hand per contender, in the order given
    pub hands: Vec<(usize, HandStrength)>,
    /// Seats holding a hand nobody beats, in the order given
    pub winners: Vec<usize>,
}

/// Compares every contender's hole cards plus the board. Ties produce several
/// winners. Callers pass contenders in pot-split order.
pub fn resolve(
    evaluator: &dyn HandEvaluator,
    board: &[Card],
    contenders: &[Contender<'_>],
) -> ShowdownResult {
    let hands: Vec<(usize, HandStrength)> = contenders
        .iter()
        .map(|c| {
            let mut cards = Vec::with_capacity(c.hole.len() + board.len());
            cards.extend_from_slice(c.hole);
            cards.extend_from_slice(board);
            (c.seat, evaluator.evaluate(&cards))
        })
        .collect();

    let best = hands
        .iter()
        .map(|(_, h)| h)
        .max_by(|a, b| compare_hands(a, b));
    let winners = match best {
        Some(best) => hands
            .iter()
            .filter(|(_, h)| compare_hands(h, best) == Ordering::Equal)
            .map(|&(seat, _)| seat)
            .collect(),
        None => Vec::new(),
    };
    ShowdownResult { hands, winners }
}

/// Divides `pot` between `winners` shares. The `pot % winners` odd chips go
/// one each to the first shares.
///
/// ```
/// use cardroom_engine::showdown::split_pot;
///
/// assert_eq!(split_pot(101, 2), vec![51, 50]);
/// assert_eq!(split_pot(10, 3), vec![4, 3, 3]);
/// ```
pub fn split_pot(pot: u32, winners: usize) -> Vec<u32> {
    if winners == 0 {
        return Vec::new();
    }
    let n = winners as u32;
    let share = pot / n;
    let odd = (pot % n) as usize;
    (0..winners)
        .map(|i| if i < odd { share + 1 } else { share })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::hand::Category;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn split_never_drops_chips() {
        for pot in [0u32, 1, 7, 100, 101, 1_999] {
            for n in 1..=6 {
                let shares = split_pot(pot, n);
                assert_eq!(shares.len(), n);
                assert_eq!(shares.iter().sum::<u32>(), pot);
                assert!(shares.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    #[test]
    fn board_plays_for_everyone() {
        let board = [
            c(Rank::Ten, Suit::Spades),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Queen, Suit::Spades),
            c(Rank::King, Suit::Spades),
            c(Rank::Ace, Suit::Spades),
        ];
        let a = [c(Rank::Two, Suit::Hearts), c(Rank::Three, Suit::Clubs)];
        let b = [c(Rank::Four, Suit::Hearts), c(Rank::Five, Suit::Clubs)];
        let result = resolve(
            &StandardEvaluator,
            &board,
            &[
                Contender { seat: 3, hole: &a },
                Contender { seat: 0, hole: &b },
            ],
        );
        assert_eq!(result.winners, vec![3, 0]);
        assert_eq!(result.hands[0].1.category, Category::StraightFlush);
    }
}
