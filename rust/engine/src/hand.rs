use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Best five-card value found among the given cards. Derived ordering
/// compares category first, then the tie-break ranks.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Evaluates the best hand among 2 to 7 cards. Missing cards simply leave
/// trailing kickers at zero.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    for &c in cards.iter() {
        let r = c.rank as u8;
        rank_counts[r as usize] += 1;
        let s = suit_index(c.suit);
        suit_counts[s] += 1;
        by_suit[s].push(r);
    }

    let flush_suit = suit_counts.iter().position(|&count| count >= 5);

    // Straight flush
    if let Some(s) = flush_suit {
        by_suit[s].sort_unstable();
        by_suit[s].dedup();
        if let Some(high) = detect_straight_high(&by_suit[s]) {
            return HandStrength {
                category: Category::StraightFlush,
                kickers: [high, 0, 0, 0, 0],
            };
        }
    }

    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return HandStrength {
            category: Category::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        };
    }

    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return HandStrength {
            category: Category::FullHouse,
            kickers: [trip, pair, 0, 0, 0],
        };
    }

    if let Some(s) = flush_suit {
        let mut ranks = by_suit[s].clone();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let mut k = [0u8; 5];
        k.copy_from_slice(&ranks[..5]);
        return HandStrength {
            category: Category::Flush,
            kickers: k,
        };
    }

    let uniq: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    if let Some(high) = detect_straight_high(&uniq) {
        return HandStrength {
            category: Category::Straight,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    // Three / Two pair / One pair / High card; each list is high -> low
    let (trips, pairs, singles) = classify_multiples(&rank_counts);
    if let Some(&t) = trips.first() {
        let mut rest: Vec<u8> = pairs.iter().chain(singles.iter()).copied().collect();
        rest.sort_unstable_by(|a, b| b.cmp(a));
        return HandStrength {
            category: Category::ThreeOfAKind,
            kickers: fill_kickers(&[t], &rest, 2),
        };
    }
    if pairs.len() >= 2 {
        // a third pair can still play as the kicker
        let mut rest: Vec<u8> = pairs[2..].iter().chain(singles.iter()).copied().collect();
        rest.sort_unstable_by(|a, b| b.cmp(a));
        return HandStrength {
            category: Category::TwoPair,
            kickers: fill_kickers(&[pairs[0], pairs[1]], &rest, 1),
        };
    }
    if let Some(&p) = pairs.first() {
        return HandStrength {
            category: Category::OnePair,
            kickers: fill_kickers(&[p], &singles, 3),
        };
    }

    HandStrength {
        category: Category::HighCard,
        kickers: fill_kickers(&[], &singles, 5),
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn fill_kickers(made: &[u8], rest: &[u8], take: usize) -> [u8; 5] {
    let mut k = [0u8; 5];
    for (slot, r) in k
        .iter_mut()
        .zip(made.iter().chain(rest.iter().take(take)))
    {
        *slot = *r;
    }
    k
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

fn detect_straight_high(sorted_unique_ranks: &[u8]) -> Option<u8> {
    if sorted_unique_ranks.is_empty() {
        return None;
    }
    let mut w = sorted_unique_ranks.to_vec();
    w.sort_unstable();
    // Ace-low straight support: treat Ace as 1 additionally
    if w.binary_search(&14).is_ok() {
        w.insert(0, 1);
    }

    let mut run = 1;
    let mut best_high = 0u8;
    for i in 1..w.len() {
        if w[i] == w[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best_high = w[i];
            }
        } else if w[i] != w[i - 1] {
            run = 1;
        }
    }
    (best_high != 0).then_some(best_high)
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 4)?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != quad && rank_counts[r as usize] > 0)
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let mut trips: Vec<u8> = vec![];
    let mut pairs: Vec<u8> = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            _ => {}
        }
    }
    let &t = trips.first()?;
    if trips.len() >= 2 {
        return Some((t, trips[1]));
    }
    pairs.first().map(|&p| (t, p))
}

fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}
