use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The 52-card deck for one hand. Cards leave from the top of the shuffled
/// order and are never returned until the next [`Deck::shuffle`].
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Restores all 52 cards and permutes them uniformly (Fisher-Yates).
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
