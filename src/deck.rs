//! Deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// An ordered sequence of cards.
///
/// The last card in the sequence is the top of the deck; draws always come
/// from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck, suit-major and rank-minor.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from explicit cards. The last card is the top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns an independently shuffled copy of this deck.
    ///
    /// Uses a Fisher-Yates shuffle, so every permutation is equally likely
    /// for a uniform `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.cards.shuffle(rng);
        self
    }

    /// Removes the top card, returning it together with the remaining deck.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck has no cards.
    pub fn take_card(mut self) -> Result<(Card, Self), EmptyDeckError> {
        let card = self.draw()?;
        Ok((card, self))
    }

    /// Removes the top card in place.
    pub(crate) fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or_else(|| {
            tracing::warn!("draw attempted on an empty deck");
            EmptyDeckError
        })
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck, returning its cards bottom first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a uniformly shuffled copy of `deck`.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Deck {
    deck.clone().shuffled(rng)
}
