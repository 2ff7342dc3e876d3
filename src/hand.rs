//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that does not bust.
pub const BLACKJACK: u16 = 21;

/// Returns `(score, soft)` for a set of cards.
///
/// Non-Ace cards are summed first. Each Ace then takes 11 if the total stays
/// within 21 with every remaining Ace held back at 1; otherwise it takes 1.
fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        match card.rank.fixed_value() {
            Some(points) => value += points,
            None => aces += 1,
        }
    }

    let mut soft = false;
    for counted in 0..aces {
        let reserved = aces - counted - 1;
        if value + 11 + reserved <= BLACKJACK {
            value += 11;
            soft = true;
        } else {
            value += 1;
        }
    }

    (value, soft)
}

/// Computes the best score for a hand, counting each Ace as 11 or 1.
///
/// The result is not clamped: a busted hand reports its full total.
///
/// ```
/// use bjsolo::{Card, Rank, Suit, calculate_hand_score};
///
/// let hand = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::King),
/// ];
/// assert_eq!(calculate_hand_score(&hand), 21);
/// ```
#[must_use]
pub fn calculate_hand_score(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Cards held by the player or the dealer.
///
/// A hand only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards, in deal order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn score(&self) -> u16 {
        calculate_hand_score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is a natural: exactly two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}
