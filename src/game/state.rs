//! Game state types.

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, calculate_hand_score};
use crate::result::{GameResult, compare_hands};

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer has played out their hand; the round is over.
    DealerTurn,
}

/// A snapshot of one round.
///
/// States are never changed in place by the engine. Each transition returns a
/// new state and leaves the old one untouched. Cards only move between the
/// deck and the hands, so a state built by the engine always accounts for all
/// 52 cards exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) player_hand: Hand,
    pub(crate) dealer_hand: Hand,
    pub(crate) card_deck: Deck,
    pub(crate) turn: Turn,
}

impl GameState {
    /// Builds a state from its parts.
    ///
    /// No card accounting is checked.
    #[must_use]
    pub const fn from_parts(
        player_hand: Hand,
        dealer_hand: Hand,
        card_deck: Deck,
        turn: Turn,
    ) -> Self {
        Self {
            player_hand,
            dealer_hand,
            card_deck,
            turn,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn card_deck(&self) -> &Deck {
        &self.card_deck
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the number of cards across both hands and the deck.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.player_hand.len() + self.dealer_hand.len() + self.card_deck.len()
    }

    /// Returns the dealer card shown face up while the player acts.
    ///
    /// The first dealer card is the hole card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer_hand.cards().get(1)
    }

    /// Returns the dealer score the player is allowed to see.
    ///
    /// During the player's turn only the up card counts; afterwards the whole
    /// hand does.
    #[must_use]
    pub fn visible_dealer_score(&self) -> u16 {
        match self.turn {
            Turn::PlayerTurn => self
                .dealer_up_card()
                .map_or(0, |card| calculate_hand_score(&[*card])),
            Turn::DealerTurn => self.dealer_hand.score(),
        }
    }

    /// Decides the round from the current hands, whoever's turn it is.
    #[must_use]
    pub fn result(&self) -> GameResult {
        compare_hands(&self.player_hand, &self.dealer_hand)
    }

    /// Returns the result once the dealer has played, or
    /// [`GameResult::NoResult`] while the player is still acting.
    #[must_use]
    pub fn settled_result(&self) -> GameResult {
        match self.turn {
            Turn::PlayerTurn => GameResult::NoResult,
            Turn::DealerTurn => self.result(),
        }
    }
}
