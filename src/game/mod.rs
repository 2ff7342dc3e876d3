//! Round setup, player actions, and dealer play.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod dealer;
pub mod state;

pub use actions::{player_hits, player_stands};
pub use dealer::{DEALER_STANDS_ON, dealer_must_draw};
pub use state::{GameState, Turn};

/// Cards handed out before the player acts: two each.
pub const INITIAL_DEAL: usize = 4;

/// Starts a new round from a freshly shuffled 52-card deck.
///
/// The player receives the top two cards and the dealer the two beneath them,
/// leaving 48 in the deck. The turn starts with the player.
#[must_use]
pub fn setup_game<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    deal_unchecked(Deck::new().shuffled(rng))
}

/// Starts a new round from `deck` as given, without shuffling.
///
/// Dealing follows [`setup_game`], so a stacked deck produces a known round.
///
/// # Errors
///
/// Returns an error if `deck` holds fewer than four cards.
pub fn deal_from(deck: Deck) -> Result<GameState, EmptyDeckError> {
    if deck.len() < INITIAL_DEAL {
        tracing::warn!(cards = deck.len(), "not enough cards to deal a round");
        return Err(EmptyDeckError);
    }
    Ok(deal_unchecked(deck))
}

fn deal_unchecked(deck: Deck) -> GameState {
    let mut cards: Vec<Card> = deck.into_cards();
    let player = cards.split_off(cards.len() - 2);
    let dealer = cards.split_off(cards.len() - 2);

    let state = GameState::from_parts(
        Hand::from_cards(player),
        Hand::from_cards(dealer),
        Deck::from_cards(cards),
        Turn::PlayerTurn,
    );

    tracing::debug!(
        player_score = state.player_hand().score(),
        dealer_score = state.dealer_hand().score(),
        remaining = state.card_deck().len(),
        "round dealt"
    );

    state
}

/// A seeded dealer's table.
///
/// The table owns the rules and the random source, never a round: each
/// [`Table::deal`] returns an independent [`GameState`] and the caller passes
/// it back into [`Table::hit`] and [`Table::stand`].
#[derive(Debug, Clone)]
pub struct Table {
    /// Game options.
    options: GameOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{GameOptions, Table, Turn};
    ///
    /// let mut table = Table::new(GameOptions::default(), 42);
    /// let state = table.deal();
    /// assert_eq!(state.turn(), Turn::PlayerTurn);
    /// assert_eq!(state.card_deck().len(), 48);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the table's options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Shuffles a fresh deck and deals a new round.
    ///
    /// Also serves as reset: the previous round is simply dropped.
    pub fn deal(&mut self) -> GameState {
        setup_game(&mut self.rng)
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn hit(&self, state: &GameState) -> Result<GameState, EmptyDeckError> {
        player_hits(state)
    }

    /// Player action: Stand, then play out the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer must draw.
    pub fn stand(&self, state: &GameState) -> Result<GameState, EmptyDeckError> {
        player_stands(state, &self.options)
    }
}
