//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! Rounds are plain values. [`setup_game`] deals a fresh [`GameState`], and
//! [`player_hits`] and [`player_stands`] each return the next state without
//! touching the one they were given. [`determine_game_result`] decides the
//! round from whatever hands exist at call time.
//!
//! # Example
//!
//! ```
//! use bjsolo::{GameOptions, GameResult, Table, Turn};
//!
//! let mut table = Table::new(GameOptions::default(), 42);
//! let state = table.deal();
//! let state = table.stand(&state).unwrap();
//!
//! assert_eq!(state.turn(), Turn::DealerTurn);
//! assert_ne!(state.settled_result(), GameResult::NoResult);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{AssetKey, Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, shuffle};
pub use error::EmptyDeckError;
pub use game::{
    DEALER_STANDS_ON, GameState, INITIAL_DEAL, Table, Turn, deal_from, dealer_must_draw,
    player_hits, player_stands, setup_game,
};
pub use hand::{BLACKJACK, Hand, calculate_hand_score};
pub use options::GameOptions;
pub use result::{GameResult, compare_hands, determine_game_result};
