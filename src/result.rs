//! Round result types and determination.

use core::cmp::Ordering;

use crate::game::GameState;
use crate::hand::{BLACKJACK, Hand};

/// Outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Player wins.
    PlayerWin,
    /// Dealer wins.
    DealerWin,
    /// Push (tie).
    Draw,
    /// The round has not been resolved yet.
    NoResult,
}

impl GameResult {
    /// Returns the result seen from the other side of the table.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Self::PlayerWin => Self::DealerWin,
            Self::DealerWin => Self::PlayerWin,
            Self::Draw => Self::Draw,
            Self::NoResult => Self::NoResult,
        }
    }
}

/// Decides the round from the state's current hands.
///
/// The turn is not consulted; see [`GameState::settled_result`] for a result
/// that waits for the dealer.
#[must_use]
pub fn determine_game_result(state: &GameState) -> GameResult {
    compare_hands(state.player_hand(), state.dealer_hand())
}

/// Decides a round between two hands.
///
/// Rules are checked in order and the first match wins:
/// 1. a lone natural blackjack wins outright,
/// 2. a player bust loses, then a dealer bust loses,
/// 3. a player 21 beats any dealer total other than 21,
/// 4. otherwise the higher score wins and equal scores draw.
///
/// Never returns [`GameResult::NoResult`].
#[must_use]
pub fn compare_hands(player: &Hand, dealer: &Hand) -> GameResult {
    let player_blackjack = player.is_blackjack();
    let dealer_blackjack = dealer.is_blackjack();

    if player_blackjack && !dealer_blackjack {
        return GameResult::PlayerWin;
    }
    if dealer_blackjack && !player_blackjack {
        return GameResult::DealerWin;
    }

    let player_score = player.score();
    let dealer_score = dealer.score();

    if player_score > BLACKJACK {
        GameResult::DealerWin
    } else if dealer_score > BLACKJACK {
        GameResult::PlayerWin
    } else {
        // A player 21 against any other dealer total is the higher score.
        match player_score.cmp(&dealer_score) {
            Ordering::Greater => GameResult::PlayerWin,
            Ordering::Less => GameResult::DealerWin,
            Ordering::Equal => GameResult::Draw,
        }
    }
}
