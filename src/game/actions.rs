use crate::error::EmptyDeckError;
use crate::options::GameOptions;

use super::dealer::dealer_play;
use super::{GameState, Turn};

/// Player action: Hit (draw a card).
///
/// Moves the top card of the deck onto the player's hand. The turn does not
/// change, even when the new card busts the hand; callers stop offering
/// actions once the dealer has played.
///
/// # Errors
///
/// Returns an error if the deck is empty.
pub fn player_hits(state: &GameState) -> Result<GameState, EmptyDeckError> {
    let mut next = state.clone();
    let card = next.card_deck.draw()?;
    next.player_hand.add_card(card);

    tracing::debug!(
        %card,
        score = next.player_hand.score(),
        remaining = next.card_deck.len(),
        "player hits"
    );

    Ok(next)
}

/// Player action: Stand (keep current hand).
///
/// Hands control to the dealer, who draws to the rules in `options`, and
/// returns the finished round with the turn set to [`Turn::DealerTurn`].
///
/// # Errors
///
/// Returns an error if the deck runs out while the dealer must draw.
pub fn player_stands(
    state: &GameState,
    options: &GameOptions,
) -> Result<GameState, EmptyDeckError> {
    let mut next = state.clone();
    tracing::debug!(score = next.player_hand.score(), "player stands");

    dealer_play(&mut next.dealer_hand, &mut next.card_deck, options)?;
    next.turn = Turn::DealerTurn;

    Ok(next)
}
