use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::Hand;
use crate::options::GameOptions;

/// Lowest total the dealer stands on.
pub const DEALER_STANDS_ON: u16 = 17;

/// Returns whether the dealer must take another card.
///
/// The dealer draws on 16 or less and stands on 17 or more. A soft 17 is
/// drawn to only when `stand_on_soft_17` is off.
#[must_use]
pub fn dealer_must_draw(hand: &Hand, options: &GameOptions) -> bool {
    let value = hand.score();
    if value < DEALER_STANDS_ON {
        return true;
    }
    value == DEALER_STANDS_ON && hand.is_soft() && !options.stand_on_soft_17
}

/// Dealer plays their hand according to the rules.
///
/// Draws from the top of `deck` until [`dealer_must_draw`] is false, whether
/// or not the final card busts the hand. Returns the cards drawn.
///
/// # Errors
///
/// Returns an error if the deck runs out while the dealer must draw.
pub(crate) fn dealer_play(
    hand: &mut Hand,
    deck: &mut Deck,
    options: &GameOptions,
) -> Result<Vec<Card>, EmptyDeckError> {
    let mut drawn_cards = Vec::new();

    while dealer_must_draw(hand, options) {
        let card = deck.draw()?;
        hand.add_card(card);
        drawn_cards.push(card);
        tracing::trace!(%card, score = hand.score(), "dealer draws");
    }

    tracing::debug!(
        score = hand.score(),
        drawn = drawn_cards.len(),
        bust = hand.is_bust(),
        "dealer stands"
    );

    Ok(drawn_cards)
}
