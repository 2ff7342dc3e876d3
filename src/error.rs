//! Error types for game operations.

use thiserror::Error;

/// A card was requested from a deck with no cards left.
///
/// A legitimate round never exhausts the deck, so this error points at broken
/// deck accounting rather than anything a player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot draw from an empty deck")]
pub struct EmptyDeckError;
