use crate::cards::{Card, Suit};

/// Whether all cards share the same suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// Detect a single shared suit. Size checks are left to the caller:
    /// a suit-uniform 3-card front is not a flush category.
    pub fn detect(cards: &[Card]) -> Self {
        match cards.first() {
            Some(first) if cards.iter().all(|c| c.suit() == first.suit()) => {
                SuitInfo { is_flush: true, flush_suit: Some(first.suit()) }
            }
            _ => SuitInfo { is_flush: false, flush_suit: None },
        }
    }
}
