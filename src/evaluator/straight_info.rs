use crate::cards::Rank;

/// Whether a set of ranks forms a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
    /// Ace plays low (A-2-3 or A-2-3-4-5).
    pub is_wheel: bool,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None, is_wheel: false };

    /// Detect a straight among 3 or 5 ranks, in any order.
    /// Handles both regular straights and the wheel, where the ace plays low.
    pub fn detect(ranks: &[Rank]) -> Self {
        if ranks.len() < 3 {
            return Self::NONE;
        }
        let mut sorted = ranks.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));

        let is_consecutive = sorted.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if is_consecutive {
            return StraightInfo { is_straight: true, top_rank: Some(sorted[0]), is_wheel: false };
        }

        // Wheel: ace on top, the rest run down to Two.
        let tail = &sorted[1..];
        let low_run = tail.last() == Some(&Rank::Two)
            && tail.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if sorted[0] == Rank::Ace && low_run {
            return StraightInfo { is_straight: true, top_rank: Some(tail[0]), is_wheel: true };
        }

        Self::NONE
    }
}
