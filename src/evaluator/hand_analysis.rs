use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, HandValue};

/// Pre-computed analysis of a 3- or 5-card group.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks: Vec<Rank> = sorted_cards.iter().map(|c| c.rank()).collect();
        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, rank_groups, suit_info, straight_info }
    }

    /// Straights and flushes only count in five-card groups.
    pub fn makes_flush(&self) -> bool {
        self.sorted_cards.len() == 5 && self.suit_info.is_flush
    }

    pub fn makes_straight(&self) -> bool {
        self.sorted_cards.len() == 5 && self.straight_info.is_straight
    }

    /// Cards in tiebreak order: larger rank groups first, then rank, then suit.
    /// A wheel puts its ace last.
    pub fn tiebreak_order(&self, category: Category) -> Vec<Card> {
        let count = |r: Rank| self.rank_groups.count(r);
        let mut ordered = self.sorted_cards.clone();
        ordered.sort_by(|a, b| {
            count(b.rank())
                .cmp(&count(a.rank()))
                .then(b.rank().cmp(&a.rank()))
                .then(b.suit().cmp(&a.suit()))
        });
        if category.is_straight() && self.straight_info.is_wheel {
            ordered.rotate_left(1);
        }
        ordered
    }

    pub fn build_evaluation(&self, category: Category) -> Evaluation {
        let ordered = self.tiebreak_order(category);
        let wheel = category.is_straight() && self.straight_info.is_wheel;
        let ranks: Vec<u8> = ordered
            .iter()
            .map(|c| if wheel && c.rank() == Rank::Ace { 1 } else { c.rank().value() })
            .collect();
        let suits: Vec<u8> = ordered.iter().map(|c| c.suit().value()).collect();
        Evaluation { category, value: HandValue::from_parts(category, &ranks, &suits) }
    }
}
