pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact, comparable group strength. Higher is better.
/// Encodes category, ranked tiebreakers and finally suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

/// Hand category from weakest to strongest.
///
/// A 3-card group only ever reaches `HighCard`, `Pair` or `ThreeOfAKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn is_straight(self) -> bool {
        matches!(self, Category::Straight | Category::StraightFlush)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluation result. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    pub category: Category,
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl HandValue {
    const CAT_SHIFT: u32 = 30;
    const RANK_STRIDE: u32 = 4;
    const SUIT_STRIDE: u32 = 2;
    const SUIT_TOP: u32 = 8;

    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category with up to five positional ranks and suits.
    ///
    /// Layout (most significant -> least):
    /// `[ category (4) | r0..r4 (4 each) | s0..s4 (2 each) ]`.
    /// Missing positions of a 3-card group stay zero, below any real rank.
    pub(crate) fn from_parts(category: Category, ranks: &[u8], suits: &[u8]) -> Self {
        debug_assert!(ranks.len() <= 5 && ranks.len() == suits.len());
        let mut v: u64 = (category as u64) << Self::CAT_SHIFT;
        for (i, r) in ranks.iter().enumerate() {
            v |= (*r as u64) << (Self::CAT_SHIFT - Self::RANK_STRIDE * (i as u32 + 1));
        }
        for (i, s) in suits.iter().enumerate() {
            v |= (*s as u64) << (Self::SUIT_TOP - Self::SUIT_STRIDE * i as u32);
        }
        HandValue(v)
    }
}

/// Evaluate a group of 3 or 5 cards; detects category and encodes tie-breakers.
///
/// ```
/// use thirteen_water::cards::parse_cards;
/// use thirteen_water::evaluator::{evaluate, Category};
///
/// let wheel = evaluate(&parse_cards("As 2d 3h 4s 5c").unwrap());
/// let six_high = evaluate(&parse_cards("2d 3h 4s 5c 6d").unwrap());
/// assert_eq!(wheel.category, Category::Straight);
/// assert!(six_high > wheel);
/// ```
pub fn evaluate(cards: &[Card]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    debug_assert!(cards.len() == 3 || cards.len() == 5, "groups hold 3 or 5 cards");
    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return analysis.build_evaluation(detector.category());
        }
    }

    unreachable!("HighCard detector should always match")
}

/// Classify a group of 3 or 5 cards.
pub fn classify(cards: &[Card]) -> Category {
    evaluate(cards).category
}

/// Total order over groups: category, defining ranks, kickers, then suits.
///
/// Never returns `Equal` for two distinct groups drawn from one deck.
///
/// ```
/// use thirteen_water::cards::parse_cards;
/// use thirteen_water::evaluator::compare;
/// use std::cmp::Ordering;
///
/// let a = parse_cards("Ks Kh 9d").unwrap();
/// let b = parse_cards("Kd Kc 9s").unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Greater);
/// ```
pub fn compare(a: &[Card], b: &[Card]) -> Ordering {
    evaluate(a).cmp(&evaluate(b))
}

/// All cards share one suit.
pub fn is_suit_uniform(cards: &[Card]) -> bool {
    suit_info::SuitInfo::detect(cards).is_flush
}

/// Ranks form a straight: consecutive and distinct, ace playing high or low.
/// Applies to 3-card groups too (A-2-3 and Q-K-A included).
pub fn is_straight(cards: &[Card]) -> bool {
    let ranks: Vec<_> = cards.iter().map(|c| c.rank()).collect();
    straight_info::StraightInfo::detect(&ranks).is_straight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).expect("valid cards")
    }

    #[test]
    fn evaluate_five_categories() {
        let cases = [
            ("As Ks Qs Js 10s", Category::StraightFlush),
            ("Kc Kd Kh Ks 2s", Category::FourOfAKind),
            ("10c 10d 10h 2s 2h", Category::FullHouse),
            ("Ah 9h 7h 3h 2h", Category::Flush),
            ("Ac 2d 3h 4s 5c", Category::Straight),
            ("Qc Qd Qh 9s 2c", Category::ThreeOfAKind),
            ("Jc Jd 9c 9h 2s", Category::TwoPair),
            ("Ah Ad 10s 9c 2d", Category::Pair),
            ("Ah Kd 7s 5c 2d", Category::HighCard),
        ];
        for (hand, expected) in cases {
            assert_eq!(classify(&cards(hand)), expected, "{hand}");
        }
    }

    #[test]
    fn three_card_groups_never_make_straights_or_flushes() {
        assert_eq!(classify(&cards("Qs Ks As")), Category::HighCard);
        assert_eq!(classify(&cards("2h 3h 4h")), Category::HighCard);
        assert_eq!(classify(&cards("2h 2d 4h")), Category::Pair);
        assert_eq!(classify(&cards("2h 2d 2s")), Category::ThreeOfAKind);
    }

    #[test]
    fn broadway_is_top_and_wheel_is_bottom() {
        let broadway = evaluate(&cards("As Kd Qh Jc 10s"));
        let king_high = evaluate(&cards("Ks Qd Jh 10c 9s"));
        let six_high = evaluate(&cards("6s 5d 4h 3c 2s"));
        let wheel = evaluate(&cards("As 5d 4h 3c 2s"));
        assert!(broadway > king_high);
        assert!(king_high > six_high);
        assert!(six_high > wheel);

        let sf_wheel = evaluate(&cards("Ah 2h 3h 4h 5h"));
        let sf_six = evaluate(&cards("2d 3d 4d 5d 6d"));
        assert_eq!(sf_wheel.category, Category::StraightFlush);
        assert!(sf_six > sf_wheel);
    }

    #[test]
    fn suits_break_identical_rank_multisets() {
        let spade_high = cards("As Kd 7s 5c 2d");
        let heart_high = cards("Ah Kd 7s 5c 2d");
        assert_eq!(compare(&spade_high, &heart_high), Ordering::Greater);
        assert_eq!(compare(&heart_high, &spade_high), Ordering::Less);
        assert_eq!(compare(&spade_high, &spade_high), Ordering::Equal);
    }

    #[test]
    fn full_house_orders_by_triple_then_pair() {
        let a = evaluate(&cards("3c 3d 3h As Ah"));
        let b = evaluate(&cards("4c 4d 4h 2s 2h"));
        assert!(b > a);
    }

    #[test]
    fn two_pair_orders_high_low_kicker() {
        let a = evaluate(&cards("Kc Kd 9c 9h 2s"));
        let b = evaluate(&cards("Ks Kh 2c 2h As"));
        assert!(a > b);
        let c = evaluate(&cards("Kc Kd 9c 9h 3s"));
        assert!(c > a);
    }

    #[test]
    fn front_pair_compares_against_middle_pair() {
        // Same pair and kicker: the five-card group still ranks higher.
        let front = cards("Qs Qh 9d");
        let middle = cards("Qc Qd 9s 3h 2c");
        assert_eq!(compare(&front, &middle), Ordering::Less);

        let front = cards("Ks Kh 2d");
        assert_eq!(compare(&front, &middle), Ordering::Greater);
    }

    #[test]
    fn predicates_cover_three_card_straights() {
        assert!(is_straight(&cards("As 2d 3h")));
        assert!(is_straight(&cards("Qs Kd Ah")));
        assert!(is_straight(&cards("7s 8d 9h")));
        assert!(!is_straight(&cards("Ks Ad 2h")));
        assert!(is_suit_uniform(&cards("2h 9h Kh")));
        assert!(!is_suit_uniform(&cards("2h 9h Kd")));
    }

    #[test]
    fn value_layout_keeps_category_on_top() {
        let low_flush = HandValue::from_parts(Category::Flush, &[7, 5, 4, 3, 2], &[0; 5]);
        let best_straight = HandValue::from_parts(Category::Straight, &[14, 13, 12, 11, 10], &[3; 5]);
        assert!(low_flush > best_straight);
    }
}
