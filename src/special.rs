//! Whole-hand special patterns.
//!
//! Checked in priority order, first match wins: Dragon, SixPairsPlusOne,
//! ThreeFlushes, ThreeStraights.

use crate::cards::Card;
use crate::evaluator::combinations::Combinations;
use crate::evaluator::rank_groups::RankGroups;
use crate::evaluator::{classify, is_straight, is_suit_uniform, Category};
use crate::hand::{Arrangement, Hand, HAND_SIZE};
use crate::rules::is_foul;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bonus patterns that override normal showdown scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialPattern {
    Dragon,
    SixPairsPlusOne,
    ThreeFlushes,
    ThreeStraights,
}

impl fmt::Display for SpecialPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecialPattern::Dragon => "dragon",
            SpecialPattern::SixPairsPlusOne => "six pairs plus one",
            SpecialPattern::ThreeFlushes => "three flushes",
            SpecialPattern::ThreeStraights => "three straights",
        };
        f.write_str(name)
    }
}

/// A detected pattern together with the split that shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialHand {
    pub pattern: SpecialPattern,
    pub arrangement: Arrangement,
}

/// Look for a special pattern in a 13-card hand.
///
/// ```
/// use thirteen_water::hand::Hand;
/// use thirteen_water::special::{detect_special, SpecialPattern};
///
/// let hand: Hand = "2s 3h 4d 5c 6s 7h 8d 9c 10s jh qd kc as".parse().unwrap();
/// let special = detect_special(&hand).unwrap();
/// assert_eq!(special.pattern, SpecialPattern::Dragon);
/// ```
pub fn detect_special(hand: &Hand) -> Option<SpecialHand> {
    let groups = RankGroups::from_cards(hand.as_slice());

    if groups.distinct() == HAND_SIZE {
        return Some(SpecialHand {
            pattern: SpecialPattern::Dragon,
            arrangement: Arrangement::rank_sorted(hand),
        });
    }

    if groups.with_count(2) == 6 && groups.with_count(1) == 1 {
        return Some(SpecialHand {
            pattern: SpecialPattern::SixPairsPlusOne,
            arrangement: Arrangement::rank_sorted(hand),
        });
    }

    if let Some(arrangement) = find_uniform_split(hand, is_suit_uniform) {
        return Some(SpecialHand { pattern: SpecialPattern::ThreeFlushes, arrangement });
    }

    if let Some(arrangement) = find_uniform_split(hand, is_straight) {
        return Some(SpecialHand { pattern: SpecialPattern::ThreeStraights, arrangement });
    }

    None
}

/// A five-card zone that already scores as a top-tier natural hand
/// keeps the hand from counting as a special.
fn disqualifies(zone: &[Card]) -> bool {
    matches!(classify(zone), Category::FourOfAKind | Category::StraightFlush)
}

/// Find a 3/5/5 split whose every zone satisfies `shape`.
///
/// A legal (non-foul) qualifying split is preferred; otherwise the first
/// qualifying split found is returned.
fn find_uniform_split(hand: &Hand, shape: fn(&[Card]) -> bool) -> Option<Arrangement> {
    let cards = hand.as_slice();
    let mut fallback: Option<Arrangement> = None;

    for front_idx in Combinations::<3>::new(HAND_SIZE) {
        let front: Vec<Card> = front_idx.iter().map(|&i| cards[i]).collect();
        if !shape(&front) {
            continue;
        }
        let rest: Vec<Card> =
            (0..HAND_SIZE).filter(|i| !front_idx.contains(i)).map(|i| cards[i]).collect();

        for middle_idx in Combinations::<5>::new(rest.len()) {
            let middle: Vec<Card> = middle_idx.iter().map(|&i| rest[i]).collect();
            if !shape(&middle) {
                continue;
            }
            let back: Vec<Card> = (0..rest.len())
                .filter(|i| !middle_idx.contains(i))
                .map(|i| rest[i])
                .collect();
            if !shape(&back) || disqualifies(&middle) || disqualifies(&back) {
                continue;
            }

            let mut split = front.clone();
            split.extend(&middle);
            split.extend(&back);
            let arrangement = Arrangement::from_slice_unchecked(&split);
            if !is_foul(&arrangement) {
                return Some(arrangement);
            }
            fallback.get_or_insert(arrangement);
        }
    }

    fallback
}
