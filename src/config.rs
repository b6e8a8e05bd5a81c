//! Scoring tables and search weights.
//!
//! Everything tunable lives in one immutable [`ScoringConfig`] that callers
//! pass into the search and settlement functions. Every field has a default,
//! so a host may deserialize a partial table and keep the rest.

use crate::evaluator::Category;
use crate::hand::Zone;
use crate::special::SpecialPattern;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub zone_bonus: ZoneBonusTable,
    pub special_bonus: SpecialBonusTable,
    pub search: SearchWeights,
}

/// Points won per zone at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneBonusTable {
    pub base: i64,
    pub front_three_of_a_kind: i64,
    pub middle_full_house: i64,
    pub middle_four_of_a_kind: i64,
    pub middle_straight_flush: i64,
    pub back_four_of_a_kind: i64,
    pub back_straight_flush: i64,
}

impl Default for ZoneBonusTable {
    fn default() -> Self {
        Self {
            base: 1,
            front_three_of_a_kind: 3,
            middle_full_house: 2,
            middle_four_of_a_kind: 8,
            middle_straight_flush: 10,
            back_four_of_a_kind: 4,
            back_straight_flush: 5,
        }
    }
}

impl ZoneBonusTable {
    /// Points a zone of `category` is worth when it wins.
    pub fn score(&self, zone: Zone, category: Category) -> i64 {
        match (zone, category) {
            (Zone::Front, Category::ThreeOfAKind) => self.front_three_of_a_kind,
            (Zone::Middle, Category::FullHouse) => self.middle_full_house,
            (Zone::Middle, Category::FourOfAKind) => self.middle_four_of_a_kind,
            (Zone::Middle, Category::StraightFlush) => self.middle_straight_flush,
            (Zone::Back, Category::FourOfAKind) => self.back_four_of_a_kind,
            (Zone::Back, Category::StraightFlush) => self.back_straight_flush,
            _ => self.base,
        }
    }
}

/// Fixed points for whole-hand special patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialBonusTable {
    pub dragon: i64,
    pub three_flushes: i64,
    pub three_straights: i64,
    pub six_pairs_plus_one: i64,
}

impl Default for SpecialBonusTable {
    fn default() -> Self {
        Self { dragon: 13, three_flushes: 4, three_straights: 4, six_pairs_plus_one: 3 }
    }
}

impl SpecialBonusTable {
    pub fn score(&self, pattern: SpecialPattern) -> i64 {
        match pattern {
            SpecialPattern::Dragon => self.dragon,
            SpecialPattern::ThreeFlushes => self.three_flushes,
            SpecialPattern::ThreeStraights => self.three_straights,
            SpecialPattern::SixPairsPlusOne => self.six_pairs_plus_one,
        }
    }
}

/// A value per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneWeights {
    pub front: i64,
    pub middle: i64,
    pub back: i64,
}

impl ZoneWeights {
    pub fn get(&self, zone: Zone) -> i64 {
        match zone {
            Zone::Front => self.front,
            Zone::Middle => self.middle,
            Zone::Back => self.back,
        }
    }
}

/// Heuristic weights used to rank legal candidates during arrangement search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchWeights {
    /// Score of one category step (HighCard counts 1, StraightFlush 9).
    pub category_unit: i64,
    /// Multiplier on the category score of each zone.
    pub category_weight: ZoneWeights,
    /// Multiplier on the summed rank values of each zone.
    pub rank_weight: ZoneWeights,
    pub front_three_of_a_kind: i64,
    pub front_pair: i64,
    /// Subtracted when the front is only a high card.
    pub front_high_card_penalty: i64,
    pub full_house: ZoneWeights,
    pub four_of_a_kind: ZoneWeights,
    pub straight_flush: ZoneWeights,
    /// Added when all three zones are suit-uniform or all three are straights.
    pub special_shape: i64,
    /// How many arrangements a search returns.
    pub max_results: usize,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            category_unit: 100,
            category_weight: ZoneWeights { front: 2, middle: 3, back: 4 },
            rank_weight: ZoneWeights { front: 2, middle: 3, back: 4 },
            front_three_of_a_kind: 600,
            front_pair: 150,
            front_high_card_penalty: 100,
            full_house: ZoneWeights { front: 0, middle: 400, back: 200 },
            four_of_a_kind: ZoneWeights { front: 0, middle: 1600, back: 800 },
            straight_flush: ZoneWeights { front: 0, middle: 2000, back: 1000 },
            special_shape: 500,
            max_results: 5,
        }
    }
}

impl SearchWeights {
    /// Zone-specific bonus (or penalty) for holding `category` in `zone`.
    pub fn zone_bonus(&self, zone: Zone, category: Category) -> i64 {
        match (zone, category) {
            (Zone::Front, Category::ThreeOfAKind) => self.front_three_of_a_kind,
            (Zone::Front, Category::Pair) => self.front_pair,
            (Zone::Front, Category::HighCard) => -self.front_high_card_penalty,
            (_, Category::FullHouse) => self.full_house.get(zone),
            (_, Category::FourOfAKind) => self.four_of_a_kind.get(zone),
            (_, Category::StraightFlush) => self.straight_flush.get(zone),
            _ => 0,
        }
    }

    /// Category part of a zone's score.
    pub fn category_score(&self, zone: Zone, category: Category) -> i64 {
        (category.ordinal() as i64 + 1) * self.category_unit * self.category_weight.get(zone)
    }
}
