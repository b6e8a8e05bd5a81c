//! Arrangement search: find the strongest legal splits of a 13-card hand.
//!
//! Every way to pick 3 front cards and 5 middle cards is enumerated
//! (C(13,3) x C(10,5) = 72,072 candidates). Each 3- and 5-card subset is
//! evaluated once into a cache owned by the call, foul candidates are
//! dropped and the rest are ranked by a weighted heuristic.

use crate::cards::Card;
use crate::config::{ScoringConfig, SearchWeights};
use crate::evaluator::combinations::{binomial, Combinations};
use crate::evaluator::{evaluate, is_straight, is_suit_uniform, Evaluation};
use crate::hand::{Arrangement, Hand, Zone, HAND_SIZE};
use crate::rules::is_foul_evaluated;
use crate::special::{detect_special, SpecialPattern};
use std::collections::HashMap;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// No split of the hand is foul-free. `fallback` is the rank-sorted split,
    /// which callers may still choose to commit.
    #[error("no legal arrangement exists for this hand")]
    NoLegalArrangement { fallback: Box<Arrangement> },
}

/// A split together with its heuristic score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub arrangement: Arrangement,
    pub score: i64,
    /// Set when the whole hand is a special pattern and search was skipped.
    pub special: Option<SpecialPattern>,
}

/// Cards of a group as a bit set over the hand's card positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GroupKey(u16);

impl GroupKey {
    const FULL: GroupKey = GroupKey((1 << HAND_SIZE) - 1);

    fn from_positions<I: IntoIterator<Item = usize>>(positions: I) -> Self {
        GroupKey(positions.into_iter().fold(0u16, |acc, i| acc | (1 << i)))
    }

    fn without(self, other: GroupKey) -> Self {
        GroupKey(self.0 & !other.0)
    }

    fn positions(self) -> impl Iterator<Item = usize> {
        (0..HAND_SIZE).filter(move |i| self.0 & (1 << i) != 0)
    }
}

#[derive(Debug, Clone, Copy)]
struct GroupInfo {
    eval: Evaluation,
    rank_sum: i64,
    suited: bool,
    straight: bool,
}

impl GroupInfo {
    fn new(cards: &[Card]) -> Self {
        Self {
            eval: evaluate(cards),
            rank_sum: cards.iter().map(|c| c.rank().value() as i64).sum(),
            suited: is_suit_uniform(cards),
            straight: is_straight(cards),
        }
    }
}

/// Per-call evaluation cache: every 3- and 5-card subset of one hand.
struct GroupCache<'a> {
    cards: &'a [Card],
    entries: HashMap<GroupKey, GroupInfo>,
}

impl<'a> GroupCache<'a> {
    fn build(cards: &'a [Card]) -> Self {
        let mut entries =
            HashMap::with_capacity(binomial(HAND_SIZE, 3) + binomial(HAND_SIZE, 5));
        for combo in Combinations::<3>::new(HAND_SIZE) {
            let group: Vec<Card> = combo.iter().map(|&i| cards[i]).collect();
            entries.insert(GroupKey::from_positions(combo), GroupInfo::new(&group));
        }
        for combo in Combinations::<5>::new(HAND_SIZE) {
            let group: Vec<Card> = combo.iter().map(|&i| cards[i]).collect();
            entries.insert(GroupKey::from_positions(combo), GroupInfo::new(&group));
        }
        Self { cards, entries }
    }

    /// Cached info for a 3- or 5-card key.
    ///
    /// Panics on any other key; `build` fills in every 3- and 5-card subset.
    fn get(&self, key: GroupKey) -> &GroupInfo {
        &self.entries[&key]
    }

    fn cards_of(&self, key: GroupKey) -> Vec<Card> {
        key.positions().map(|i| self.cards[i]).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scored {
    score: i64,
    front: GroupKey,
    middle: GroupKey,
}

fn score_groups(weights: &SearchWeights, zones: [(Zone, &GroupInfo); 3]) -> i64 {
    let mut total = 0;
    for (zone, info) in zones {
        let category = info.eval.category;
        total += weights.category_score(zone, category);
        total += weights.zone_bonus(zone, category);
        total += weights.rank_weight.get(zone) * info.rank_sum;
    }
    if zones.iter().all(|(_, i)| i.suited) || zones.iter().all(|(_, i)| i.straight) {
        total += weights.special_shape;
    }
    total
}

/// Heuristic quality of an arrangement, as used to rank search results.
pub fn score_arrangement(arr: &Arrangement, weights: &SearchWeights) -> i64 {
    let front = GroupInfo::new(arr.front().as_slice());
    let middle = GroupInfo::new(arr.middle().as_slice());
    let back = GroupInfo::new(arr.back().as_slice());
    score_groups(weights, [(Zone::Front, &front), (Zone::Middle, &middle), (Zone::Back, &back)])
}

/// Score every legal middle/back completion of one front.
fn scan_front(front_idx: [usize; 3], cache: &GroupCache<'_>, weights: &SearchWeights) -> Vec<Scored> {
    let front = GroupKey::from_positions(front_idx);
    let rest: Vec<usize> = GroupKey::FULL.without(front).positions().collect();
    let f = cache.get(front);

    Combinations::<5>::new(rest.len())
        .filter_map(|middle_idx| {
            let middle = GroupKey::from_positions(middle_idx.iter().map(|&i| rest[i]));
            let back = GroupKey::FULL.without(front).without(middle);
            let (m, b) = (cache.get(middle), cache.get(back));
            if is_foul_evaluated(&f.eval, &m.eval, &b.eval) {
                return None;
            }
            let score =
                score_groups(weights, [(Zone::Front, f), (Zone::Middle, m), (Zone::Back, b)]);
            Some(Scored { score, front, middle })
        })
        .collect()
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn scan_sequential(fronts: &[[usize; 3]], cache: &GroupCache<'_>, weights: &SearchWeights) -> Vec<Scored> {
    fronts.iter().flat_map(|f| scan_front(*f, cache, weights)).collect()
}

/// Same output, in the same order, as `scan_sequential`.
#[cfg(feature = "parallel")]
fn scan_all(fronts: &[[usize; 3]], cache: &GroupCache<'_>, weights: &SearchWeights) -> Vec<Scored> {
    use rayon::prelude::*;
    fronts.par_iter().flat_map_iter(|f| scan_front(*f, cache, weights)).collect()
}

#[cfg(not(feature = "parallel"))]
fn scan_all(fronts: &[[usize; 3]], cache: &GroupCache<'_>, weights: &SearchWeights) -> Vec<Scored> {
    scan_sequential(fronts, cache, weights)
}

/// Rank legal splits of `hand`, best first, keeping their scores.
///
/// A special hand short-circuits the search and yields its single split.
pub fn ranked_candidates(hand: &Hand, config: &ScoringConfig) -> Result<Vec<Candidate>, SearchError> {
    let weights = &config.search;

    if let Some(special) = detect_special(hand) {
        log::debug!("special pattern {}, skipping search", special.pattern);
        let score = score_arrangement(&special.arrangement, weights);
        return Ok(vec![Candidate {
            arrangement: special.arrangement,
            score,
            special: Some(special.pattern),
        }]);
    }

    let cache = GroupCache::build(hand.as_slice());
    let fronts: Vec<[usize; 3]> = Combinations::<3>::new(HAND_SIZE).collect();
    let mut scored = scan_all(&fronts, &cache, weights);
    log::debug!(
        "{} legal of {} candidate splits",
        scored.len(),
        binomial(HAND_SIZE, 3) * binomial(HAND_SIZE - 3, 5)
    );

    if scored.is_empty() {
        log::warn!("no legal arrangement found, offering rank-sorted split");
        return Err(SearchError::NoLegalArrangement {
            fallback: Box::new(Arrangement::rank_sorted(hand)),
        });
    }

    // Stable: ties keep enumeration order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    // Each (front, middle) pair is enumerated once, so the candidates
    // already have distinct card-to-zone assignments.
    let best = scored
        .into_iter()
        .take(weights.max_results)
        .map(|s| {
            let back = GroupKey::FULL.without(s.front).without(s.middle);
            let mut split = cache.cards_of(s.front);
            split.extend(cache.cards_of(s.middle));
            split.extend(cache.cards_of(back));
            Candidate {
                arrangement: Arrangement::from_slice_unchecked(&split),
                score: s.score,
                special: None,
            }
        })
        .collect();
    Ok(best)
}

/// Up to `max_results` best splits of `hand`, best first.
///
/// ```
/// use thirteen_water::config::ScoringConfig;
/// use thirteen_water::hand::Hand;
/// use thirteen_water::rules::is_foul;
/// use thirteen_water::search::best_arrangements;
///
/// let hand: Hand = "As Ad Kh Kc 7s 7d 7h 2c 5d 9s Jh Qc 3s".parse().unwrap();
/// let best = best_arrangements(&hand, &ScoringConfig::default()).unwrap();
/// assert_eq!(best.len(), 5);
/// assert!(!is_foul(&best[0]));
/// ```
pub fn best_arrangements(hand: &Hand, config: &ScoringConfig) -> Result<Vec<Arrangement>, SearchError> {
    Ok(ranked_candidates(hand, config)?.into_iter().map(|c| c.arrangement).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Category;
    use crate::rules::is_foul;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn group_keys_partition_the_hand() {
        let front = GroupKey::from_positions([0, 4, 12]);
        let rest: Vec<usize> = GroupKey::FULL.without(front).positions().collect();
        assert_eq!(rest.len(), 10);
        assert!(!rest.contains(&4));
        assert_eq!(front.positions().collect::<Vec<_>>(), vec![0, 4, 12]);
    }

    #[test]
    fn cache_covers_all_subsets() {
        let h = hand("As Ad Kh Kc 7s 7d 7h 2c 5d 9s Jh Qc 3s");
        let cache = GroupCache::build(h.as_slice());
        assert_eq!(cache.entries.len(), 286 + 1287);
        let trips = cache.get(GroupKey::from_positions([4, 5, 6]));
        assert_eq!(trips.eval.category, Category::ThreeOfAKind);
    }

    #[test]
    fn results_are_legal_distinct_and_sorted() {
        let h = hand("As Ad Kh Kc 7s 7d 7h 2c 5d 9s Jh Qc 3s");
        let cands = ranked_candidates(&h, &ScoringConfig::default()).unwrap();
        assert_eq!(cands.len(), 5);
        assert!(cands.windows(2).all(|w| w[0].score >= w[1].score));
        for (i, c) in cands.iter().enumerate() {
            assert!(!is_foul(&c.arrangement));
            assert_eq!(c.score, score_arrangement(&c.arrangement, &ScoringConfig::default().search));
            for other in &cands[i + 1..] {
                assert!(!c.arrangement.same_assignment(&other.arrangement));
            }
        }
    }

    #[test]
    fn special_hand_short_circuits() {
        let h = hand("2s 3h 4d 5c 6s 7h 8d 9c 10s jh qd kc as");
        let cands = ranked_candidates(&h, &ScoringConfig::default()).unwrap();
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].special, Some(SpecialPattern::Dragon));
    }

    #[test]
    fn max_results_is_respected() {
        let mut config = ScoringConfig::default();
        config.search.max_results = 2;
        let h = hand("As Ad Kh Kc 7s 7d 7h 2c 5d 9s Jh Qc 3s");
        assert_eq!(best_arrangements(&h, &config).unwrap().len(), 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_scan_matches_sequential() {
        let h = hand("9s 9h 9d 9c 2s 5h 7d Jc Qs Kh 3d 4c 8h");
        let cache = GroupCache::build(h.as_slice());
        let fronts: Vec<[usize; 3]> = Combinations::<3>::new(HAND_SIZE).collect();
        let weights = ScoringConfig::default().search;
        let sequential = scan_sequential(&fronts, &cache, &weights);
        assert!(!sequential.is_empty());
        assert_eq!(scan_all(&fronts, &cache, &weights), sequential);
    }

    #[test]
    fn every_split_is_enumerated_once() {
        let h = hand("As Ad Kh Kc 7s 7d 7h 2c 5d 9s Jh Qc 3s");
        let cache = GroupCache::build(h.as_slice());
        let fronts: Vec<[usize; 3]> = Combinations::<3>::new(HAND_SIZE).collect();
        let scored = scan_all(&fronts, &cache, &ScoringConfig::default().search);
        let keys: std::collections::HashSet<(GroupKey, GroupKey)> =
            scored.iter().map(|s| (s.front, s.middle)).collect();
        assert_eq!(keys.len(), scored.len());
        assert!(scored.len() <= 72_072);
    }

    #[test]
    fn quads_land_in_back_or_middle() {
        let h = hand("9s 9h 9d 9c 2s 5h 7d Jc Qs Kh 3d 4c 8h");
        let best = best_arrangements(&h, &ScoringConfig::default()).unwrap();
        let top = &best[0];
        let quads_zone = [Zone::Middle, Zone::Back]
            .into_iter()
            .find(|&z| crate::evaluator::classify(top.zone(z).as_slice()) == Category::FourOfAKind);
        assert!(quads_zone.is_some());
    }
}
