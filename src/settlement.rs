//! Showdown settlement: pairwise, zero-sum score deltas for a table.

use crate::cards::Card;
use crate::config::ScoringConfig;
use crate::evaluator::{classify, compare};
use crate::hand::{Arrangement, Zone};
use crate::rules::is_foul;
use crate::special::{detect_special, SpecialPattern};
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettlementError {
    #[error("settlement needs at least two players, got {0}")]
    TooFewPlayers(usize),
    #[error("card {card} is held by players {first} and {second}")]
    SharedCard { card: Card, first: usize, second: usize },
}

/// One player's final state at showdown.
///
/// A player that did not fold or forfeit always carries an arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    arrangement: Option<Arrangement>,
    foul: bool,
    special: Option<SpecialPattern>,
}

impl PlayerResult {
    /// Derive the special and foul flags from a committed split.
    ///
    /// A special hand is scored by its fixed bonus and never counts as fouled.
    pub fn from_arrangement(arrangement: Arrangement) -> Self {
        let special = detect_special(&arrangement.to_hand()).map(|s| s.pattern);
        let foul = special.is_none() && is_foul(&arrangement);
        Self { arrangement: Some(arrangement), foul, special }
    }

    /// A player who ran out of time or gave up: settled as fouled.
    pub fn forfeit() -> Self {
        Self { arrangement: None, foul: true, special: None }
    }

    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.arrangement.as_ref()
    }

    pub fn is_foul(&self) -> bool {
        self.foul
    }

    pub fn special(&self) -> Option<SpecialPattern> {
        self.special
    }
}

/// Net result of one unordered pair, from `first`'s point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairOutcome {
    pub first: usize,
    pub second: usize,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Signed net score per player, in input order. Always sums to zero.
    pub scores: Vec<i64>,
    pub pairs: Vec<PairOutcome>,
}

/// What a player's hand is worth when it wins outright: the special bonus,
/// or the sum of its three zone bonuses.
pub fn total_base_score(player: &PlayerResult, config: &ScoringConfig) -> i64 {
    if let Some(pattern) = player.special {
        return config.special_bonus.score(pattern);
    }
    match &player.arrangement {
        Some(arr) => Zone::ALL
            .iter()
            .map(|&z| config.zone_bonus.score(z, classify(arr.zone(z).as_slice())))
            .sum(),
        None => 0,
    }
}

/// Score of `a` against `b`; `b` receives the negation.
pub fn pair_score(a: &PlayerResult, b: &PlayerResult, config: &ScoringConfig) -> i64 {
    match (a.foul, b.foul) {
        (true, true) => return 0,
        (true, false) => return -total_base_score(b, config),
        (false, true) => return total_base_score(a, config),
        (false, false) => {}
    }

    match (a.special, b.special) {
        (Some(pa), Some(pb)) => {
            return config.special_bonus.score(pa) - config.special_bonus.score(pb)
        }
        (Some(pa), None) => return config.special_bonus.score(pa),
        (None, Some(pb)) => return -config.special_bonus.score(pb),
        (None, None) => {}
    }

    let (Some(arr_a), Some(arr_b)) = (&a.arrangement, &b.arrangement) else {
        return 0;
    };

    Zone::ALL
        .iter()
        .map(|&zone| {
            let (za, zb) = (arr_a.zone(zone).as_slice(), arr_b.zone(zone).as_slice());
            match compare(za, zb) {
                Ordering::Greater => config.zone_bonus.score(zone, classify(za)),
                Ordering::Less => -config.zone_bonus.score(zone, classify(zb)),
                Ordering::Equal => 0,
            }
        })
        .sum()
}

fn first_shared_card(players: &[PlayerResult]) -> Option<SettlementError> {
    let mut owner: HashMap<Card, usize> = HashMap::new();
    for (idx, player) in players.iter().enumerate() {
        let Some(arr) = &player.arrangement else { continue };
        for card in arr.cards() {
            if let Some(&first) = owner.get(&card) {
                return Some(SettlementError::SharedCard { card, first, second: idx });
            }
            owner.insert(card, idx);
        }
    }
    None
}

/// Settle a table: every unordered pair is scored once and applied
/// symmetrically, so the returned scores always sum to zero.
///
/// ```
/// use thirteen_water::config::ScoringConfig;
/// use thirteen_water::hand::Arrangement;
/// use thirteen_water::settlement::{settle, PlayerResult};
///
/// let winner = Arrangement::parse("Qs Qh Qd", "2c 3d 4h 5s 6c", "8h 9h jh kh 2h").unwrap();
/// let players = [PlayerResult::forfeit(), PlayerResult::from_arrangement(winner)];
/// let result = settle(&players, &ScoringConfig::default()).unwrap();
/// assert_eq!(result.scores, vec![-5, 5]);
/// ```
pub fn settle(players: &[PlayerResult], config: &ScoringConfig) -> Result<Settlement, SettlementError> {
    if players.len() < 2 {
        return Err(SettlementError::TooFewPlayers(players.len()));
    }
    if let Some(err) = first_shared_card(players) {
        return Err(err);
    }

    let mut scores = vec![0i64; players.len()];
    let mut pairs = Vec::with_capacity(players.len() * (players.len() - 1) / 2);
    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            let score = pair_score(&players[i], &players[j], config);
            log::trace!("pair ({i}, {j}) settles at {score}");
            scores[i] += score;
            scores[j] -= score;
            pairs.push(PairOutcome { first: i, second: j, score });
        }
    }

    log::debug!("settled {} players: {:?}", players.len(), scores);
    Ok(Settlement { scores, pairs })
}
