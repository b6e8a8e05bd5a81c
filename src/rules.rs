//! Arrangement legality ("foul" detection).
//!
//! Each zone must be at least as strong as the one before it. Only adjacent
//! zones are checked: front against middle, middle against back.

use crate::evaluator::{evaluate, Category, Evaluation};
use crate::hand::{Arrangement, Zone};
use core::cmp::Ordering;

/// Strength scale used only for cross-zone legality.
///
/// The front uses HighCard=1, Pair=2, ThreeOfAKind=4; middle and back use
/// HighCard=1 through StraightFlush=9.
pub fn zone_rank(zone: Zone, category: Category) -> u8 {
    match (zone, category) {
        (Zone::Front, Category::HighCard) => 1,
        (Zone::Front, Category::Pair) => 2,
        (Zone::Front, Category::ThreeOfAKind) => 4,
        (_, c) => c.ordinal() + 1,
    }
}

/// True when the arrangement breaks the front <= middle <= back ladder.
///
/// ```
/// use thirteen_water::hand::Arrangement;
/// use thirteen_water::rules::is_foul;
///
/// let foul = Arrangement::parse("2s 2h Ac", "3d 5s 7c 9h jd", "4s 6s 8s 10s qs").unwrap();
/// assert!(is_foul(&foul));
/// ```
pub fn is_foul(arr: &Arrangement) -> bool {
    let front = evaluate(arr.front().as_slice());
    let middle = evaluate(arr.middle().as_slice());
    let back = evaluate(arr.back().as_slice());
    is_foul_evaluated(&front, &middle, &back)
}

/// Foul check over already-evaluated zones.
pub(crate) fn is_foul_evaluated(front: &Evaluation, middle: &Evaluation, back: &Evaluation) -> bool {
    breaks_ladder(Zone::Front, front, Zone::Middle, middle)
        || breaks_ladder(Zone::Middle, middle, Zone::Back, back)
}

fn breaks_ladder(lower: Zone, lo: &Evaluation, upper: Zone, hi: &Evaluation) -> bool {
    match zone_rank(lower, lo.category).cmp(&zone_rank(upper, hi.category)) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => lo.cmp(hi) == Ordering::Greater,
    }
}
