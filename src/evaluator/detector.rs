use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Recognises one category in an analysed 3- or 5-card group.
///
/// Tie-break encoding is shared and lives in [`HandAnalysis::build_evaluation`].
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

macro_rules! detector {
    ($(#[$doc:meta])* $name:ident => $category:ident, |$a:ident| $test:expr) => {
        $(#[$doc])*
        pub struct $name;

        impl CategoryDetector for $name {
            fn category(&self) -> Category {
                Category::$category
            }

            fn detect(&self, $a: &HandAnalysis) -> bool {
                $test
            }
        }
    };
}

detector!(
    /// Five consecutive ranks in one suit. Five-card groups only.
    StraightFlushDetector => StraightFlush, |a| a.makes_flush() && a.makes_straight()
);
detector!(FourOfAKindDetector => FourOfAKind, |a| a.rank_groups.quad().is_some());
detector!(FullHouseDetector => FullHouse, |a| a.rank_groups.has_full_house());
detector!(
    /// Five cards of one suit. A suited front is still a high card.
    FlushDetector => Flush, |a| a.makes_flush()
);
detector!(
    /// Five consecutive ranks. Three-card runs do not count here.
    StraightDetector => Straight, |a| a.makes_straight()
);
detector!(
    ThreeOfAKindDetector => ThreeOfAKind,
    |a| a.rank_groups.trips().is_some() && !a.rank_groups.has_full_house()
);
detector!(TwoPairDetector => TwoPair, |a| a.rank_groups.pairs().len() == 2);
detector!(OnePairDetector => Pair, |a| a.rank_groups.pairs().len() == 1);
detector!(
    /// Fallback; always matches.
    HighCardDetector => HighCard, |_a| true
);

/// Checked strongest first; the first match decides the category.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analysis(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    #[test]
    fn detectors_are_listed_strongest_first() {
        let categories: Vec<Category> = DETECTORS.iter().map(|d| d.category()).collect();
        let mut expected = Category::ALL.to_vec();
        expected.reverse();
        assert_eq!(categories, expected);
    }

    #[test]
    fn test_detector_priority_straight_flush_over_flush() {
        let a = analysis("9h 8h 7h 6h 5h");
        assert!(StraightFlushDetector.detect(&a));
        assert!(FlushDetector.detect(&a));
        assert!(StraightDetector.detect(&a));
    }

    #[test]
    fn test_trips_detector_rejects_full_house() {
        let a = analysis("Js Jh Jd 9c 9s");
        assert!(FullHouseDetector.detect(&a));
        assert!(!ThreeOfAKindDetector.detect(&a));
    }

    #[test]
    fn test_three_card_front_detectors() {
        let trips = analysis("7s 7h 7d");
        assert!(ThreeOfAKindDetector.detect(&trips));
        assert!(!FullHouseDetector.detect(&trips));

        let suited_run = analysis("5h 6h 7h");
        assert!(!StraightFlushDetector.detect(&suited_run));
        assert!(!FlushDetector.detect(&suited_run));
        assert!(!StraightDetector.detect(&suited_run));
        assert!(!OnePairDetector.detect(&suited_run));
    }
}
