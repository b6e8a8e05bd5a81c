use proptest::prelude::*;
use thirteen_water::cards::{Card, Rank, Suit};
use thirteen_water::config::ScoringConfig;
use thirteen_water::hand::{Arrangement, Hand};
use thirteen_water::settlement::{pair_score, settle, total_base_score, PlayerResult};
use thirteen_water::special::SpecialPattern;

fn full_deck() -> Vec<Card> {
    Rank::ALL.iter().flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s))).collect()
}

fn player(front: &str, middle: &str, back: &str) -> PlayerResult {
    PlayerResult::from_arrangement(Arrangement::parse(front, middle, back).unwrap())
}

#[test]
fn dragon_wins_thirteen_from_every_ordinary_opponent() {
    let dragon: Hand = "2s 3h 4d 5c 6s 7h 8d 9c 10s jh qd kc as".parse().unwrap();
    let dragon = PlayerResult::from_arrangement(Arrangement::rank_sorted(&dragon));
    assert_eq!(dragon.special(), Some(SpecialPattern::Dragon));

    let a = player("2h 3d 5s", "4h 4c 9h 9s 7c", "ks kh kd 10d 10h");
    let b = player("2c 3c 4s", "5d 5h 6d 6h 8s", "qs qh qc ad ac");
    let result = settle(&[dragon, a, b], &ScoringConfig::default()).unwrap();

    let dragon_pairs: Vec<i64> = result.pairs.iter().filter(|p| p.first == 0).map(|p| p.score).collect();
    assert_eq!(dragon_pairs, vec![13, 13]);
    assert_eq!(result.scores.iter().sum::<i64>(), 0);
}

#[test]
fn fouled_player_pays_the_winners_base_score() {
    let fouled = player("2s 2h Ac", "3d 5s 7c 9h Jd", "4s 6s 8s 10s Qs");
    assert!(fouled.is_foul());

    // Trips front (3) plus two base zones.
    let valid = player("Kd Kc Kh", "2c 3c 4h 5h 6c", "8h 10h Jh Ah 7h");
    assert!(!valid.is_foul());
    assert_eq!(total_base_score(&valid, &ScoringConfig::default()), 5);

    let result = settle(&[fouled, valid], &ScoringConfig::default()).unwrap();
    assert_eq!(result.scores, vec![-5, 5]);
}

#[test]
fn custom_bonus_table_is_used() {
    let mut config = ScoringConfig::default();
    config.zone_bonus.front_three_of_a_kind = 6;
    let valid = player("Kd Kc Kh", "2c 3c 4h 5h 6c", "8h 10h Jh Ah 7h");
    assert_eq!(pair_score(&valid, &PlayerResult::forfeit(), &config), 8);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn settlement_is_zero_sum(deck in Just(full_deck()).prop_shuffle(), seats in 2usize..=4, forfeits in prop::collection::vec(any::<bool>(), 4)) {
        let players: Vec<PlayerResult> = (0..seats)
            .map(|i| {
                let hand = Hand::try_new(deck[i * 13..(i + 1) * 13].to_vec()).unwrap();
                if forfeits[i] {
                    PlayerResult::forfeit()
                } else {
                    PlayerResult::from_arrangement(Arrangement::rank_sorted(&hand))
                }
            })
            .collect();

        let config = ScoringConfig::default();
        let result = settle(&players, &config).unwrap();
        prop_assert_eq!(result.scores.len(), seats);
        prop_assert_eq!(result.pairs.len(), seats * (seats - 1) / 2);
        prop_assert_eq!(result.scores.iter().sum::<i64>(), 0);

        for a in &players {
            for b in &players {
                prop_assert_eq!(pair_score(a, b, &config), -pair_score(b, a, &config));
            }
        }
    }
}
