//! thirteen-water: rules engine for Thirteen Water (13-card Chinese poker)
//!
//! Goals:
//! - Strict, total ordering of 3- and 5-card groups
//! - Foul detection, special-pattern detection and exhaustive arrangement search
//! - Zero-sum settlement of a table at showdown
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: suggest a split and settle a table
//! ```
//! use thirteen_water::config::ScoringConfig;
//! use thirteen_water::hand::Hand;
//! use thirteen_water::rules::is_foul;
//! use thirteen_water::search::best_arrangements;
//! use thirteen_water::settlement::{settle, PlayerResult};
//!
//! let config = ScoringConfig::default();
//! let hand: Hand = "As Ad Kh Kc 7s 7d 7h 2c 5d 9s Jh Qc 3s".parse().unwrap();
//! let best = best_arrangements(&hand, &config).unwrap();
//! assert!(!is_foul(&best[0]));
//!
//! let table = [PlayerResult::from_arrangement(best[0].clone()), PlayerResult::forfeit()];
//! let result = settle(&table, &config).unwrap();
//! assert_eq!(result.scores.iter().sum::<i64>(), 0);
//! assert!(result.scores[0] > 0);
//! ```
//!
//! Hosts that speak card strings (`"ace_of_spades"`) should go through
//! [`engine::Engine`].

pub mod cards;
pub mod config;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod rules;
pub mod search;
pub mod settlement;
pub mod special;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
