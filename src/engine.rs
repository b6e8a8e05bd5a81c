// Plain-data boundary for host applications. Rooms, bots and UIs hand the
// engine card strings and get card strings and signed scores back, without
// depending on the internal hand types.

use crate::cards::Card;
use crate::config::ScoringConfig;
use crate::hand::{Arrangement, Hand, HandError};
use crate::search::{best_arrangements, SearchError};
use crate::settlement::{settle, PlayerResult, SettlementError};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] HandError),
    #[error("invalid table: {0}")]
    InvalidTable(#[from] SettlementError),
    /// Every split of the hand fouls; `fallback` is the rank-sorted split.
    #[error("no legal arrangement exists for this hand")]
    NoLegalArrangement { fallback: ArrangementView },
}

impl From<SearchError> for EngineError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::NoLegalArrangement { fallback } => {
                EngineError::NoLegalArrangement { fallback: ArrangementView::from(&*fallback) }
            }
        }
    }
}

/// A split as it travels over the wire: `{ "front": [...], "middle": [...], "back": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrangementView {
    pub front: Vec<Card>,
    pub middle: Vec<Card>,
    pub back: Vec<Card>,
}

impl From<&Arrangement> for ArrangementView {
    fn from(arr: &Arrangement) -> Self {
        Self {
            front: arr.front().as_slice().to_vec(),
            middle: arr.middle().as_slice().to_vec(),
            back: arr.back().as_slice().to_vec(),
        }
    }
}

impl TryFrom<ArrangementView> for Arrangement {
    type Error = HandError;

    fn try_from(view: ArrangementView) -> Result<Self, Self::Error> {
        Arrangement::try_new(view.front, view.middle, view.back)
    }
}

/// One seat's input to settlement.
///
/// Serialized with a `kind` tag: `{"kind": "committed", "front": [...], ...}`
/// or `{"kind": "forfeit"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerRecord {
    Committed {
        front: Vec<String>,
        middle: Vec<String>,
        back: Vec<String>,
        /// The 13 cards originally dealt; when present the split must use exactly these.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dealt: Option<Vec<String>>,
    },
    /// Out of time or gave up; settled as a foul.
    Forfeit,
}

fn parse_card_strings(cards: &[String]) -> Result<Vec<Card>, HandError> {
    cards
        .iter()
        .map(|s| s.parse::<Card>().map_err(|e| HandError::CardParse(e.to_string())))
        .collect()
}

impl PlayerRecord {
    fn to_result(&self) -> Result<PlayerResult, HandError> {
        match self {
            PlayerRecord::Forfeit => Ok(PlayerResult::forfeit()),
            PlayerRecord::Committed { front, middle, back, dealt } => {
                let (front, middle, back) =
                    (parse_card_strings(front)?, parse_card_strings(middle)?, parse_card_strings(back)?);
                let arrangement = match dealt {
                    Some(dealt) => {
                        let hand = Hand::try_new(parse_card_strings(dealt)?)?;
                        Arrangement::try_from_hand(&hand, front, middle, back)?
                    }
                    None => Arrangement::try_new(front, middle, back)?,
                };
                Ok(PlayerResult::from_arrangement(arrangement))
            }
        }
    }
}

/// Operations a host application drives.
pub trait RulesEngine {
    /// Up to `max_results` suggested splits for 13 dealt cards, best first.
    fn arrange(&self, cards: &[String]) -> Result<Vec<ArrangementView>, EngineError>;

    /// Signed net score per seat, in input order.
    fn settle(&self, records: &[PlayerRecord]) -> Result<Vec<i64>, EngineError>;
}

/// Stateless engine holding only its scoring configuration.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: ScoringConfig,
}

impl Engine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl RulesEngine for Engine {
    fn arrange(&self, cards: &[String]) -> Result<Vec<ArrangementView>, EngineError> {
        let hand = Hand::try_new(parse_card_strings(cards)?)?;
        let best = best_arrangements(&hand, &self.config)?;
        Ok(best.iter().map(ArrangementView::from).collect())
    }

    fn settle(&self, records: &[PlayerRecord]) -> Result<Vec<i64>, EngineError> {
        let results = records.iter().map(PlayerRecord::to_result).collect::<Result<Vec<_>, _>>()?;
        Ok(settle(&results, &self.config)?.scores)
    }
}
