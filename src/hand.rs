use crate::cards::{parse_cards, Card};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 13;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly {expected} cards, got {got}")]
    CardCount { expected: usize, got: usize },
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("a card group holds 3 or 5 cards, got {0}")]
    GroupSize(usize),
    #[error("{zone} holds {expected} cards, got {got}")]
    ZoneSize { zone: Zone, expected: usize, got: usize },
    #[error("card {0} was not dealt in this hand")]
    NotDealt(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// One of the three rows of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Front,
    Middle,
    Back,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Front, Zone::Middle, Zone::Back];

    /// Number of cards the zone holds.
    pub const fn size(self) -> usize {
        match self {
            Zone::Front => 3,
            Zone::Middle | Zone::Back => 5,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Zone::Front => "front",
            Zone::Middle => "middle",
            Zone::Back => "back",
        };
        f.write_str(name)
    }
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}

/// The 13 distinct cards dealt to one player.
///
/// ```
/// use thirteen_water::hand::Hand;
///
/// let hand: Hand = "As Ks Qs Js 10s 9h 8h 7h 6h 5h 4d 3d 2d".parse().unwrap();
/// assert_eq!(hand.as_slice().len(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() != HAND_SIZE {
            return Err(HandError::CardCount { expected: HAND_SIZE, got: cards.len() });
        }
        if let Some(dup) = first_duplicate(&cards) {
            return Err(HandError::DuplicateCard(dup));
        }
        Ok(Self { cards })
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Cards sorted by rank ascending (suit breaks ties).
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort();
        cards
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(cards)
    }
}

/// An unordered group of 3 or 5 distinct cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct CardGroup {
    cards: Vec<Card>,
}

impl CardGroup {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() != 3 && cards.len() != 5 {
            return Err(HandError::GroupSize(cards.len()));
        }
        if let Some(dup) = first_duplicate(&cards) {
            return Err(HandError::DuplicateCard(dup));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<Vec<Card>> for CardGroup {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        CardGroup::try_new(cards)
    }
}

impl From<CardGroup> for Vec<Card> {
    fn from(group: CardGroup) -> Self {
        group.cards
    }
}

impl FromStr for CardGroup {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        CardGroup::try_new(cards)
    }
}

/// A committed split of 13 cards into front (3), middle (5) and back (5).
///
/// ```
/// use thirteen_water::hand::Arrangement;
///
/// let arr = Arrangement::parse(
///     "2s 2h Ac",
///     "3s 3h 3d 3c 5s",
///     "9h 10h jh qh kh",
/// ).unwrap();
/// assert_eq!(arr.cards().len(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    front: CardGroup,
    middle: CardGroup,
    back: CardGroup,
}

impl Arrangement {
    pub fn try_new(front: Vec<Card>, middle: Vec<Card>, back: Vec<Card>) -> Result<Self, HandError> {
        for (zone, cards) in [(Zone::Front, &front), (Zone::Middle, &middle), (Zone::Back, &back)] {
            if cards.len() != zone.size() {
                return Err(HandError::ZoneSize { zone, expected: zone.size(), got: cards.len() });
            }
        }
        let all: Vec<Card> = front.iter().chain(&middle).chain(&back).copied().collect();
        if let Some(dup) = first_duplicate(&all) {
            return Err(HandError::DuplicateCard(dup));
        }
        Ok(Self {
            front: CardGroup { cards: front },
            middle: CardGroup { cards: middle },
            back: CardGroup { cards: back },
        })
    }

    /// Build an arrangement and check that it uses exactly the dealt cards.
    pub fn try_from_hand(
        hand: &Hand,
        front: Vec<Card>,
        middle: Vec<Card>,
        back: Vec<Card>,
    ) -> Result<Self, HandError> {
        let arr = Self::try_new(front, middle, back)?;
        if let Some(stray) = arr.cards().into_iter().find(|c| !hand.contains(*c)) {
            return Err(HandError::NotDealt(stray));
        }
        Ok(arr)
    }

    /// Parse three card lists, front first.
    pub fn parse(front: &str, middle: &str, back: &str) -> Result<Self, HandError> {
        let parse = |s: &str| parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()));
        Self::try_new(parse(front)?, parse(middle)?, parse(back)?)
    }

    /// Slice a 13-card list in order: first 3 front, next 5 middle, last 5 back.
    pub(crate) fn from_slice_unchecked(cards: &[Card]) -> Self {
        debug_assert_eq!(cards.len(), HAND_SIZE);
        Self {
            front: CardGroup { cards: cards[..3].to_vec() },
            middle: CardGroup { cards: cards[3..8].to_vec() },
            back: CardGroup { cards: cards[8..].to_vec() },
        }
    }

    /// Rank-sorted slice of a hand: lowest three in front, highest five in back.
    pub fn rank_sorted(hand: &Hand) -> Self {
        Self::from_slice_unchecked(&hand.sorted())
    }

    pub fn front(&self) -> &CardGroup {
        &self.front
    }

    pub fn middle(&self) -> &CardGroup {
        &self.middle
    }

    pub fn back(&self) -> &CardGroup {
        &self.back
    }

    pub fn zone(&self, zone: Zone) -> &CardGroup {
        match zone {
            Zone::Front => &self.front,
            Zone::Middle => &self.middle,
            Zone::Back => &self.back,
        }
    }

    /// All 13 cards, front to back.
    pub fn cards(&self) -> Vec<Card> {
        self.front.cards.iter().chain(&self.middle.cards).chain(&self.back.cards).copied().collect()
    }

    /// The 13 cards as a [`Hand`].
    pub fn to_hand(&self) -> Hand {
        Hand { cards: self.cards() }
    }

    /// True when both arrangements put the same cards in the same zones.
    pub fn same_assignment(&self, other: &Arrangement) -> bool {
        Zone::ALL.iter().all(|&z| {
            let a: HashSet<Card> = self.zone(z).as_slice().iter().copied().collect();
            other.zone(z).as_slice().iter().all(|c| a.contains(c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hand_requires_thirteen_distinct_cards() {
        let err = "As Ks".parse::<Hand>().unwrap_err();
        assert_eq!(err, HandError::CardCount { expected: 13, got: 2 });

        let err = "As As Qs Js 10s 9h 8h 7h 6h 5h 4d 3d 2d".parse::<Hand>().unwrap_err();
        assert_eq!(err, HandError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn hand_reports_parse_errors() {
        assert!(matches!("As Zz".parse::<Hand>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn card_group_sizes() {
        assert!("As Ks Qs".parse::<CardGroup>().is_ok());
        assert!("As Ks Qs Js 10s".parse::<CardGroup>().is_ok());
        assert_eq!("As Ks".parse::<CardGroup>().unwrap_err(), HandError::GroupSize(2));
        assert_eq!("As Ks Qs Js".parse::<CardGroup>().unwrap_err(), HandError::GroupSize(4));
    }

    #[test]
    fn arrangement_checks_zone_sizes_and_overlap() {
        let err = Arrangement::parse("2s 2h", "3s 3h 3d 3c 5s", "9h 10h jh qh kh").unwrap_err();
        assert_eq!(err, HandError::ZoneSize { zone: Zone::Front, expected: 3, got: 2 });

        let err = Arrangement::parse("2s 2h 3s", "3s 3h 3d 3c 5s", "9h 10h jh qh kh").unwrap_err();
        assert_eq!(err, HandError::DuplicateCard(Card::new(Rank::Three, Suit::Spades)));
    }

    #[test]
    fn arrangement_must_come_from_hand() {
        let hand: Hand = "As Ks Qs Js 10s 9h 8h 7h 6h 5h 4d 3d 2d".parse().unwrap();
        let cards = parse_cards("2d 3d 4d 5h 6h 7h 8h 9h 10s js qs ks ac").unwrap();
        let err =
            Arrangement::try_from_hand(&hand, cards[..3].to_vec(), cards[3..8].to_vec(), cards[8..].to_vec())
                .unwrap_err();
        assert_eq!(err, HandError::NotDealt(Card::new(Rank::Ace, Suit::Clubs)));
    }

    #[test]
    fn rank_sorted_slice() {
        let hand: Hand = "As 2d Ks 3d Qs 4d Js 5h 10s 6h 9h 7h 8h".parse().unwrap();
        let arr = Arrangement::rank_sorted(&hand);
        let front: Vec<Rank> = arr.front().as_slice().iter().map(|c| c.rank()).collect();
        assert_eq!(front, vec![Rank::Two, Rank::Three, Rank::Four]);
        let back: Vec<Rank> = arr.back().as_slice().iter().map(|c| c.rank()).collect();
        assert_eq!(back, vec![Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
        assert_eq!(arr.to_hand().sorted(), hand.sorted());
    }

    #[test]
    fn same_assignment_ignores_order_within_zone() {
        let a = Arrangement::parse("2s 2h Ac", "3s 3h 3d 3c 5s", "9h 10h jh qh kh").unwrap();
        let b = Arrangement::parse("Ac 2h 2s", "5s 3c 3d 3h 3s", "kh qh jh 10h 9h").unwrap();
        let c = Arrangement::parse("2s 2h 5s", "3s 3h 3d 3c Ac", "9h 10h jh qh kh").unwrap();
        assert!(a.same_assignment(&b));
        assert!(!a.same_assignment(&c));
    }
}
