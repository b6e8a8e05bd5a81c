use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a set of cards, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; 15],
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count ranks across any number of cards (a group or a whole hand).
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { counts, groups }
    }

    /// How many cards of `rank` are present.
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Number of ranks appearing exactly `count` times.
    pub fn with_count(&self, count: u8) -> usize {
        self.groups.iter().filter(|(_, c)| *c == count).count()
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 4).map(|(rank, _)| *rank)
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(rank, _)| *rank)
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    /// Returns true if there are both trips and a pair (full house).
    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.with_count(2) > 0
    }
}
