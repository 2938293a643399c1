use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{parse_cards, Card};
use crate::errors::HandError;

pub const HAND_SIZE: usize = 5;

/// Poker combination categories, ordered from weakest to strongest.
/// Royal flush is the highest straight flush and has no category of its own.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Combination {
    HighCard = 1,
    Pair = 2,
    TwoPairs = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Combination {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Combination::HighCard => "HIGH_CARD",
            Combination::Pair => "PAIR",
            Combination::TwoPairs => "TWO_PAIRS",
            Combination::ThreeOfAKind => "THREE_OF_A_KIND",
            Combination::Straight => "STRAIGHT",
            Combination::Flush => "FLUSH",
            Combination::FullHouse => "FULL_HOUSE",
            Combination::FourOfAKind => "FOUR_OF_A_KIND",
            Combination::StraightFlush => "STRAIGHT_FLUSH",
        }
    }

    /// Number of critical values every hand of this combination carries.
    pub fn critical_len(self) -> usize {
        match self {
            Combination::StraightFlush | Combination::Straight => 1,
            Combination::FourOfAKind | Combination::FullHouse => 2,
            Combination::ThreeOfAKind | Combination::TwoPairs => 3,
            Combination::Pair => 4,
            Combination::Flush | Combination::HighCard => 5,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified five-card hand.
///
/// `critical_values` are the tie-breakers for hands of the same combination,
/// ordered from most to least significant. Two hands of the same combination
/// always carry sequences of equal length.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EvaluatedHandRepr")]
pub struct EvaluatedHand {
    combination: Combination,
    critical_values: Vec<u8>,
}

impl EvaluatedHand {
    fn new(combination: Combination, critical_values: Vec<u8>) -> Self {
        debug_assert_eq!(critical_values.len(), combination.critical_len());
        EvaluatedHand {
            combination,
            critical_values,
        }
    }

    pub fn combination(&self) -> Combination {
        self.combination
    }

    pub fn critical_values(&self) -> &[u8] {
        &self.critical_values
    }
}

#[derive(Deserialize)]
struct EvaluatedHandRepr {
    combination: Combination,
    critical_values: Vec<u8>,
}

impl TryFrom<EvaluatedHandRepr> for EvaluatedHand {
    type Error = String;

    fn try_from(repr: EvaluatedHandRepr) -> Result<Self, Self::Error> {
        let expected = repr.combination.critical_len();
        if repr.critical_values.len() != expected {
            return Err(format!(
                "{} carries {} critical values, got {}",
                repr.combination,
                expected,
                repr.critical_values.len()
            ));
        }
        if let Some(v) = repr.critical_values.iter().find(|v| !(2..=14).contains(*v)) {
            return Err(format!("critical value {} is not a card rank", v));
        }
        Ok(EvaluatedHand::new(repr.combination, repr.critical_values))
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {:?}", self.combination, self.critical_values)
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classifies exactly five cards.
///
/// Ace is always high: A-2-3-4-5 is not a straight.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, HandError> {
    if cards.len() != HAND_SIZE {
        return Err(HandError::Arity {
            expected: HAND_SIZE,
            actual: cards.len(),
        });
    }

    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();
    let is_flush = cards.windows(2).all(|w| w[0].suit == w[1].suit);
    let is_straight = ranks.windows(2).all(|w| w[1] == w[0] + 1);
    let high = ranks[HAND_SIZE - 1];
    let descending: Vec<u8> = ranks.iter().rev().copied().collect();

    if is_straight && is_flush {
        return Ok(EvaluatedHand::new(Combination::StraightFlush, vec![high]));
    }
    if is_flush {
        return Ok(EvaluatedHand::new(Combination::Flush, descending));
    }
    if is_straight {
        return Ok(EvaluatedHand::new(Combination::Straight, vec![high]));
    }

    let groups = rank_groups(&ranks);
    let counts: Vec<u8> = groups.iter().map(|&(_, count)| count).collect();
    // group ranks are already in tie-break order for every grouped combination
    let group_ranks: Vec<u8> = groups.iter().map(|&(rank, _)| rank).collect();

    let combination = match counts.as_slice() {
        [4, ..] => Combination::FourOfAKind,
        [3, 2] => Combination::FullHouse,
        [3, ..] => Combination::ThreeOfAKind,
        [2, 2, ..] => Combination::TwoPairs,
        [2, ..] => Combination::Pair,
        // five distinct ranks, or five of one rank which only odd suit symbols allow
        _ => return Ok(EvaluatedHand::new(Combination::HighCard, descending)),
    };
    Ok(EvaluatedHand::new(combination, group_ranks))
}

/// Parses five card tokens and classifies them.
pub fn evaluate_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<EvaluatedHand, HandError> {
    if tokens.len() != HAND_SIZE {
        return Err(HandError::Arity {
            expected: HAND_SIZE,
            actual: tokens.len(),
        });
    }
    evaluate(&parse_cards(tokens)?)
}

/// Orders two hands by combination rank, then by critical values in order.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    match a.combination.rank().cmp(&b.combination.rank()) {
        Ordering::Equal => a.critical_values.cmp(&b.critical_values),
        ord => ord,
    }
}

// (rank, count) pairs sorted by count desc, then rank desc
fn rank_groups(sorted_ranks: &[u8]) -> Vec<(u8, u8)> {
    let mut rank_counts = [0u8; 15];
    for &r in sorted_ranks {
        rank_counts[r as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (r, rank_counts[r as usize]))
        .collect();
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}
