use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::errors::HandError;
use crate::hand::{compare, evaluate_tokens, EvaluatedHand, HAND_SIZE};

/// Number of card tokens on one input line: two hands.
pub const LINE_TOKENS: usize = HAND_SIZE * 2;

/// Result of comparing player 1's hand against player 2's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Player1,
    Player2,
    Tie,
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::Player1,
            Ordering::Less => Outcome::Player2,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Two evaluated hands read from one line of input.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub player1: EvaluatedHand,
    pub player2: EvaluatedHand,
}

impl Matchup {
    /// Parses a line of ten whitespace-separated card tokens. The first five
    /// belong to player 1, the last five to player 2.
    pub fn parse_line(line: &str) -> Result<Matchup, HandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != LINE_TOKENS {
            return Err(HandError::Arity {
                expected: LINE_TOKENS,
                actual: tokens.len(),
            });
        }
        let (first, second) = tokens.split_at(HAND_SIZE);
        Ok(Matchup {
            player1: evaluate_tokens(first)?,
            player2: evaluate_tokens(second)?,
        })
    }

    pub fn outcome(&self) -> Outcome {
        compare(&self.player1, &self.player2).into()
    }
}
