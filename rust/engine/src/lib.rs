//! # handsort-engine: Five-Card Hand Evaluation
//!
//! Classifies five-card poker hands into one of nine combinations with an
//! ordered list of tie-breaking values, and orders two classified hands.
//! Every operation is a pure function; evaluated hands are immutable.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and token parsing
//! - [`deck`] - Seeded 52-card deck for dealing random matchups
//! - [`hand`] - Hand classification and comparison
//! - [`matchup`] - Two-hand input lines and their outcome
//! - [`errors`] - Error types for malformed input
//!
//! ## Quick Start
//!
//! ```rust
//! use handsort_engine::hand::{compare, evaluate_tokens, Combination};
//!
//! let quads = evaluate_tokens(&["7C", "7D", "7H", "7S", "2D"]).unwrap();
//! assert_eq!(quads.combination(), Combination::FourOfAKind);
//! assert_eq!(quads.critical_values(), &[7, 2]);
//!
//! let house = evaluate_tokens(&["AH", "AS", "AD", "KH", "KS"]).unwrap();
//! assert!(compare(&quads, &house).is_gt());
//! ```
//!
//! ## Matchup Lines
//!
//! ```rust
//! use handsort_engine::matchup::{Matchup, Outcome};
//!
//! let m = Matchup::parse_line("TC JC QC KC AC 9C TC JC QC KC").unwrap();
//! assert_eq!(m.outcome(), Outcome::Player1);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod matchup;
