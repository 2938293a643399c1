//! Single-hand evaluation command.
//!
//! Prints the combination and critical values of one five-card hand, e.g.
//! `FOUR_OF_A_KIND, [7, 2]`.

use crate::error::CliError;
use handsort_engine::hand::evaluate_tokens;
use std::io::Write;

/// Handle the eval command.
///
/// Each argument may hold one token or several separated by whitespace, so
/// both `eval 7C 7D 7H 7S 2D` and `eval "7C 7D 7H 7S 2D"` work.
pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let tokens: Vec<&str> = cards.iter().flat_map(|c| c.split_whitespace()).collect();
    let hand = evaluate_tokens(&tokens)?;
    if json {
        let s = serde_json::to_string(&hand).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
    } else {
        writeln!(out, "{}", hand)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_eval_prints_combination_and_values() {
        let mut out = Vec::new();
        handle_eval_command(&args(&["AH", "AS", "AD", "KH", "KS"]), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "FULL_HOUSE, [14, 13]\n");
    }

    #[test]
    fn test_eval_accepts_single_quoted_hand() {
        let mut out = Vec::new();
        handle_eval_command(&args(&["7C 7D 7H 7S 2D"]), true, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["combination"], "FOUR_OF_A_KIND");
        assert_eq!(v["critical_values"], serde_json::json!([7, 2]));
    }

    #[test]
    fn test_eval_rejects_four_cards() {
        let mut out = Vec::new();
        let e = handle_eval_command(&args(&["AH", "AS", "AD", "KH"]), false, &mut out)
            .unwrap_err();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert!(out.is_empty());
    }
}
