//! Target-composition shorthand parser.
//!
//! A composition string is a delimiter-separated list of tokens like
//! `"1.0SiO2:0.02Al2O3:0.1Na2O:40H2O"`: an optional signed molar prefix
//! (default 1.0) immediately followed by a formula. Parsing is pure and
//! forgiving; tokens that carry no formula are skipped silently.

use crate::error::{BatchError, BatchResult};
use bc_core::Real;
use regex::Regex;
use std::sync::LazyLock;

/// Delimiter used by the shorthand notation unless the caller picks another.
pub const DEFAULT_DELIMITER: char = ':';

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<moles>-?\d+\.\d+|-?\d+)?(?P<formula>[A-Za-z0-9()]+)")
        .expect("composition token pattern is valid")
});

/// Parse a composition string into ordered (formula, moles) pairs.
///
/// All whitespace is stripped before tokens are matched, so
/// `"1.0 SiO2 : 2 H2O"` and `"1.0SiO2:2H2O"` parse identically. Never fails;
/// unparseable tokens simply produce no pair.
pub fn parse_composition(input: &str, delimiter: char) -> Vec<(String, Real)> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut pairs = Vec::new();
    for token in stripped.split(delimiter) {
        if let Some(caps) = TOKEN.captures(token) {
            let moles = caps
                .name("moles")
                .map_or(1.0, |m| m.as_str().parse().unwrap_or(1.0));
            pairs.push((caps["formula"].to_string(), moles));
        }
    }
    pairs
}

/// Like [`parse_composition`], but errors when nothing could be parsed.
pub fn parse_composition_required(
    input: &str,
    delimiter: char,
) -> BatchResult<Vec<(String, Real)>> {
    let pairs = parse_composition(input, delimiter);
    if pairs.is_empty() {
        return Err(BatchError::Parse {
            what: format!("no components found in '{input}'"),
        });
    }
    Ok(pairs)
}

/// Re-serialize (formula, moles) pairs with the given delimiter.
///
/// Output of this function parses back to the same pairs.
pub fn format_composition(pairs: &[(String, Real)], delimiter: char) -> String {
    pairs
        .iter()
        .map(|(formula, moles)| format!("{moles}{formula}"))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_and_bare_formulas() {
        let pairs = parse_composition("1.0SiO2:0.02Al2O3:Na2O:40H2O", ':');
        assert_eq!(
            pairs,
            vec![
                ("SiO2".to_string(), 1.0),
                ("Al2O3".to_string(), 0.02),
                ("Na2O".to_string(), 1.0),
                ("H2O".to_string(), 40.0),
            ]
        );
    }

    #[test]
    fn strips_whitespace_everywhere() {
        let spaced = parse_composition("  1.0 SiO2 :\t 0.02 Al2O3 ", ':');
        let tight = parse_composition("1.0SiO2:0.02Al2O3", ':');
        assert_eq!(spaced, tight);
    }

    #[test]
    fn accepts_signed_prefixes() {
        let pairs = parse_composition("-0.5Al2O3:-2H2O", ':');
        assert_eq!(pairs[0], ("Al2O3".to_string(), -0.5));
        assert_eq!(pairs[1], ("H2O".to_string(), -2.0));
    }

    #[test]
    fn keeps_parenthesized_formulas_whole() {
        let pairs = parse_composition("0.08(TPA)2O:60SiO2", ':');
        assert_eq!(pairs[0], ("(TPA)2O".to_string(), 0.08));
        assert_eq!(pairs[1], ("SiO2".to_string(), 60.0));
    }

    #[test]
    fn skips_tokens_without_a_formula() {
        let pairs = parse_composition("1.0SiO2:???:--:2H2O", ':');
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], ("H2O".to_string(), 2.0));
        assert!(parse_composition(":::", ':').is_empty());
        assert!(parse_composition("", ':').is_empty());
    }

    #[test]
    fn honors_a_custom_delimiter() {
        let pairs = parse_composition("2SiO2;1Al2O3", ';');
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("SiO2".to_string(), 2.0));
    }

    #[test]
    fn required_variant_errors_on_empty_yield() {
        assert!(parse_composition_required("1.0SiO2", ':').is_ok());
        let err = parse_composition_required("?!:?!", ':').unwrap_err();
        assert!(matches!(err, BatchError::Parse { .. }));
        assert!(err.to_string().contains("?!"));
    }

    #[test]
    fn formatting_reproduces_parseable_text() {
        let pairs = vec![
            ("SiO2".to_string(), 1.0),
            ("Al2O3".to_string(), 0.02),
            ("H2O".to_string(), 40.0),
        ];
        let text = format_composition(&pairs, ':');
        assert_eq!(text, "1SiO2:0.02Al2O3:40H2O");
        assert_eq!(parse_composition(&text, ':'), pairs);
    }
}
