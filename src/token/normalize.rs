//! Derivation of cleaned text and descriptive properties from a raw token.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Stands in for every character that is not a letter, a digit or a dash.
pub const PLACEHOLDER: char = '\u{FFFD}';

const DASH: char = '-';

/// Boolean descriptors of a token, used as classifier inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    /// Raw token starts with `(`.
    pub has_start_parens: bool,
    /// Raw token ends with `)`.
    pub has_end_parens: bool,
    /// Raw token starts with `[`.
    pub has_start_sq_parens: bool,
    /// Raw token ends with `]`.
    pub has_end_sq_parens: bool,
    /// Raw token ends with `.`.
    pub has_end_dot: bool,
    /// Raw token ends with `,`.
    pub has_end_comma: bool,
    pub has_digits: bool,
    pub has_letters: bool,
    pub has_dash: bool,
    /// Cleaned token keeps a non alpha-numeric character in its interior.
    pub has_special_chars: bool,
    /// Digits only.
    pub is_number: bool,
    /// Letters, optionally joined by dashes.
    pub is_word: bool,
}

impl Properties {
    /// Computes properties. Edge flags look at `raw`, content flags at
    /// `cleaned`.
    pub fn compute(raw: &[char], cleaned: &str) -> Self {
        let mut props = Properties::default();

        if let (Some(&first), Some(&last)) = (raw.first(), raw.last()) {
            props.has_start_parens = first == '(';
            props.has_end_parens = last == ')';
            props.has_start_sq_parens = first == '[';
            props.has_end_sq_parens = last == ']';
            props.has_end_dot = last == '.';
            props.has_end_comma = last == ',';
        }

        for c in cleaned.chars() {
            if c == DASH {
                props.has_dash = true;
            } else if c.is_alphabetic() {
                props.has_letters = true;
            } else if c.is_numeric() {
                props.has_digits = true;
            } else {
                props.has_special_chars = true;
            }
        }

        props.is_number =
            props.has_digits && !props.has_letters && !props.has_special_chars && !props.has_dash;
        props.is_word = props.has_letters && !props.has_digits && !props.has_special_chars;
        props
    }
}

/// Output of a normalization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub cleaned: String,
    pub properties: Properties,
}

/// A normalization policy.
pub trait Normalizer {
    fn normalize(&self, raw: &[char]) -> Normalized;
}

/// Keeps letters, digits and dashes. Everything else becomes [`PLACEHOLDER`],
/// and placeholders at either edge are trimmed away.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictNormalizer;

impl Normalizer for StrictNormalizer {
    fn normalize(&self, raw: &[char]) -> Normalized {
        let cleaned = clean(raw);
        let properties = Properties::compute(raw, &cleaned);
        Normalized {
            cleaned,
            properties,
        }
    }
}

/// Leaves the raw text untouched, so `"1778,"` stays `"1778,"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimNormalizer;

impl Normalizer for VerbatimNormalizer {
    fn normalize(&self, raw: &[char]) -> Normalized {
        let cleaned: String = raw.iter().collect();
        let properties = Properties::compute(raw, &cleaned);
        Normalized {
            cleaned,
            properties,
        }
    }
}

/// Selects a [`Normalizer`] by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CleaningPolicy {
    /// Only letters, digits and dashes survive; see [`StrictNormalizer`].
    #[default]
    #[value(help = "Keep letters, digits and dashes only")]
    Strict,
    /// Cleaned text equals raw text; see [`VerbatimNormalizer`].
    #[value(help = "Keep the raw text")]
    Verbatim,
}

impl CleaningPolicy {
    pub fn normalizer(self) -> Box<dyn Normalizer + Send + Sync> {
        match self {
            CleaningPolicy::Strict => Box::new(StrictNormalizer),
            CleaningPolicy::Verbatim => Box::new(VerbatimNormalizer),
        }
    }
}

fn is_kept(c: char) -> bool {
    c == DASH || c.is_alphabetic() || c.is_numeric()
}

/// Replaces unwanted characters with [`PLACEHOLDER`] and trims placeholders
/// from both ends.
pub fn clean(raw: &[char]) -> String {
    let (Some(first), Some(last)) = (
        raw.iter().position(|&c| is_kept(c)),
        raw.iter().rposition(|&c| is_kept(c)),
    ) else {
        return String::new();
    };

    raw[first..=last]
        .iter()
        .map(|&c| if is_kept(c) { c } else { PLACEHOLDER })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(text: &str) -> Normalized {
        let raw: Vec<char> = text.chars().collect();
        StrictNormalizer.normalize(&raw)
    }

    #[test]
    fn test_clean_plain_word() {
        assert_eq!(strict("hello").cleaned, "hello");
    }

    #[test]
    fn test_clean_trims_edges() {
        assert_eq!(strict("(Fabricius,").cleaned, "Fabricius");
        assert_eq!(strict("1778,").cleaned, "1778");
        assert_eq!(strict("\"quoted.\"").cleaned, "quoted");
    }

    #[test]
    fn test_clean_keeps_interior_placeholder() {
        assert_eq!(strict("h€llö").cleaned, "h\u{FFFD}llö");
        assert_eq!(strict("wörl'd").cleaned, "wörl\u{FFFD}d");
    }

    #[test]
    fn test_clean_punctuation_only() {
        assert_eq!(strict(")").cleaned, "");
        assert_eq!(strict("...").cleaned, "");
        assert!(strict(")").properties.has_end_parens);
    }

    #[test]
    fn test_clean_keeps_dash() {
        assert_eq!(strict("-").cleaned, "-");
        assert_eq!(strict("Tora-Bora.").cleaned, "Tora-Bora");
    }

    #[test]
    fn test_properties_mixed_brackets() {
        let props = strict("(12oo]").properties;
        assert!(props.has_start_parens);
        assert!(props.has_end_sq_parens);
        assert!(!props.has_end_parens);
        assert!(!props.has_start_sq_parens);
        assert!(props.has_digits);
        assert!(props.has_letters);
        assert!(!props.is_word);
        assert!(!props.is_number);
    }

    #[test]
    fn test_properties_number() {
        let props = strict("1798)").properties;
        assert!(props.is_number);
        assert!(!props.is_word);
        assert!(props.has_end_parens);
    }

    #[test]
    fn test_properties_dashed_number_is_not_number() {
        let props = strict("12-15").properties;
        assert!(props.has_dash);
        assert!(!props.is_number);
        assert!(!props.is_word);
    }

    #[test]
    fn test_properties_compound_word() {
        let props = strict("Tora-Bora,").properties;
        assert!(props.is_word);
        assert!(props.has_dash);
        assert!(props.has_end_comma);
    }

    #[test]
    fn test_properties_special_chars() {
        let props = strict("wörl'd").properties;
        assert!(props.has_special_chars);
        assert!(!props.is_word);
    }

    #[test]
    fn test_properties_end_dot() {
        let props = strict("sp.").properties;
        assert!(props.has_end_dot);
        assert!(props.is_word);
        assert!(!props.has_special_chars);
    }

    #[test]
    fn test_verbatim_keeps_comma() {
        let raw: Vec<char> = "1778,".chars().collect();
        let normalized = VerbatimNormalizer.normalize(&raw);
        assert_eq!(normalized.cleaned, "1778,");
        assert!(normalized.properties.has_special_chars);
        assert!(!normalized.properties.is_number);
    }

    #[test]
    fn test_policy_selects_normalizer() {
        let raw: Vec<char> = "1778,".chars().collect();
        assert_eq!(
            CleaningPolicy::Strict.normalizer().normalize(&raw).cleaned,
            "1778"
        );
        assert_eq!(
            CleaningPolicy::Verbatim.normalizer().normalize(&raw).cleaned,
            "1778,"
        );
    }
}
