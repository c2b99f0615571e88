use serde::{Deserialize, Serialize};

use super::Formatter;
use crate::token::Token;

/// A named entity found in a text: a scientific name, a person, a place, a
/// number and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// What kind of entity this is, as named by the recognizer.
    pub kind: String,
    /// The entity as it appears in the text.
    pub verbatim: String,
    pub start: usize,
    pub end: usize,
    pub line_number: usize,
}

impl Entity {
    pub fn new(
        kind: impl Into<String>,
        verbatim: impl Into<String>,
        start: usize,
        end: usize,
        line_number: usize,
    ) -> Self {
        Self {
            kind: kind.into(),
            verbatim: verbatim.into(),
            start,
            end,
            line_number,
        }
    }

    /// Builds an entity spanning a contiguous run of tokens. Returns `None`
    /// for an empty run.
    pub fn from_tokens(kind: impl Into<String>, tokens: &[Token]) -> Option<Self> {
        let (first, last) = (tokens.first()?, tokens.last()?);
        let verbatim = tokens
            .iter()
            .map(Token::raw_string)
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self::new(
            kind,
            verbatim,
            first.start(),
            last.end(),
            first.line(),
        ))
    }
}

impl Formatter for Entity {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn test_from_tokens() {
        let text: Vec<char> = "found Blaniulus guttulatus here".chars().collect();
        let tokens = tokenize(&text);
        let entity = Entity::from_tokens("scientificName", &tokens[1..3]).unwrap();
        assert_eq!(entity.verbatim, "Blaniulus guttulatus");
        assert_eq!(entity.start, 6);
        assert_eq!(entity.end, 26);
        assert_eq!(entity.line_number, 0);
    }

    #[test]
    fn test_from_empty_run() {
        assert!(Entity::from_tokens("number", &[]).is_none());
    }

    #[test]
    fn test_entity_json() {
        let entity = Entity::new("number", "1798", 4, 8, 2);
        let json = String::from_utf8(entity.to_json(false).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"number","verbatim":"1798","start":4,"end":8,"lineNumber":2}"#
        );
    }
}
