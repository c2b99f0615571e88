use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::feature::FeatureValue;
use super::normalize::{Normalized, Normalizer, Properties};
use crate::txt::Formatter;

/// A raw span found by the scanner, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Verbatim characters of the span. For a merged dash continuation this is
    /// the concatenation of both halves, not a slice of the input.
    pub raw: Vec<char>,
    /// Index of the first character in the input.
    pub start: usize,
    /// Index one past the last character in the input.
    pub end: usize,
    /// Zero-based line number of the first character.
    pub line: usize,
}

impl Span {
    pub fn new(raw: Vec<char>, start: usize, end: usize, line: usize) -> Self {
        Self {
            raw,
            start,
            end,
            line,
        }
    }
}

/// Token is a word separated by spaces in a text. Words broken by a line wrap
/// are concatenated into one token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    span: Span,
    cleaned: String,
    properties: Properties,
    features: BTreeMap<String, FeatureValue>,
}

impl Token {
    /// Wraps a span. Cleaned text and properties stay empty until the token
    /// is processed by a [`Normalizer`](super::Normalizer).
    pub fn from_span(span: Span) -> Self {
        Self {
            span,
            cleaned: String::new(),
            properties: Properties::default(),
            features: BTreeMap::new(),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn raw(&self) -> &[char] {
        &self.span.raw
    }

    pub fn raw_string(&self) -> String {
        self.span.raw.iter().collect()
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn features(&self) -> &BTreeMap<String, FeatureValue> {
        &self.features
    }

    pub fn feature(&self, identity: &str) -> Option<&FeatureValue> {
        self.features.get(identity)
    }

    /// Replaces cleaned text and properties.
    ///
    /// This is the one sanctioned way to change a token after the scanner
    /// built it. Alternate normalization policies use it from
    /// [`NerToken::process`](super::NerToken::process).
    pub fn override_normalized(&mut self, normalized: Normalized) {
        self.cleaned = normalized.cleaned;
        self.properties = normalized.properties;
    }

    pub(crate) fn insert_feature(&mut self, identity: String, value: FeatureValue) {
        self.features.insert(identity, value);
    }
}

/// Token types a [`Tokenizer`](super::Tokenizer) can build through a factory
/// hook. A richer token wraps a [`Token`] and may override [`process`].
///
/// [`process`]: NerToken::process
pub trait NerToken {
    fn token(&self) -> &Token;

    fn token_mut(&mut self) -> &mut Token;

    /// Derives cleaned text and properties of the wrapped token.
    fn process(&mut self, normalizer: &dyn Normalizer) {
        let normalized = normalizer.normalize(self.token().raw());
        self.token_mut().override_normalized(normalized);
    }
}

impl NerToken for Token {
    fn token(&self) -> &Token {
        self
    }

    fn token_mut(&mut self) -> &mut Token {
        self
    }
}

/// Presentation view of a token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenJson<'a> {
    line_number: usize,
    raw: String,
    cleaned: &'a str,
    start: usize,
    end: usize,
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TokenJson {
            line_number: self.line(),
            raw: self.raw_string(),
            cleaned: &self.cleaned,
            start: self.start(),
            end: self.end(),
        }
        .serialize(serializer)
    }
}

impl Formatter for Token {}
