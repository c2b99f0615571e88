use tracing::{debug, trace};

use super::feature::{Feature, FeatureError, FeatureSet};
use super::normalize::Normalizer;
use super::token::{NerToken, Span, Token};
use crate::config::TokenizerConfig;

const DASH: char = '-';

/// Kinds of characters the scanner distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// `\n` and `\r`.
    Newline,
    /// Space, tab and vertical tab.
    Space,
    Content,
}

fn classify(c: char) -> CharClass {
    match c {
        '\n' | '\r' => CharClass::Newline,
        ' ' | '\t' | '\u{000B}' => CharClass::Space,
        _ => CharClass::Content,
    }
}

/// State threaded through one scan of a text.
#[derive(Debug, Default)]
struct ScanState {
    /// Index of the first character of the current candidate span.
    start: usize,
    /// Zero-based line number. `\n` and a lone `\r` each end a line; a
    /// `\r\n` pair ends one.
    line: usize,
    /// A span ending with a dash at the end of its line, waiting for the
    /// span that continues it.
    pending_dash: Option<Span>,
    spans: Vec<Span>,
}

impl ScanState {
    fn step(mut self, text: &[char], i: usize, c: char) -> Self {
        let class = classify(c);
        if class == CharClass::Content {
            return self;
        }

        if i > self.start {
            let span = Span::new(text[self.start..i].to_vec(), self.start, i, self.line);
            self.finalize(span, text, i);
        }
        self.start = i + 1;

        // CRLF is one line break.
        if class == CharClass::Newline && !(c == '\r' && text.get(i + 1) == Some(&'\n')) {
            self.line += 1;
        }
        self
    }

    /// `next` is the index right after the span.
    fn finalize(&mut self, span: Span, text: &[char], next: usize) {
        if let Some(held) = self.pending_dash.take() {
            self.spans.push(merge(held, span));
        } else if ends_line_with_dash(&span, text, next) {
            trace!(start = span.start, line = span.line, "holding dash token");
            self.pending_dash = Some(span);
        } else {
            self.spans.push(span);
        }
    }

    fn finish(mut self, text: &[char]) -> Vec<Span> {
        let len = text.len();
        if len > self.start {
            let span = Span::new(text[self.start..].to_vec(), self.start, len, self.line);
            self.finalize(span, text, len);
        }
        if let Some(held) = self.pending_dash.take() {
            self.spans.push(held);
        }
        self.spans
    }
}

fn ends_line_with_dash(span: &Span, text: &[char], next: usize) -> bool {
    span.raw.len() > 1 && span.raw.last() == Some(&DASH) && rest_of_line_is_blank(text, next)
}

/// True when only spaces lie between `from` and the next line break.
fn rest_of_line_is_blank(text: &[char], from: usize) -> bool {
    for &c in text.get(from..).unwrap_or_default() {
        match classify(c) {
            CharClass::Newline => return true,
            CharClass::Space => continue,
            CharClass::Content => return false,
        }
    }
    false
}

/// Joins a dash token with its continuation. A lowercase continuation means
/// the dash was a hyphenation and is dropped; otherwise it is part of a
/// compound word and is kept.
fn merge(held: Span, next: Span) -> Span {
    let hyphenated = next.raw.first().is_some_and(|c| c.is_ascii_lowercase());
    debug!(
        start = held.start,
        end = next.end,
        line = held.line,
        hyphenated,
        "merging dash continuation"
    );

    let mut raw = held.raw;
    if hyphenated {
        raw.pop();
    }
    raw.extend(next.raw);
    Span::new(raw, held.start, next.end, held.line)
}

/// Splits text into raw spans on whitespace, counting lines and joining words
/// broken by a line wrap.
pub fn scan(text: &[char]) -> Vec<Span> {
    text.iter()
        .enumerate()
        .fold(ScanState::default(), |state, (i, &c)| state.step(text, i, c))
        .finish(text)
}

/// Turns text into normalized tokens, running registered features on each.
pub struct Tokenizer {
    normalizer: Box<dyn Normalizer + Send + Sync>,
    features: FeatureSet,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::from_config(&TokenizerConfig::default())
    }

    pub fn from_config(config: &TokenizerConfig) -> Self {
        Self {
            normalizer: config.policy.normalizer(),
            features: FeatureSet::new(),
        }
    }

    /// Replaces the normalization policy.
    pub fn with_normalizer<N>(mut self, normalizer: N) -> Self
    where
        N: Normalizer + Send + Sync + 'static,
    {
        self.normalizer = Box::new(normalizer);
        self
    }

    pub fn register_feature<F>(&mut self, feature: F) -> Result<(), FeatureError>
    where
        F: Feature + Send + Sync + 'static,
    {
        self.features.register(feature)
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn tokenize(&self, text: &[char]) -> Vec<Token> {
        self.tokenize_with(text, |token| token)
    }

    /// Like [`tokenize`](Self::tokenize), but lets `factory` wrap every token
    /// before it is normalized and analysed.
    pub fn tokenize_with<T, F>(&self, text: &[char], mut factory: F) -> Vec<T>
    where
        T: NerToken,
        F: FnMut(Token) -> T,
    {
        let tokens: Vec<T> = scan(text)
            .into_iter()
            .map(|span| {
                let mut wrapped = factory(Token::from_span(span));
                wrapped.process(&*self.normalizer);
                self.features.apply(wrapped.token_mut());
                wrapped
            })
            .collect();

        debug!(chars = text.len(), tokens = tokens.len(), "tokenized text");
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizes with the strict policy and no features.
pub fn tokenize(text: &[char]) -> Vec<Token> {
    Tokenizer::new().tokenize(text)
}
