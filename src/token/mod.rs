//! Whitespace and line-wrap aware lexer producing tokens for named entity
//! recognition.

pub mod feature;
pub mod normalize;
pub mod token;
pub mod tokenizer;


pub use feature::{Feature, FeatureError, FeatureSet, FeatureValue};
pub use normalize::{
    CleaningPolicy, Normalized, Normalizer, Properties, StrictNormalizer, VerbatimNormalizer,
    PLACEHOLDER,
};
pub use token::{NerToken, Span, Token};
pub use tokenizer::{scan, tokenize, Tokenizer};
