//! Pluggable per-token analyzers.
//!
//! Different named entities need different signals. A [`Feature`] computes one
//! such signal for a token; a [`FeatureSet`] holds the features registered for
//! a tokenizer and runs them, in registration order, on every token after it
//! has been normalized.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::token::Token;

/// Value computed by a [`Feature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Bool(v) => write!(f, "{}", v),
            FeatureValue::Int(v) => write!(f, "{}", v),
            FeatureValue::Float(v) => write!(f, "{}", v),
            FeatureValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Bool(v)
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Int(v)
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl From<String> for FeatureValue {
    fn from(v: String) -> Self {
        FeatureValue::Text(v)
    }
}

/// A named analyzer of tokens.
pub trait Feature {
    /// Key under which the computed value is stored on a token.
    fn identity(&self) -> &str;

    /// Examines a normalized token and calculates the value of the feature.
    fn analyse(&self, token: &Token) -> FeatureValue;

    /// Value stored on `token` for this feature, if it was analysed.
    fn value_of<'a>(&self, token: &'a Token) -> Option<&'a FeatureValue> {
        token.feature(self.identity())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Feature already registered: {0}")]
    Duplicate(String),
}

/// Ordered registry of features.
#[derive(Default)]
pub struct FeatureSet {
    features: Vec<Box<dyn Feature + Send + Sync>>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a feature. Identities must be unique within the set.
    pub fn register<F>(&mut self, feature: F) -> Result<(), FeatureError>
    where
        F: Feature + Send + Sync + 'static,
    {
        if self.contains(feature.identity()) {
            return Err(FeatureError::Duplicate(feature.identity().to_string()));
        }
        self.features.push(Box::new(feature));
        Ok(())
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.features.iter().any(|f| f.identity() == identity)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.identity())
    }

    /// Runs every feature against the token as it was before any of them
    /// stored a value, then stores the results.
    pub fn apply(&self, token: &mut Token) {
        let values: Vec<(String, FeatureValue)> = self
            .features
            .iter()
            .map(|f| (f.identity().to_string(), f.analyse(token)))
            .collect();

        for (identity, value) in values {
            token.insert_feature(identity, value);
        }
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.identities()).finish()
    }
}
