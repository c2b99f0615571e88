use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Entity, Formatter};
use crate::token::{Token, Tokenizer};

/// The simplest unit of named entity recognition: a text and what was found
/// in it. [`Page`](super::Page) builds on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextNer {
    /// Content used for recognition. Not part of the output.
    #[serde(skip)]
    text: Vec<char>,

    /// Entities found in the text.
    entities: Vec<Entity>,

    /// Number of entities found on each line, keyed by line number.
    #[serde(rename = "lines")]
    lines_entities_num: BTreeMap<usize, usize>,
}

impl TextNer {
    pub fn new(text: Vec<char>) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &[char] {
        &self.text
    }

    pub fn set_entities(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn set_lines_entities_num(&mut self, lines: BTreeMap<usize, usize>) {
        self.lines_entities_num = lines;
    }

    pub fn lines_entities_num(&self) -> &BTreeMap<usize, usize> {
        &self.lines_entities_num
    }

    /// Recomputes the per-line entity counts from the stored entities.
    pub fn count_lines(&mut self) {
        let mut lines = BTreeMap::new();
        for entity in &self.entities {
            *lines.entry(entity.line_number).or_insert(0) += 1;
        }
        self.lines_entities_num = lines;
    }

    pub fn tokenize(&self, tokenizer: &Tokenizer) -> Vec<Token> {
        tokenizer.tokenize(&self.text)
    }
}

impl From<&str> for TextNer {
    fn from(text: &str) -> Self {
        Self::new(text.chars().collect())
    }
}

impl Formatter for TextNer {}
