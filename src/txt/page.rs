use serde::{Deserialize, Serialize};

use super::{Formatter, TextNer};

/// A page of a book, magazine, journal, web page etc. It can stand alone or
/// be part of a [`Volume`](super::Volume).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "pageId")]
    id: String,

    #[serde(flatten)]
    text: TextNer,
}

impl Page {
    pub fn new(id: impl Into<String>, text: TextNer) -> Self {
        Self {
            id: id.into(),
            text,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &TextNer {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut TextNer {
        &mut self.text
    }
}

impl Formatter for Page {}
