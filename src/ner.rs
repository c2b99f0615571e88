//! Seam between the tokenizer and concrete named entity recognizers.

use tracing::debug;

use crate::token::{Token, Tokenizer};
use crate::txt::{Entity, TextNer, Volume};

/// Finds named entities in a tokenized text.
pub trait Recognizer {
    fn find(&self, tokens: &[Token]) -> Vec<Entity>;
}

/// Tokenizes `text`, runs `recognizer` on the tokens and stores the entities
/// together with the per-line entity counts.
pub fn recognize<R>(text: &mut TextNer, tokenizer: &Tokenizer, recognizer: &R)
where
    R: Recognizer + ?Sized,
{
    let tokens = text.tokenize(tokenizer);
    let entities = recognizer.find(&tokens);
    debug!(
        tokens = tokens.len(),
        entities = entities.len(),
        "recognized entities"
    );
    text.set_entities(entities);
    text.count_lines();
}

/// Runs [`recognize`] on every page of a volume.
pub fn recognize_volume<R>(volume: &mut Volume, tokenizer: &Tokenizer, recognizer: &R)
where
    R: Recognizer + ?Sized,
{
    for page in volume.pages_mut() {
        recognize(page.text_mut(), tokenizer, recognizer);
    }
}
