//! Turns decoded document text into ordered lexical tokens for named entity
//! recognition.
//!
//! ```
//! let text: Vec<char> = "Poma-\ntomus saltatrix".chars().collect();
//! let tokens = gner::token::tokenize(&text);
//! assert_eq!(tokens[0].cleaned(), "Pomatomus");
//! assert_eq!(tokens[1].line(), 1);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod ner;
pub mod token;
pub mod txt;

pub use config::Config;
pub use error::EncodeError;
pub use ner::Recognizer;
pub use token::{tokenize, Token, Tokenizer};
pub use txt::{Entity, Formatter, Page, TextNer, Volume};
