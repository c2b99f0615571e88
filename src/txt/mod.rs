//! Aggregate model holding whole-document recognition output: a [`Volume`]
//! of [`Page`]s, each wrapping a [`TextNer`] with the [`Entity`]s found in it.

pub mod entity;
pub mod page;
pub mod text;
pub mod volume;

pub use entity::Entity;
pub use page::Page;
pub use text::TextNer;
pub use volume::Volume;

use serde::Serialize;

use crate::error::EncodeError;

/// Encodes data in a format suitable for output.
pub trait Formatter: Serialize {
    fn to_json(&self, pretty: bool) -> Result<Vec<u8>, EncodeError> {
        let bytes = if pretty {
            serde_json::to_vec_pretty(self)?
        } else {
            serde_json::to_vec(self)?
        };
        Ok(bytes)
    }
}
