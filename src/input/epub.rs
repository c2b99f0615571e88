use std::path::Path;

use tracing::{debug, warn};

use super::{page_text, volume_id, LoadError};
use crate::txt::{Page, Volume};

/// Loads an EPUB file using the epub crate. Every chapter with text becomes
/// a page; its id is the chapter number.
pub fn load(path: &Path) -> Result<Volume, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();

    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut volume = Volume::new(volume_id(path));

    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            warn!(chapter = chapter_idx + 1, "cannot open EPUB chapter");
            continue;
        }

        if let Some((chapter_content, mime)) = doc.get_current_str() {
            let plain_text = extract_plain_text(&chapter_content);
            if plain_text.is_empty() {
                debug!(chapter = chapter_idx + 1, %mime, "skipping chapter without text");
                continue;
            }
            volume.push_page(Page::new(
                (chapter_idx + 1).to_string(),
                page_text(&plain_text),
            ));
        }
    }

    if volume.pages().is_empty() {
        return Err(LoadError::EpubParse(
            "No extractable text content found in EPUB".to_string(),
        ));
    }

    Ok(volume)
}

/// Extract plain text from HTML content by removing tags and decoding the
/// common character entities. Each non-empty line is kept on its own line.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        if c == '<' {
            in_tag = true;
        } else if c == '>' {
            in_tag = false;
        } else if !in_tag {
            result.push(c);
        }
    }

    decode_entities(&result)
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    const ENTITIES: &[(&str, &str)] = &[
        ("&nbsp;", " "),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
        ("&amp;", "&"),
    ];

    if !text.contains('&') {
        return text.to_string();
    }
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}
