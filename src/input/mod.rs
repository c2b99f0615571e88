use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::txt::{Page, TextNer, Volume};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub mod epub;
pub mod pdf;
pub mod text;

/// Loads a document into a volume, picking the loader by file extension.
/// Files without an extension are read as plain text.
pub fn load(path: impl AsRef<Path>) -> Result<Volume, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let volume = match extension.as_deref() {
        None | Some("txt") | Some("text") => text::load(path)?,
        Some("pdf") => pdf::load(path)?,
        Some("epub") => epub::load(path)?,
        Some(other) => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    info!(
        volume = volume.id(),
        pages = volume.pages().len(),
        "loaded document"
    );
    Ok(volume)
}

/// Wraps already decoded text into a single-page volume.
pub fn volume_from_text(id: impl Into<String>, content: &str) -> Volume {
    let mut volume = Volume::new(id);
    volume.push_page(Page::new("1", page_text(content)));
    volume
}

/// Volume identifier derived from a file name.
fn volume_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Builds page text, dropping a byte-order mark the tokenizer would otherwise
/// report as a token of its own.
fn page_text(content: &str) -> TextNer {
    TextNer::from(content.strip_prefix('\u{FEFF}').unwrap_or(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gner_input_{}_{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_unsupported_format() {
        let path = temp_file("doc.docx", b"binary");
        let result = load(&path);
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "docx"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_dispatches_text() {
        let path = temp_file("notes.TXT", b"Pomatomus saltatrix");
        let volume = load(&path).unwrap();
        assert_eq!(volume.pages().len(), 1);
        assert_eq!(volume.pages()[0].text().text().len(), 19);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_volume_from_text_strips_bom() {
        let volume = volume_from_text("stdin", "\u{FEFF}hello world");
        assert_eq!(volume.id(), "stdin");
        let text = volume.pages()[0].text();
        assert_eq!(text.text().first(), Some(&'h'));
    }

    #[test]
    fn test_volume_id_from_stem() {
        assert_eq!(volume_id(Path::new("/books/flora.epub")), "flora");
    }
}
