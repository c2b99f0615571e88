use std::fs;
use std::path::Path;

use tracing::warn;

use super::{page_text, volume_id, LoadError};
use crate::txt::{Page, Volume};

/// Loads a PDF file using the pdf-extract crate, one volume page per PDF page.
pub fn load(path: &Path) -> Result<Volume, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let buffer = fs::read(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if pages.is_empty() {
        return Err(LoadError::PdfParse("No pages found in PDF".to_string()));
    }

    Ok(pages_to_volume(volume_id(path), &pages))
}

fn pages_to_volume(id: String, pages: &[String]) -> Volume {
    let mut volume = Volume::new(id);
    for (idx, content) in pages.iter().enumerate() {
        if content.trim().is_empty() {
            warn!(page = idx + 1, "PDF page has no extractable text");
        }
        volume.push_page(Page::new((idx + 1).to_string(), page_text(content)));
    }
    volume
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_load_nonexistent_file() {
        let result = load(Path::new("/nonexistent/path/document.pdf"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_pages_keep_pdf_numbering() {
        let pages = vec!["Family Julidae".to_string(), String::new(), "1898".to_string()];
        let volume = pages_to_volume("scan".to_string(), &pages);
        let ids: Vec<&str> = volume.pages().iter().map(Page::id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(volume.pages()[1].text().text().is_empty());
    }
}
