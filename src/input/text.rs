use std::fs;
use std::path::Path;

use super::{volume_from_text, volume_id, LoadError};
use crate::txt::Volume;

/// Loads a UTF-8 plain text file as a single-page volume.
pub fn load(path: &Path) -> Result<Volume, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(volume_from_text(volume_id(path), &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gner_text_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_empty_file_error() {
        let path = temp_path("empty.txt");
        File::create(&path).unwrap().write_all(b" \n\t ").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(LoadError::EmptyFile(_))));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load(Path::new("nonexistent_file_12345.txt"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let path = temp_path("latin1.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(LoadError::Io(_))));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_valid_file_loads() {
        let path = temp_path("valid.txt");
        fs::write(&path, "hello world").unwrap();

        let volume = load(&path).unwrap();
        assert_eq!(volume.pages().len(), 1);
        assert_eq!(volume.pages()[0].id(), "1");
        let text: String = volume.pages()[0].text().text().iter().collect();
        assert_eq!(text, "hello world");

        fs::remove_file(path).unwrap();
    }
}
