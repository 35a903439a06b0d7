//! File reading utilities

use super::document::SentenceInput;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reader for tagged sentence documents
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a JSON array of tagged sentences
    pub fn read_sentences(path: &Path) -> Result<Vec<SentenceInput>> {
        let content = Self::read_text(path)?;
        let sentences = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse tagged sentences: {}", path.display()))?;

        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Grüße aus Köln";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.json"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_sentences() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sentences.json");
        fs::write(
            &file_path,
            r#"[{"tokens": [{"text": "Ja", "tags": ["ADV:ASS"]}]}]"#,
        )
        .unwrap();

        let sentences = FileReader::read_sentences(&file_path).unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens[0].text, "Ja");
    }

    #[test]
    fn test_read_sentences_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.json");
        fs::write(&file_path, "[{\"tokens\": ").unwrap();

        let err_msg = FileReader::read_sentences(&file_path).unwrap_err().to_string();
        assert!(err_msg.contains("Failed to parse tagged sentences"));
    }
}
