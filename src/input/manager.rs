//! Input manager: field resolution and extractor routing

use crate::error::{Result, ResumeScanError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One submission field, fed from inline text, a file, or both.
///
/// Invariant: at most one source supplies the field's value at submission
/// time. When a file is attached it wins and the inline text is ignored,
/// mirroring the form behavior where a file upload disables and clears the
/// paired text area.
#[derive(Debug, Clone, Default)]
pub struct FieldInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl FieldInput {
    pub fn new(text: Option<String>, file: Option<PathBuf>) -> Self {
        Self { text, file }
    }

    /// Resolve this field to the text that will be submitted.
    pub async fn resolve(&self, label: &str, manager: &mut InputManager) -> Result<String> {
        if let Some(path) = &self.file {
            // File wins over inline text
            return manager.extract_text(path).await;
        }

        match &self.text {
            Some(text) if !text.trim().is_empty() => Ok(text.clone()),
            _ => Err(ResumeScanError::InvalidInput(format!(
                "No {} provided: pass a file or inline text",
                label
            ))),
        }
    }

    /// Human-readable description of the active source, for report metadata.
    pub fn describe(&self) -> String {
        match (&self.file, &self.text) {
            (Some(path), _) => format!("file: {}", path.display()),
            (None, Some(text)) => format!("inline text ({} characters)", text.len()),
            (None, None) => "none".to_string(),
        }
    }
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeScanError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeScanError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeScanError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_wins_over_inline_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "text from the file").unwrap();

        let field = FieldInput::new(Some("pasted text".to_string()), Some(path));
        let mut manager = InputManager::new();

        let resolved = field.resolve("resume", &mut manager).await.unwrap();
        assert_eq!(resolved, "text from the file");
    }

    #[tokio::test]
    async fn test_inline_text_without_file() {
        let field = FieldInput::new(Some("pasted text".to_string()), None);
        let mut manager = InputManager::new();

        let resolved = field.resolve("resume", &mut manager).await.unwrap();
        assert_eq!(resolved, "pasted text");
    }

    #[tokio::test]
    async fn test_empty_field_is_rejected() {
        let mut manager = InputManager::new();

        let missing = FieldInput::new(None, None);
        assert!(missing.resolve("job description", &mut manager).await.is_err());

        let blank = FieldInput::new(Some("   \n".to_string()), None);
        assert!(blank.resolve("job description", &mut manager).await.is_err());
    }

    #[test]
    fn test_describe_prefers_file() {
        let field = FieldInput::new(
            Some("pasted".to_string()),
            Some(PathBuf::from("cv.pdf")),
        );
        assert!(field.describe().starts_with("file:"));

        let inline = FieldInput::new(Some("pasted".to_string()), None);
        assert!(inline.describe().starts_with("inline text"));
    }
}
