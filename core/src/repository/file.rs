use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::input::parse_document;
use crate::model::daily_log::LogDocument;
use crate::repository::traits::LogRepository;

pub const DEFAULT_LOG_FILE: &str = "daily.yaml";

/// Document shape as decoded, before any validation. A label with no lines
/// decodes to `None`.
pub type RawDocument = BTreeMap<String, Option<Vec<String>>>;

#[derive(Clone, Debug)]
pub struct YamlLogRepository {
    file_path: PathBuf,
}

impl YamlLogRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Default for YamlLogRepository {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl LogRepository for YamlLogRepository {
    #[instrument(skip(self), fields(path = %self.file_path.display()))]
    fn load(&self) -> Result<LogDocument> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read log file {}", self.file_path.display()))?;
        let doc = parse_yaml(&content)
            .with_context(|| format!("Failed to parse log file {}", self.file_path.display()))?;
        debug!(days = doc.len(), "loaded log document");
        Ok(doc)
    }
}

pub fn decode_yaml(content: &str) -> Result<RawDocument> {
    if content.trim().is_empty() {
        return Ok(RawDocument::new());
    }
    let raw: Option<RawDocument> = serde_yaml::from_str(content)?;
    Ok(raw.unwrap_or_default())
}

/// Decodes YAML text and validates it into a [LogDocument].
pub fn parse_yaml(content: &str) -> Result<LogDocument> {
    let raw = decode_yaml(content)?;
    let doc = parse_document(raw.into_iter().map(|(label, lines)| (label, lines.unwrap_or_default())))?;
    Ok(doc)
}
