// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::analysis::report::AnalysisReport;
use crate::render;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Preferred directory for a report: /base_dir/<industry-slug>/<timestamp-ms>/
    pub fn report_dir(&self, report: &AnalysisReport) -> PathBuf {
        self.base_dir
            .join(slugify(&report.request.industry))
            .join(report.generated_at.format("%Y%m%dT%H%M%S%3fZ").to_string())
    }

    /// Creates a fresh directory for `report`, appending `-1`, `-2`, ... when
    /// the timestamped name is already taken so earlier runs are never overwritten.
    fn create_report_dir(&self, report: &AnalysisReport) -> Result<PathBuf, StorageError> {
        let preferred = self.report_dir(report);
        if let Some(parent) = preferred.parent() {
            fs::create_dir_all(parent)
                .map_err(StorageError::IoError)?;
        }

        let mut candidate = preferred.clone();
        let mut suffix = 0u32;
        loop {
            match fs::create_dir(&candidate) {
                Ok(()) => return Ok(candidate),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    suffix += 1;
                    tracing::debug!("{} already exists, trying suffix {}", candidate.display(), suffix);
                    let mut name = preferred.as_os_str().to_os_string();
                    name.push(format!("-{}", suffix));
                    candidate = PathBuf::from(name);
                }
                Err(e) => return Err(StorageError::IoError(e)),
            }
        }
    }

    /// Saves the raw markdown, the JSON report and the rendered HTML panel.
    /// Returns the directory holding the three files.
    pub fn save_report(&self, report: &AnalysisReport) -> Result<PathBuf, StorageError> {
        let target_dir = self.create_report_dir(report)?;

        let markdown_path = target_dir.join("analysis.md");
        fs::write(&markdown_path, &report.markdown)
            .map_err(StorageError::IoError)?;
        tracing::info!("Saved raw response to {}", markdown_path.display());

        let json_path = target_dir.join("report.json");
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&json_path, json)
            .map_err(StorageError::IoError)?;
        tracing::info!("Saved report metadata to {}", json_path.display());

        render::save_html(report, &target_dir.join("analysis.html"))
            .map_err(StorageError::IoError)?;

        Ok(target_dir)
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
fn slugify(name: &str) -> String {
    let slug = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "analysis".to_string()
    } else {
        slug
    }
}
