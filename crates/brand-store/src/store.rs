//! CSV strategy store.
//!
//! Appends `StrategyRecord` rows to a single CSV file. The file and its parent
//! directory are created on the first append, with a header row; later
//! appends add rows only. Each row is encoded in memory and written with one
//! `write_all`, so a failed export never leaves a partial row behind.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use brand_core::entities::{
    BrandFramework, CampaignOutline, PersonalityRecommendation, StrategyRecord,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::StoreError;

/// Outcome of a successful export.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportReceipt {
    pub path: String,
    /// True when this export created the header row.
    pub header_written: bool,
    pub saved_at: DateTime<Utc>,
    pub record: StrategyRecord,
}

/// Append-only store of saved strategies.
#[derive(Debug, Clone)]
pub struct StrategyStore {
    path: PathBuf,
}

impl StrategyStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The CSV file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flatten the generated parts and append them as one row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Export`] if the directory, file, or row cannot be
    /// written.
    pub fn export_strategy(
        &self,
        name: &str,
        framework: &BrandFramework,
        personality: &PersonalityRecommendation,
        campaign: &CampaignOutline,
    ) -> Result<ExportReceipt, StoreError> {
        let record = StrategyRecord::from_parts(name, framework, personality, campaign);
        self.append(record)
    }

    /// Append one record, writing the header first if the file is new or empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Export`] if the directory, file, or row cannot be
    /// written.
    pub fn append(&self, record: StrategyRecord) -> Result<ExportReceipt, StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                tracing::debug!(dir = %parent.display(), "creating strategy store directory");
            }
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Export(e.to_string()))?;
        }

        let header_written = std::fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        let bytes = encode_row(&record, header_written)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::Export(e.to_string()))?;
        file.write_all(&bytes)
            .and_then(|()| file.flush())
            .map_err(|e| StoreError::Export(e.to_string()))?;

        tracing::info!(
            path = %self.path.display(),
            business = %record.business_name,
            header_written,
            "appended strategy to store"
        );

        Ok(ExportReceipt {
            path: self.path.display().to_string(),
            header_written,
            saved_at: Utc::now(),
            record,
        })
    }

    /// Read every saved strategy in file order. A missing file is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file cannot be opened or a row does
    /// not match the expected columns.
    pub fn load_all(&self) -> Result<Vec<StrategyRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| StoreError::Read(e.to_string()))?;
        reader
            .deserialize::<StrategyRecord>()
            .map(|row| row.map_err(|e| StoreError::Read(e.to_string())))
            .collect()
    }

    /// The total row count and the last `limit` saved strategies, oldest first.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_all`].
    pub fn recent(&self, limit: usize) -> Result<(usize, Vec<StrategyRecord>), StoreError> {
        let mut records = self.load_all()?;
        let total_rows = records.len();
        let recent = records.split_off(total_rows.saturating_sub(limit));
        Ok((total_rows, recent))
    }
}

/// Encode one record, optionally preceded by the header row.
fn encode_row(record: &StrategyRecord, with_header: bool) -> Result<Vec<u8>, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(Vec::new());
    writer
        .serialize(record)
        .map_err(|e| StoreError::Export(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| StoreError::Export(e.to_string()))
}
