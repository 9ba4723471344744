// 📦 Recipient Store - immutable, ordered, loaded once
//
// The published list ships inside the binary. An operator may point `--data` at another
// CSV/JSON file with the same columns; either way every row is checked before the store
// exists, and nothing mutates it afterwards.

use crate::recipient::{Recipient, RecipientRecord, Region, RegistrationNumber};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Dataset bundled at build time
const BUNDLED_CSV: &str = include_str!("../data/recipients.csv");

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    /// The offending value is deliberately not echoed.
    #[error("recipient {id}: registration number must be exactly 16 digits")]
    InvalidRegistrationNumber { id: u32 },

    #[error("recipient {id}: name is empty")]
    EmptyName { id: u32 },

    #[error("recipient id {id} appears more than once")]
    DuplicateId { id: u32 },

    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported data file {} (expected .csv or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

// ============================================================================
// STORE
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecipientStore {
    recipients: Vec<Recipient>,
}

impl RecipientStore {
    /// Load the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, StoreError> {
        let store = Self::from_csv_str(BUNDLED_CSV)?;
        info!(source = "bundled", count = store.len(), "recipient store loaded");
        Ok(store)
    }

    /// Load from a `.csv` or `.json` file, chosen by extension.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let read = || {
            fs::read_to_string(path).map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let store = match extension.as_deref() {
            Some("csv") => Self::from_csv_str(&read()?)?,
            Some("json") => Self::from_json_str(&read()?)?,
            _ => return Err(StoreError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(source = %path.display(), count = store.len(), "recipient store loaded");
        Ok(store)
    }

    /// Parse CSV with an `id,no_kk,nama,alamat` header row.
    pub fn from_csv_str(data: &str) -> Result<Self, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: RecipientRecord = result?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Parse a JSON array of `{id, no_kk, nama, alamat}` objects.
    pub fn from_json_str(data: &str) -> Result<Self, StoreError> {
        let records: Vec<RecipientRecord> = serde_json::from_str(data)?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<RecipientRecord>) -> Result<Self, StoreError> {
        let recipients = records
            .into_iter()
            .map(|record| {
                let registration_number = RegistrationNumber::parse(record.registration_number.trim())
                    .ok_or(StoreError::InvalidRegistrationNumber { id: record.id })?;
                let full_name = record.full_name.trim();
                if full_name.is_empty() {
                    return Err(StoreError::EmptyName { id: record.id });
                }
                Ok(Recipient::new(record.id, registration_number, full_name, record.region))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_recipients(recipients)
    }

    /// Build from already-typed recipients, enforcing id uniqueness. Order is preserved.
    pub fn from_recipients(recipients: Vec<Recipient>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for recipient in &recipients {
            if !seen.insert(recipient.id) {
                return Err(StoreError::DuplicateId { id: recipient.id });
            }
        }

        Ok(RecipientStore { recipients })
    }

    /// All records, in load order.
    pub fn all(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Recipient> {
        self.recipients.iter().find(|r| r.id == id)
    }

    pub fn count_in(&self, region: Region) -> usize {
        self.recipients.iter().filter(|r| r.region == region).count()
    }

    /// Record count per region, in picker order.
    pub fn region_counts(&self) -> Vec<(Region, usize)> {
        Region::ALL
            .iter()
            .map(|&region| (region, self.count_in(region)))
            .collect()
    }
}
