//! Storage for grievance records.
//!
//! A store is a whole-list load/save pair: every save rewrites everything, there is no
//! append or partial update. Concurrent writers race and the last one wins.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{GrievanceError, Result};
use crate::logging::OperationTimer;
use crate::models::{Grievance, COLUMNS};

/// Load/save access to the full grievance list
#[cfg_attr(test, mockall::automock)]
pub trait GrievanceStore {
    /// All records, in stored order
    fn load(&self) -> Result<Vec<Grievance>>;

    /// Replace the stored list with `records`
    fn save(&self, records: &[Grievance]) -> Result<()>;
}

/// A CSV file with a header row and one row per grievance
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open the store at `path`, creating a header-only file if none exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };

        if !store.path.exists() {
            if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                create_dir_all(parent)?;
            }
            store.save(&[])?;
            info!(path = %store.path.display(), "Initialized empty grievance store");
        }

        Ok(store)
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GrievanceStore for CsvStore {
    fn load(&self) -> Result<Vec<Grievance>> {
        let timer = OperationTimer::new("store_load");
        let mut reader = ReaderBuilder::new().from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            warn!(path = %self.path.display(), "Grievance store is an empty file");
            return Ok(Vec::new());
        }
        if !headers.iter().eq(COLUMNS) {
            return Err(GrievanceError::MalformedStore(format!(
                "unexpected header in {}: {}",
                self.path.display(),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        for (row, result) in reader.deserialize::<Grievance>().enumerate() {
            let record: Grievance = result.map_err(|e| {
                GrievanceError::MalformedStore(format!("row {}: {e}", row + 1))
            })?;
            if !seen.insert(record.id.clone()) {
                return Err(GrievanceError::MalformedStore(format!(
                    "row {}: duplicate id {}",
                    row + 1,
                    record.id
                )));
            }
            records.push(record);
        }

        debug!(count = records.len(), "Loaded grievances");
        timer.finish();
        Ok(records)
    }

    fn save(&self, records: &[Grievance]) -> Result<()> {
        let timer = OperationTimer::new("store_save");
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        // Rows go to a sibling temp file that replaces the store only once complete.
        let mut staged = NamedTempFile::new_in(dir)?;
        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(staged.as_file_mut());

            // Written by hand so a store with no rows still carries its header.
            writer.write_record(COLUMNS)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        staged.persist(&self.path).map_err(|e| GrievanceError::Io(e.error))?;

        debug!(count = records.len(), "Saved grievances");
        timer.finish();
        Ok(())
    }
}

/// Store kept in memory, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Grievance>>,
}

impl MemoryStore {
    /// A store pre-filled with `records`
    #[must_use]
    pub const fn with_records(records: Vec<Grievance>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// True when nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl GrievanceStore for MemoryStore {
    fn load(&self) -> Result<Vec<Grievance>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[Grievance]) -> Result<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_header_only_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("nested").join("grievances.csv");

        let store = CsvStore::open(&path).expect("Failed to open store");

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim_end(), COLUMNS.join(","));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_file_loads_as_no_records() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("grievances.csv");
        std::fs::write(&path, "").unwrap();

        let store = CsvStore::open(&path).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_leaves_no_staging_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = CsvStore::open(dir.path().join("grievances.csv")).unwrap();

        store.save(&[]).unwrap();
        store.save(&[]).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_target_and_cleans_up() {
        let dir = tempdir().expect("Failed to create temp directory");
        let target = dir.path().join("grievances.csv");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "data").unwrap();

        let store = CsvStore::open(&target).unwrap();
        assert!(matches!(store.save(&[]), Err(GrievanceError::Io(_))));

        assert_eq!(std::fs::read_to_string(target.join("keep")).unwrap(), "data");
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_memory_store_replaces_contents() {
        let store = MemoryStore::default();
        assert!(store.is_empty());
        store.save(&[]).unwrap();
        assert_eq!(store.len(), 0);
    }
}
