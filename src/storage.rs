use std::fs;
use std::path::{Path, PathBuf};

use crate::tracker::TrackerData;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("data directory not found")]
    NoDataDir,
}

/// Storage port for the raw tracker collections. The analytics engine never
/// touches this; the UI layer loads data through it, hands plain in-memory
/// collections to the engine, and saves on mutation.
pub trait TrackerStore {
    fn load(&self) -> Result<TrackerData, StoreError>;
    fn save(&self, data: &TrackerData) -> Result<(), StoreError>;
}

/// File-backed store keeping the tracker data as a single JSON document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the platform-local data directory.
    pub fn in_data_dir() -> Result<Self, StoreError> {
        let dir = dirs::data_local_dir()
            .ok_or(StoreError::NoDataDir)?
            .join("mitra");
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join("tracker.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a data file exists yet (i.e., anything has been saved).
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the stored data permanently.
    pub fn wipe(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            log::info!("wiped tracker data at {}", self.path.display());
        }
        Ok(())
    }
}

impl TrackerStore for JsonFileStore {
    fn load(&self) -> Result<TrackerData, StoreError> {
        let bytes = fs::read(&self.path)?;
        let data: TrackerData = serde_json::from_slice(&bytes)?;
        log::debug!(
            "loaded {} periods and {} symptom logs from {}",
            data.periods.len(),
            data.symptom_logs.len(),
            self.path.display()
        );
        Ok(data)
    }

    fn save(&self, data: &TrackerData) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodInterval, SymptomLogEntry};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_data() -> TrackerData {
        let mut data = TrackerData::default();
        data.add_period(PeriodInterval::new(date("2024-05-01"), date("2024-05-05")).unwrap())
            .unwrap();
        data.add_log(SymptomLogEntry {
            date: date("2024-05-02"),
            pain: Some("cramps".into()),
            ..Default::default()
        });
        data
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tracker.json"));

        let data = sample_data();
        store.save(&data).unwrap();
        assert_eq!(store.load().unwrap(), data);
    }

    #[test]
    fn exists_and_wipe() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tracker.json"));
        assert!(!store.exists());

        store.save(&sample_data()).unwrap();
        assert!(store.exists());

        store.wipe().unwrap();
        assert!(!store.exists());
        // Wiping an already-empty store is fine.
        store.wipe().unwrap();
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(matches!(store.load(), Err(StoreError::Io(_))));
    }
}
