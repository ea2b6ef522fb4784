//! JSON file persistence of the history.
//!
//! The whole history lives in a single pretty-printed JSON array. Every save
//! replaces the file: the new content is written to a sibling temporary file,
//! synced to disk and then renamed over the target, so readers see either the old or
//! the new array and never a partial write.

use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};

use crate::{BudgetEntry, EngineError, ResultEngine};

/// File name of the history inside the storage directory.
pub const HISTORY_FILE: &str = "budgets.json";

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the storage directory and an empty history when missing.
    ///
    /// An existing file is parsed so a corrupt history is reported before
    /// anything gets written over it.
    pub async fn init(&self) -> ResultEngine<usize> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| EngineError::storage(parent, err))?;
        }

        if fs::try_exists(&self.path)
            .await
            .map_err(|err| EngineError::storage(&self.path, err))?
        {
            return Ok(self.load().await?.len());
        }

        tracing::info!("creating empty history at {}", self.path.display());
        self.save(&[]).await?;
        Ok(0)
    }

    /// Read the whole history. A missing file is an empty history.
    pub async fn load(&self) -> ResultEngine<Vec<BudgetEntry>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => return Err(EngineError::storage(&self.path, err)),
        };

        serde_json::from_slice(&bytes).map_err(|source| EngineError::StorageCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the persisted history with `entries`.
    pub async fn save(&self, entries: &[BudgetEntry]) -> ResultEngine<()> {
        let data = serde_json::to_vec_pretty(entries)?;
        write_atomic(&self.path, &data).await
    }
}

/// Write `data` to `path` through a temporary file and a rename.
pub(crate) async fn write_atomic(path: &Path, data: &[u8]) -> ResultEngine<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    if let Err(err) = write_synced(&temp_path, data).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(EngineError::storage(&temp_path, err));
    }

    if let Err(err) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(EngineError::storage(path, err));
    }

    Ok(())
}

/// Write `data` and sync it to disk before returning.
async fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(data).await?;
    file.flush().await?;
    file.sync_all().await
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::BudgetInput;

    fn sample(n: u32) -> BudgetEntry {
        let timestamp = NaiveDate::from_ymd_opt(2024, 6, n)
            .and_then(|d| d.and_hms_micro_opt(12, 0, 0, 123_456))
            .unwrap();
        BudgetEntry::new(timestamp, BudgetInput {
            income: 1000.0 * f64::from(n),
            rent: 333.33,
            ott: 9.99,
            ..BudgetInput::default()
        })
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join(HISTORY_FILE));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_creates_empty_array() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("nested").join(HISTORY_FILE));

        assert_eq!(store.init().await.unwrap(), 0);
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "[]");
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join(HISTORY_FILE));
        let entries = vec![sample(1), sample(2), sample(3)];

        store.save(&entries).await.unwrap();
        assert_eq!(store.load().await.unwrap(), entries);
        assert_eq!(store.init().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn save_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join(HISTORY_FILE));

        store.save(&[sample(1), sample(2)]).await.unwrap();
        store.save(&[sample(3)]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), vec![sample(3)]);
        assert!(!dir.path().join("budgets.json.tmp").exists());
    }

    #[tokio::test]
    async fn saved_file_is_indented() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join(HISTORY_FILE));
        store.save(&[sample(1)]).await.unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"timestamp\": \"2024-06-01T12:00:00.123456\""));
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        std::fs::write(&path, "{not json").unwrap();
        let store = Store::new(&path);

        assert!(matches!(
            store.load().await,
            Err(EngineError::StorageCorrupt { .. })
        ));
        assert!(matches!(
            store.init().await,
            Err(EngineError::StorageCorrupt { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[tokio::test]
    async fn write_atomic_replaces_target_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.csv");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new content").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new content");
        assert!(!dir.path().join("export.csv.tmp").exists());
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = write_atomic(&path, b"[]").await.unwrap_err();

        assert!(matches!(err, EngineError::Storage { .. }));
        assert!(!dir.path().join("budgets.json.tmp").exists());
        assert!(path.join("keep").exists());
    }
}
