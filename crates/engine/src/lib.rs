use std::path::{Component, Path, PathBuf};

use chrono::{Local, NaiveDateTime, SubsecRound};
use tokio::sync::Mutex;

pub use entry::{BudgetEntry, BudgetInput, INPUT_FIELDS};
pub use error::EngineError;
pub use export::{EXPORT_FILE, export_csv};
pub use history::{DEFAULT_CAPACITY, History};
pub use metrics::{Metrics, derive as derive_metrics};
pub use store::{HISTORY_FILE, Store};
pub use summary::{Summary, summarize};

mod entry;
mod error;
mod export;
mod history;
mod metrics;
mod store;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;

/// Result of a successful submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Submitted {
    pub entry: BudgetEntry,
    /// History length after the entry was appended.
    pub total_entries: usize,
}

/// Budget history service.
///
/// All access to the history file goes through a single lock, so a
/// submission's load-modify-save never interleaves with another request.
#[derive(Debug)]
pub struct Engine {
    store: Mutex<Store>,
    data_dir: PathBuf,
    capacity: usize,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Validate and store a new entry stamped with the current local time.
    pub async fn submit<I, K, V>(&self, fields: I) -> ResultEngine<Submitted>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let input = BudgetInput::from_fields(fields)?;
        self.submit_at(input, Local::now().naive_local().trunc_subsecs(6))
            .await
    }

    /// Store an already validated entry with an explicit timestamp.
    pub async fn submit_at(
        &self,
        input: BudgetInput,
        timestamp: NaiveDateTime,
    ) -> ResultEngine<Submitted> {
        let entry = BudgetEntry::new(timestamp, input);

        let store = self.store.lock().await;
        let mut history = History::from_entries(store.load().await?, self.capacity);
        let dropped = history.push(entry.clone());
        store.save(history.entries()).await?;

        if dropped > 0 {
            tracing::debug!("history over capacity, dropped {dropped} oldest entries");
        }
        tracing::info!("budget saved, history has {} entries", history.len());

        Ok(Submitted {
            entry,
            total_entries: history.len(),
        })
    }

    /// The whole history, oldest first.
    pub async fn history(&self) -> ResultEngine<History> {
        let store = self.store.lock().await;
        Ok(History::from_entries(store.load().await?, self.capacity))
    }

    /// The last `limit` entries, oldest first.
    pub async fn recent(&self, limit: usize) -> ResultEngine<Vec<BudgetEntry>> {
        Ok(self.history().await?.recent(limit).to_vec())
    }

    /// Aggregate statistics, `None` when the history is empty.
    pub async fn summary(&self) -> ResultEngine<Option<Summary>> {
        Ok(summarize(self.history().await?.entries()))
    }

    /// CSV rendering of the history, also left in the data directory as
    /// [`EXPORT_FILE`]. Fails with [`EngineError::NoData`] when there is
    /// nothing to export.
    pub async fn write_export(&self) -> ResultEngine<Vec<u8>> {
        let store = self.store.lock().await;
        let history = History::from_entries(store.load().await?, self.capacity);
        let data = export_csv(history.entries())?;
        store::write_atomic(&self.data_dir.join(EXPORT_FILE), &data).await?;
        Ok(data)
    }

    /// Resolve `name` to a file of the data directory.
    ///
    /// Only a single plain file name is accepted; separators, `..` and
    /// hidden names resolve to `None`.
    pub fn data_file(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
            return None;
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Some(self.data_dir.join(file)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct EngineBuilder {
    data_dir: PathBuf,
    capacity: usize,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl EngineBuilder {
    /// Directory where the history is stored.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> EngineBuilder {
        self.data_dir = dir.into();
        self
    }

    /// Maximum number of entries kept in the history.
    pub fn capacity(mut self, capacity: usize) -> EngineBuilder {
        self.capacity = capacity;
        self
    }

    /// Construct `Engine`, creating an empty history if none exists.
    ///
    /// Fails when the existing history can't be parsed, leaving it untouched.
    pub async fn build(self) -> ResultEngine<Engine> {
        if self.capacity == 0 {
            return Err(EngineError::Config(
                "history capacity must be greater than zero".to_string(),
            ));
        }

        let store = Store::new(self.data_dir.join(HISTORY_FILE));
        let entries = store.init().await?;
        tracing::info!(
            "history loaded from {} ({entries} entries)",
            store.path().display()
        );

        Ok(Engine {
            store: Mutex::new(store),
            data_dir: self.data_dir,
            capacity: self.capacity,
        })
    }
}
