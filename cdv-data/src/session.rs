//! The active dataset.
//!
//! Loading is one attempt per user action. A load either replaces the whole
//! dataset (metadata plus freshly built index) or fails and leaves the
//! current one untouched; nothing partially decoded is ever exposed.

use crate::index::GroupingIndex;
use crate::view::{recompute, View, ViewState};
use anyhow::Context;
use cdv_station::{CollectionInfo, RecordCollection};
use cdv_utils::paths::file_url_to_path;
use std::path::{Path, PathBuf};

/// A decoded station dump. The records live only in the index; the rest of
/// the document is kept as [`CollectionInfo`].
#[derive(Debug, Clone)]
pub struct Dataset {
    pub info: CollectionInfo,
    /// Distinct station names in first-seen order.
    pub stations: Vec<String>,
    pub index: GroupingIndex,
    pub source: PathBuf,
}

impl Dataset {
    pub fn from_collection(collection: RecordCollection, source: PathBuf) -> Self {
        let stations = collection
            .station_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let (info, records) = collection.into_parts();
        Self {
            info,
            stations,
            index: GroupingIndex::build(records),
            source,
        }
    }

    /// Read and decode a station dump (`.json` or `.json.gz`).
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let collection = RecordCollection::from_path(path)
            .with_context(|| format!("Failed to load station data from {}", path.display()))?;
        Ok(Self::from_collection(collection, path.to_path_buf()))
    }

    /// Number of days reported by the source, for display.
    pub fn days_loaded(&self) -> i64 {
        self.info.number_returned
    }
}

/// Holder of the active dataset, if any.
#[derive(Debug, Default)]
pub struct Session {
    active: Option<Dataset>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.active.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.active.is_some()
    }

    /// Load a file and make it the active dataset.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> anyhow::Result<&Dataset> {
        let path = path.as_ref();
        match Dataset::load(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records across {} years from {}",
                    dataset.index.len(),
                    dataset.index.years().count(),
                    path.display()
                );
                Ok(self.active.insert(dataset))
            }
            Err(e) => {
                log::error!("{:#}", e);
                Err(e)
            }
        }
    }

    /// Handle a dropped URL: only local `file://` URLs (or plain paths) are
    /// accepted.
    pub fn load_url(&mut self, url: &str) -> anyhow::Result<&Dataset> {
        let path = match file_url_to_path(url) {
            Ok(path) => path,
            Err(e) => {
                log::error!("{}", e);
                return Err(e.into());
            }
        };
        self.load_path(path)
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Recompute against the active dataset; `None` when nothing is loaded.
    pub fn recompute(&self, state: &ViewState) -> Option<View<'_>> {
        self.active
            .as_ref()
            .map(|dataset| recompute(&dataset.index, state))
    }
}
