// src/store.rs
use std::{
    error::Error,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::consts::{HISTORY_CAP, HISTORY_FILE, SETTINGS_FILE, STORE_DIR};
use crate::data::ResultSet;

/* ---------------- Settings ---------------- */

/// Persisted user flags (the tool's durable key-value state).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Results panel shown?
    pub results_visible: bool,
    /// Show the results panel automatically on startup.
    pub auto_show: bool,
    /// Prefer discounted prices when the page carries both.
    pub use_discount: bool,
    pub dark_theme: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            results_visible: true,
            auto_show: true,
            use_discount: true,
            dark_theme: false,
        }
    }
}

fn store_dir() -> PathBuf {
    PathBuf::from(STORE_DIR)
}

pub fn settings_path() -> PathBuf {
    store_dir().join(SETTINGS_FILE)
}

/// Best-effort load: a missing or unreadable settings file yields defaults.
pub fn load_settings() -> Settings {
    let p = settings_path();
    fs::read_to_string(&p)
        .ok()
        .and_then(|txt| serde_json::from_str(&txt).ok())
        .unwrap_or_default()
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    let p = settings_path();
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let txt = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::other(e.to_string()))?;
    fs::write(&p, txt)
}

/* ---------------- History ---------------- */

/// A write-once snapshot of a past session.
/// `total_amount` is the sum at save time; it is never recomputed on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub results: ResultSet,
    #[serde(rename = "totalAmount")]
    pub total_amount: u64,
}

impl HistoryEntry {
    pub fn snapshot(results: &ResultSet) -> Self {
        Self {
            timestamp: Utc::now(),
            results: results.clone(),
            total_amount: results.grand_total(),
        }
    }
}

/// Repository seam over the persisted history list. Entries are write-once
/// snapshots until deleted; there is no update or merge operation.
pub trait HistoryStore {
    /// Newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, Box<dyn Error>>;

    /// Prepend a snapshot and truncate to the cap (oldest evicted).
    fn append(&mut self, entry: HistoryEntry) -> Result<(), Box<dyn Error>>;

    /// Remove one entry by position in the listed order.
    fn delete_at(&mut self, index: usize) -> Result<(), Box<dyn Error>>;
}

/// History backed by a single JSON file, read/modify/write. The scan loop is
/// single-threaded, so there is exactly one writer at a time.
pub struct JsonHistoryStore {
    path: PathBuf,
    cap: usize,
}

impl JsonHistoryStore {
    pub fn new<P: Into<PathBuf>>(path: P, cap: usize) -> Self {
        Self { path: path.into(), cap }
    }

    /// The default on-disk location, capped per the tool's limit.
    pub fn default_location() -> Self {
        Self::new(store_dir().join(HISTORY_FILE), HISTORY_CAP)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<HistoryEntry>, Box<dyn Error>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let txt = fs::read_to_string(&self.path)?;
        let entries: Vec<HistoryEntry> = serde_json::from_str(&txt)?;
        Ok(entries)
    }

    fn write(&self, entries: &[HistoryEntry]) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(entries)?)?;
        Ok(())
    }
}

impl HistoryStore for JsonHistoryStore {
    fn list(&self) -> Result<Vec<HistoryEntry>, Box<dyn Error>> {
        self.read()
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<(), Box<dyn Error>> {
        let mut entries = self.read()?;
        entries.insert(0, entry);
        entries.truncate(self.cap);
        self.write(&entries)
    }

    fn delete_at(&mut self, index: usize) -> Result<(), Box<dyn Error>> {
        let mut entries = self.read()?;
        if index >= entries.len() {
            return Err(format!("No history entry at index {index}").into());
        }
        entries.remove(index);
        self.write(&entries)
    }
}
