use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::GameStore;
use crate::domain::Game;

/// Games kept as one pretty-printed JSON array in a single file
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw records, so entries this version cannot parse survive rewrites.
    fn read_records(&self) -> Result<Vec<Value>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read games file {}", self.path.display()))?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Value>(&json) {
            Ok(Value::Array(records)) => Ok(records),
            _ => {
                warn!("Games file {} does not hold a JSON array, treating as empty", self.path.display());
                Ok(Vec::new())
            }
        }
    }

    /// Writes to a sibling temp file, then renames it over the target.
    fn write_records(&self, records: &[Value]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create games directory")?;
        }

        let json = serde_json::to_string_pretty(records).context("Failed to serialize games")?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, json).context("Failed to write temporary games file")?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace games file {}", self.path.display()))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GameStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Game>> {
        let records = self.read_records()?;
        let games = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<Game>(record) {
                Ok(game) => Some(game),
                Err(e) => {
                    warn!("Skipping unreadable game record: {}", e);
                    None
                }
            })
            .collect();
        Ok(games)
    }

    fn append(&self, game: Game) -> Result<usize> {
        let _guard = self.lock();
        let mut records = self.read_records()?;
        info!("Appending game {} ({})", game.id, game.date_iso);
        records.push(serde_json::to_value(&game).context("Failed to serialize game")?);
        self.write_records(&records)?;
        Ok(records.len())
    }

    fn remove(&self, id: &str) -> Result<usize> {
        let _guard = self.lock();
        let mut records = self.read_records()?;
        let before = records.len();
        records.retain(|r| r.get("id").and_then(Value::as_str) != Some(id));
        let removed = before - records.len();

        self.write_records(&records)?;
        info!("Removed {} game(s) with id {}", removed, id);
        Ok(removed)
    }
}
