//! Tabular store: the authoritative project registry, persisted as a single
//! workbook with one "Projects" sheet in fixed column order.

pub mod lock;
mod sheet;

pub use lock::StoreLock;
pub use sheet::SHEET_NAME;

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::models::project::ProjectRecord;

pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize load→mutate→save→sync against concurrent invocations.
    /// Callers hold the guard across the whole region; the mutation methods
    /// themselves do not re-acquire it.
    pub fn lock(&self) -> AppResult<StoreLock> {
        StoreLock::acquire(&self.path)
    }

    /// Idempotent: create the workbook with an empty schema (header row only)
    /// when the file is absent. Safe to call on every load.
    pub fn ensure_schema(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        sheet::write_sheet(&self.path, &[])
    }

    /// Full table in on-disk order. A missing file is recovered by
    /// re-initializing the empty schema; a corrupt one is fatal.
    pub fn load(&self) -> AppResult<Vec<ProjectRecord>> {
        self.ensure_schema()?;
        sheet::read_sheet(&self.path)
    }

    /// Overwrite the backing file atomically: the new content is written to a
    /// sibling temp file and renamed over the target, so either the whole new
    /// table lands or the old one remains.
    pub fn save(&self, records: &[ProjectRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        sheet::write_sheet(&tmp, records)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Append one record; returns its ordinal position.
    pub fn append(&self, record: ProjectRecord) -> AppResult<usize> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)?;
        Ok(records.len() - 1)
    }

    /// Replace the record at `index` (ordinal position of the latest load).
    pub fn update(&self, index: usize, record: ProjectRecord) -> AppResult<()> {
        let mut records = self.load()?;
        if index >= records.len() {
            return Err(AppError::InvalidRow(index));
        }
        records[index] = record;
        self.save(&records)
    }

    /// Remove the record at `index` and re-pack, keeping ordinal positions
    /// contiguous at 0..N-1. Returns the removed record.
    pub fn delete(&self, index: usize) -> AppResult<ProjectRecord> {
        let mut records = self.load()?;
        if index >= records.len() {
            return Err(AppError::InvalidRow(index));
        }
        let removed = records.remove(index);
        self.save(&records)?;
        Ok(removed)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "store".to_string());
        name.push_str(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::env;

    fn temp_store(name: &str) -> ProjectStore {
        let mut p = env::temp_dir();
        p.push(format!("{}_projtrack_store.xlsx", name));
        let _ = fs::remove_file(&p);
        ProjectStore::new(p)
    }

    fn record(code: &str, year: i32) -> ProjectRecord {
        ProjectRecord {
            year,
            code: code.into(),
            name: format!("Project {code}"),
            location: "NYC".into(),
            start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            team: "alice, Bob".into(),
        }
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let store = temp_store("schema");
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_all_fields() {
        let store = temp_store("round_trip");
        let records = vec![record("A", 2023), record("B", 2024), record("C", 2025)];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn append_returns_new_ordinal() {
        let store = temp_store("append");
        assert_eq!(store.append(record("A", 2024)).unwrap(), 0);
        assert_eq!(store.append(record("B", 2024)).unwrap(), 1);
    }

    #[test]
    fn delete_re_packs_ordinals() {
        let store = temp_store("repack");
        store
            .save(&[record("A", 2024), record("B", 2024), record("C", 2024)])
            .unwrap();

        let removed = store.delete(1).unwrap();
        assert_eq!(removed.code, "B");

        let after = store.load().unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].code, "A");
        assert_eq!(after[1].code, "C");
    }

    #[test]
    fn update_replaces_only_target_row() {
        let store = temp_store("update");
        store.save(&[record("A", 2024), record("B", 2024)]).unwrap();

        let mut edited = record("B", 2025);
        edited.location = "Berlin".into();
        store.update(1, edited.clone()).unwrap();

        let after = store.load().unwrap();
        assert_eq!(after[0], record("A", 2024));
        assert_eq!(after[1], edited);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let store = temp_store("bad_index");
        store.save(&[record("A", 2024)]).unwrap();
        assert!(matches!(store.delete(5), Err(AppError::InvalidRow(5))));
        assert!(matches!(
            store.update(2, record("X", 2024)),
            Err(AppError::InvalidRow(2))
        ));
    }
}
