//! Monthly record repository for JSON storage
//!
//! Holds every month's record in insertion order and persists them to
//! mess.json as a single array. At most one record exists per month.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::error::MessError;
use crate::models::{MonthKey, MonthlyRecord};

use super::file_io::{quarantine, read_json, write_json_atomic};

/// Repository for monthly record persistence
pub struct RecordRepository {
    path: PathBuf,
    records: RwLock<Vec<MonthlyRecord>>,
}

impl RecordRepository {
    /// Create a new record repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load records from disk
    ///
    /// A missing file yields an empty store. An unreadable or unparseable file
    /// also yields an empty store: the failure is logged and the file is moved
    /// to `mess.json.corrupt`, never reported to the caller.
    pub fn load(&self) -> Result<(), MessError> {
        let loaded: Vec<MonthlyRecord> = match read_json(&self.path) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "stored mess data is unreadable, starting empty");
                match quarantine(&self.path) {
                    Ok(moved) => warn!(path = %moved.display(), "moved unreadable data aside"),
                    Err(e) => warn!(error = %e, "could not move unreadable data aside"),
                }
                Vec::new()
            }
        };

        let mut unique: Vec<MonthlyRecord> = Vec::with_capacity(loaded.len());
        for record in loaded {
            if unique.iter().any(|r| r.month == record.month) {
                warn!(month = %record.month, "ignoring duplicate record for month");
                continue;
            }
            unique.push(record);
        }

        debug!(count = unique.len(), path = %self.path.display(), "loaded monthly records");

        let mut records = self
            .records
            .write()
            .map_err(|e| MessError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *records = unique;

        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), MessError> {
        let records = self
            .records
            .read()
            .map_err(|e| MessError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*records)?;
        debug!(count = records.len(), path = %self.path.display(), "saved monthly records");
        Ok(())
    }

    /// Get the record for a month, if one exists
    pub fn get(&self, month: MonthKey) -> Result<Option<MonthlyRecord>, MessError> {
        let records = self
            .records
            .read()
            .map_err(|e| MessError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|r| r.month == month).cloned())
    }

    /// Get the record for a month, creating an empty one if absent
    pub fn get_or_create(&self, month: MonthKey) -> Result<MonthlyRecord, MessError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| MessError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(existing) = records.iter().find(|r| r.month == month) {
            return Ok(existing.clone());
        }

        debug!(%month, "creating record for month");
        let record = MonthlyRecord::empty(month);
        records.push(record.clone());
        Ok(record)
    }

    /// Replace the record for its month, appending it if the month is new
    pub fn replace(&self, record: MonthlyRecord) -> Result<(), MessError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| MessError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match records.iter_mut().find(|r| r.month == record.month) {
            Some(slot) => *slot = record,
            None => records.push(record),
        }
        Ok(())
    }

    /// Get all records in chronological order
    pub fn get_all(&self) -> Result<Vec<MonthlyRecord>, MessError> {
        let records = self
            .records
            .read()
            .map_err(|e| MessError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut all = records.clone();
        all.sort_by_key(|r| r.month);
        Ok(all)
    }

    pub fn count(&self) -> Result<usize, MessError> {
        let records = self
            .records
            .read()
            .map_err(|e| MessError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, SharedCategory};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, RecordRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mess.json");
        let repo = RecordRepository::new(path);
        (temp_dir, repo)
    }

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_corrupted_file_loads_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(repo.path(), "{ this is not [ json").unwrap();

        repo.load().unwrap();

        assert_eq!(repo.count().unwrap(), 0);
        assert!(temp_dir.path().join("mess.json.corrupt").exists());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(repo.path(), r#"{"month": "Sep-25"}"#).unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_or_create() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert!(repo.get(month("Sep-25")).unwrap().is_none());

        let created = repo.get_or_create(month("Sep-25")).unwrap();
        assert_eq!(created, MonthlyRecord::empty(month("Sep-25")));
        assert_eq!(repo.count().unwrap(), 1);

        repo.get_or_create(month("Sep-25")).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_replace_keeps_one_record_per_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = repo.get_or_create(month("Sep-25")).unwrap();
        let updated = record.with_member_added(Member::new("Rahim"));
        repo.replace(updated.clone()).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(month("Sep-25")).unwrap().unwrap(), updated);

        repo.replace(MonthlyRecord::empty(month("Oct-25"))).unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = MonthlyRecord::empty(month("Sep-25"))
            .with_member_added(Member::new("Rahim"))
            .with_shared_expense(SharedCategory::Gas, 120.0);
        repo.replace(record.clone()).unwrap();
        repo.replace(MonthlyRecord::empty(month("Aug-25"))).unwrap();
        repo.save().unwrap();

        let repo2 = RecordRepository::new(temp_dir.path().join("mess.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 2);
        assert_eq!(repo2.get(month("Sep-25")).unwrap().unwrap(), record);
        assert_eq!(
            repo2
                .get_all()
                .unwrap()
                .iter()
                .map(|r| r.month)
                .collect::<Vec<_>>(),
            vec![month("Aug-25"), month("Sep-25")]
        );
    }

    #[test]
    fn test_duplicate_months_keep_first() {
        let (_temp_dir, repo) = create_test_repo();
        let blob = r#"[
            {"month": "Sep-25", "members": [], "sharedExpenses": {"bua": 1, "wifi": 0, "electricity": 0, "gas": 0, "other": 0}},
            {"month": "Sep-25", "members": [], "sharedExpenses": {"bua": 2, "wifi": 0, "electricity": 0, "gas": 0, "other": 0}}
        ]"#;
        std::fs::write(repo.path(), blob).unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        let record = repo.get(month("Sep-25")).unwrap().unwrap();
        assert_eq!(record.shared_expenses.bua, 1.0);
    }

    #[test]
    fn test_reads_persisted_layout() {
        let (_temp_dir, repo) = create_test_repo();
        let blob = r#"[{
            "month": "Sep-25",
            "members": [
                {"id": "550e8400-e29b-41d4-a716-446655440000", "name": "Rahim", "meals": 40.5, "bazarCost": 2000}
            ],
            "sharedExpenses": {"bua": 500, "wifi": 200, "electricity": 300, "gas": 100, "other": 0}
        }]"#;
        std::fs::write(repo.path(), blob).unwrap();

        repo.load().unwrap();
        let record = repo.get(month("Sep-25")).unwrap().unwrap();
        assert_eq!(record.members[0].meals, 40.5);
        assert_eq!(record.shared_expenses.total(), 1100.0);
    }

    #[test]
    fn test_non_uuid_member_ids_load() {
        let (temp_dir, repo) = create_test_repo();
        let blob = r#"[
            {"month": "Aug-25", "members": [{"id": "m-1", "name": "Rahim", "meals": 10, "bazarCost": 300}]},
            {"month": "Sep-25", "members": [{"id": "550e8400-e29b-41d4-a716-446655440000", "name": "Karim", "meals": 5, "bazarCost": 0}]}
        ]"#;
        std::fs::write(repo.path(), blob).unwrap();

        repo.load().unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        assert!(!temp_dir.path().join("mess.json.corrupt").exists());
        let aug = repo.get(month("Aug-25")).unwrap().unwrap();
        assert_eq!(aug.members[0].id.as_str(), "m-1");
        assert_eq!(aug.find_member("m-1").unwrap().name, "Rahim");

        repo.save().unwrap();
        let saved = std::fs::read_to_string(repo.path()).unwrap();
        assert!(saved.contains(r#""id": "m-1""#));
    }
}
