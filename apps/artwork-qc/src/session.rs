//! Review session persistence
//!
//! The reference specification for a review is kept in a `ReviewSession`.
//! Storage goes through the `SessionStore` trait so callers decide where
//! (and whether) sessions live.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ReferenceField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSession {
    pub model_id: String,
    #[serde(default)]
    pub reference_fields: Vec<ReferenceField>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReviewSession {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            reference_fields: Vec::new(),
            updated_at: None,
        }
    }

    /// Replace the whole reference set; it is never patched field by field
    pub fn replace_reference_fields(&mut self, fields: Vec<ReferenceField>, now: DateTime<Utc>) {
        self.reference_fields = fields;
        self.updated_at = Some(now);
    }
}

/// Load/save interface for review sessions
pub trait SessionStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<ReviewSession>, SessionError>;

    fn save(&self, session: &ReviewSession) -> Result<(), SessionError>;
}

/// Session kept as pretty-printed JSON on disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Option<ReviewSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, session: &ReviewSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-process store, for tests and embedding
#[derive(Default)]
pub struct MemoryStore {
    session: Mutex<Option<ReviewSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<ReviewSession>, SessionError> {
        let guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, session: &ReviewSession) -> Result<(), SessionError> {
        let mut guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use shared_types::{FieldCategory, FieldRecord};

    fn sample_session() -> ReviewSession {
        let mut session = ReviewSession::new("vision-large");
        session.replace_reference_fields(
            vec![FieldRecord::new("Net Weight", "340g (12oz)", FieldCategory::Specs)],
            Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
        );
        session
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut session = sample_session();
        session.replace_reference_fields(
            vec![FieldRecord::new("Brand", "Acme", FieldCategory::Content)],
            Utc::now(),
        );
        assert_eq!(session.reference_fields.len(), 1);
        assert_eq!(session.reference_fields[0].key, "Brand");
    }

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_round_trip_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/session.json"));
        let session = sample_session();

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn test_file_store_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, SessionError::Json(_)));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&sample_session()).unwrap();
        assert_eq!(store.load().unwrap().unwrap().model_id, "vision-large");
    }
}
