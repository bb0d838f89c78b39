use crate::domain::{SlotStorage, StorageError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Keeps each slot as `<data_dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl SlotStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(StorageError::Corrupt(e.to_string())),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::Io(e.to_string()))?;

        let path = self.slot_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp_path, &path).map_err(|e| StorageError::Io(e.to_string()))
    }
}

/// In-memory slots. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A host with no persistence at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl SlotStorage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReservationDetails, ReservationStore, StoreError, DEFAULT_SLOT};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_absent_slot() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.get("reservations").unwrap(), None);
    }

    #[test]
    fn test_set_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested);

        storage.set("reservations", "[]").unwrap();

        assert_eq!(storage.data_dir(), nested.as_path());
        assert!(nested.join("reservations.json").exists());
        assert!(!nested.join("reservations.json.tmp").exists());
        assert_eq!(storage.get("reservations").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("slot", "first").unwrap();
        storage.set("slot", "second").unwrap();

        assert_eq!(storage.get("slot").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::create_dir(storage.slot_path("slot")).unwrap();

        assert!(matches!(storage.get("slot"), Err(StorageError::Io(_))));
    }

    #[test]
    fn test_non_utf8_slot_is_corrupt_and_replaced_on_create() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::write(storage.slot_path(DEFAULT_SLOT), [0xff, 0xfe, 0x5b, 0x5d]).unwrap();
        assert!(matches!(storage.get(DEFAULT_SLOT), Err(StorageError::Corrupt(_))));

        let store = ReservationStore::new(Box::new(storage));
        assert!(matches!(store.try_list(), Err(StoreError::CorruptData(_))));

        store.create(ReservationDetails::new("Ana", "0918", "2024-03-16 12:00", 2));

        let reservations = store.try_list().unwrap();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].name, "Ana");
    }

    #[test]
    fn test_reservations_survive_restart() {
        let dir = TempDir::new().unwrap();

        let store = ReservationStore::new(Box::new(FileStorage::new(dir.path())));
        store.initialize();
        store.create(ReservationDetails::new("Juan Dela Cruz", "09171234567", "2024-03-15 19:30", 4));
        let saved = store.list();
        drop(store);

        let reopened = ReservationStore::new(Box::new(FileStorage::new(dir.path())));
        reopened.initialize();
        assert_eq!(reopened.list(), saved);

        let content = fs::read_to_string(dir.path().join(format!("{}.json", DEFAULT_SLOT))).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json[0]["name"], "Juan Dela Cruz");
        assert!(json[0]["createdAt"].is_string());
    }

    #[test]
    fn test_memory_storage_clones_share_slots() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("slot", "value").unwrap();

        assert_eq!(other.get("slot").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_unavailable_storage_fails_everything() {
        assert_eq!(UnavailableStorage.get("slot"), Err(StorageError::Unavailable));
        assert_eq!(UnavailableStorage.set("slot", "[]"), Err(StorageError::Unavailable));
    }
}
