//! JSON file persistence for the inventory mapping.
//!
//! The file is a single JSON object of item name → integer quantity, e.g.
//! `{"apple": 7, "banana": 2}`. Saves overwrite in place; there is no
//! temp-file/rename step, so a crash mid-write can leave a truncated file.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockkeep_core::{ItemName, Quantity};

use crate::store::InventoryStore;

/// File used when the caller does not name one.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Result of a load that did not fail hard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and replaced the mapping. `skipped` counts entries
    /// whose key was blank and could not become an item.
    Loaded { items: usize, skipped: usize },
    /// No file at the path; the mapping was reset to empty.
    Missing,
    /// The file could not be interpreted; the mapping was reset to empty.
    Corrupt { reason: String },
}

/// Persistence failures that propagate to the caller.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("inventory file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PersistenceError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl InventoryStore {
    /// Replace the mapping with the contents of `path`.
    ///
    /// A missing or unparsable file resets the mapping to empty and is
    /// reported through the returned outcome. Blank keys in an otherwise
    /// valid file are dropped and counted; the remaining entries still load.
    /// Any other I/O failure is an error and leaves the mapping untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, PersistenceError> {
        let path = path.as_ref();

        let bytes = match read_file(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.clear();
                return Ok(LoadOutcome::Missing);
            }
            Err(err) => return Err(PersistenceError::io(path, err)),
        };

        match serde_json::from_slice::<BTreeMap<String, Quantity>>(&bytes) {
            Ok(raw) => {
                let mut items = BTreeMap::new();
                let mut skipped = 0;
                for (name, qty) in raw {
                    match ItemName::parse(name) {
                        Ok(name) => {
                            items.insert(name, qty);
                        }
                        Err(_) => skipped += 1,
                    }
                }
                let count = items.len();
                self.replace_all(items);
                Ok(LoadOutcome::Loaded {
                    items: count,
                    skipped,
                })
            }
            Err(err) => {
                self.clear();
                Ok(LoadOutcome::Corrupt {
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Write the mapping to `path` as indented JSON, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self)?;
        write_file(path, &json).map_err(|err| PersistenceError::io(path, err))
    }
}

// The handle is dropped (closed) when these return, on success and on error.
fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.write_all(b"\n")?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_file_is_an_indented_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut store = InventoryStore::new();
        store.add("banana", 2).unwrap();
        store.add("apple", 7).unwrap();
        store.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"apple\": 7,\n  \"banana\": 2\n}\n");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "{\"old\": 1, \"stale\": 2, \"entries\": 3}").unwrap();

        let mut store = InventoryStore::new();
        store.add("new", 4).unwrap();
        store.save(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"new": 4}));
    }

    #[test]
    fn save_into_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("inventory.json");

        let err = InventoryStore::new().save(&path).unwrap_err();
        match err {
            PersistenceError::Io { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new();
        store.add("apple", 1).unwrap();

        let outcome = store.load(dir.path().join("absent.json")).unwrap();

        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(store.is_empty());
    }

    #[test]
    fn load_rejects_wrong_shapes_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        for content in [
            "{not json",
            "",
            "[1, 2, 3]",
            "{\"apple\": \"seven\"}",
            "{\"apple\": 2.5}",
        ] {
            std::fs::write(&path, content).unwrap();
            let mut store = InventoryStore::new();
            store.add("apple", 1).unwrap();

            let outcome = store.load(&path).unwrap();

            assert!(
                matches!(outcome, LoadOutcome::Corrupt { .. }),
                "expected corrupt outcome for {content:?}, got {outcome:?}"
            );
            assert!(store.is_empty());
        }
    }

    #[test]
    fn load_skips_blank_keys_and_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"": 3, "apple": 7, "   ": 1, "banana": 2}"#).unwrap();

        let mut store = InventoryStore::new();
        let outcome = store.load(&path).unwrap();

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                items: 2,
                skipped: 2,
            }
        );
        assert_eq!(store.quantity("apple"), 7);
        assert_eq!(store.quantity("banana"), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn load_rejects_invalid_utf8_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, [b'{', b'"', 0xff, 0xfe, b'"', b':', b'1', b'}']).unwrap();

        let mut store = InventoryStore::new();
        let outcome = store.load(&path).unwrap();
        assert!(matches!(outcome, LoadOutcome::Corrupt { .. }));
    }

    #[test]
    fn load_directory_is_an_io_error_and_keeps_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new();
        store.add("apple", 3).unwrap();

        let err = store.load(dir.path()).unwrap_err();

        assert!(matches!(err, PersistenceError::Io { .. }));
        assert_eq!(store.quantity("apple"), 3);
    }
}
