//! Directory-of-files store for native builds
//!
//! Each key lives in `<dir>/<key>.json`. Writes go through a uniquely named
//! temp file in the same directory that is persisted over the target, so a
//! value is never left half-written.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        log::info!("File store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "key is not a plain file name".to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("data")).unwrap();

        assert_eq!(store.get_item("students").unwrap(), None);
        store.set_item("students", "[]").unwrap();
        assert_eq!(store.get_item("students").unwrap().as_deref(), Some("[]"));
        // Only the value file is left behind
        let names: Vec<_> = fs::read_dir(dir.path().join("data"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("students.json")]);

        // A second handle on the same directory sees the data
        let reopened = FileStore::open(store.dir().to_path_buf()).unwrap();
        assert_eq!(reopened.get_item("students").unwrap().as_deref(), Some("[]"));

        store.remove_item("students").unwrap();
        store.remove_item("students").unwrap();
        assert_eq!(store.get_item("students").unwrap(), None);
    }

    #[test]
    fn test_two_handles_write_same_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = FileStore::open(dir.path()).unwrap();
        let mut second = FileStore::open(dir.path()).unwrap();

        first.set_item("students", "[1]").unwrap();
        second.set_item("students", "[2]").unwrap();
        first.set_item("dtaList", "[]").unwrap();

        assert_eq!(first.get_item("students").unwrap().as_deref(), Some("[2]"));
        assert_eq!(second.get_item("dtaList").unwrap().as_deref(), Some("[]"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set_item("../escape", "x"),
            Err(StoreError::Write { .. })
        ));
        assert!(store.get_item("").is_err());
    }
}
