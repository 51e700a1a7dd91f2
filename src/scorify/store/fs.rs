use super::DataStore;
use crate::error::Result;
use crate::formats::json;
use crate::model::Sale;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ledger stored as one pretty-printed JSON file.
///
/// Saves overwrite the file in place. There is no temp file or backup, so an
/// interrupted write can leave a truncated document behind.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_sales(&self) -> Result<Option<Vec<Sale>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no sales file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let sales = json::from_str(&content)?;
        debug!(path = %self.path.display(), count = sales.len(), "loaded sales");
        Ok(Some(sales))
    }

    fn save_sales(&mut self, sales: &[Sale]) -> Result<()> {
        self.ensure_parent()?;
        let content = json::to_string(sales)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = sales.len(), "saved sales");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScorifyError;
    use crate::model::SaleDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("sales.json"));
        (dir, store)
    }

    fn sales() -> Vec<Sale> {
        let mut sold = Sale::new(2, 5.5, "Chair".into(), vec![], SaleDate::new(2024, 2, 29));
        sold.sold = true;
        vec![
            Sale::new(
                1,
                19.99,
                "Widget".into(),
                vec!["a".into(), "b".into()],
                SaleDate::new(2024, 1, 15),
            ),
            sold,
        ]
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_dir, store) = setup();
        assert!(store.load_sales().unwrap().is_none());
    }

    #[test]
    fn save_then_load_is_lossless() {
        let (_dir, mut store) = setup();
        store.save_sales(&sales()).unwrap();
        assert_eq!(store.load_sales().unwrap(), Some(sales()));
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, mut store) = setup();
        store.save_sales(&sales()).unwrap();
        store.save_sales(&[]).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn malformed_file_errors_and_stays_on_disk() {
        let (_dir, store) = setup();
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load_sales().unwrap_err();
        assert!(matches!(err, ScorifyError::Serialization(_)));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ not json");
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be
        let store = FileStore::new(dir.path());
        assert!(matches!(store.load_sales(), Err(ScorifyError::Io(_))));
    }

    #[test]
    fn save_to_directory_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(matches!(store.save_sales(&sales()), Err(ScorifyError::Io(_))));
        assert!(dir.path().is_dir());
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/sales.json"));
        store.save_sales(&sales()).unwrap();
        assert!(store.path().exists());
    }
}
