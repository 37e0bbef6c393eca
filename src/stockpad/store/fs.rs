use super::{decode_products, encode_products, DataStore};
use crate::error::{Result, StockError};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// File-backed catalog storage.
///
/// The file is opened and closed on every call; no handle is held between
/// operations.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the content of a corrupt data file would be preserved next:
    /// `<file>.corrupt`, or `<file>.corrupt.N` with the first free `N` once
    /// earlier backups exist. Existing backups are never reused.
    pub fn corrupt_backup_path(&self) -> PathBuf {
        let base = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        let mut n = 0u32;
        loop {
            let mut name = base.clone();
            name.push(CORRUPT_SUFFIX);
            if n > 0 {
                name.push(format!(".{}", n));
            }
            let candidate = self.path.with_file_name(name);
            if !candidate.exists() {
                return candidate;
            }
            n += 1;
        }
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StockError::Io)?;
        }
        Ok(())
    }

    /// Copy an existing file that no longer parses out of harm's way before
    /// it gets overwritten.
    fn backup_if_corrupt(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let corrupt = match fs::read_to_string(&self.path) {
            Ok(content) => decode_products(&content).is_err(),
            Err(_) => true,
        };
        if corrupt {
            let backup = self.corrupt_backup_path();
            fs::copy(&self.path, &backup).map_err(StockError::Io)?;
            tracing::warn!(
                backup = %backup.display(),
                "existing data file did not parse, kept a copy"
            );
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_products(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(StockError::Io)?;
        let products = decode_products(&content)?;
        tracing::debug!(path = %self.path.display(), count = products.len(), "loaded products");
        Ok(products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;
        self.backup_if_corrupt()?;

        let content = encode_products(products)?;

        // Atomic write
        let tmp_file = dir.join(format!(".products-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(StockError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(StockError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = products.len(), "saved products");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn corrupt_backup_location(&self) -> Option<String> {
        Some(self.corrupt_backup_path().display().to_string())
    }
}
