//! The record store: the in-memory catalog and the file it is persisted to.
//!
//! The store is the only owner of catalog state. Queries borrow its records,
//! and the removal flow hands confirmed deletions back to [`CatalogStore::remove`],
//! which rewrites the whole file before touching memory. A failed write
//! therefore leaves memory and disk in agreement.
//!
//! Rows skipped at load are kept as read and appended to every rewrite, so
//! editing the catalog never drops a line the user has yet to fix.

use std::fs::{self, File, OpenOptions};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::error::{CatalogError, Result};
use crate::io::{read_catalog, write_catalog, write_catalog_with_skipped, RowWarning};
use crate::models::ManualRecord;

#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: Option<PathBuf>,
    records: Vec<ManualRecord>,
    skipped: Vec<csv::ByteRecord>,
}

impl CatalogStore {
    /// Store with no backing file. Removals only change memory.
    pub fn in_memory(records: Vec<ManualRecord>) -> Self {
        Self {
            path: None,
            records,
            skipped: Vec::new(),
        }
    }

    /// Load the catalog at `path`, creating a header-only file (and its
    /// parent directories) when it does not exist yet.
    ///
    /// Skipped rows are returned alongside the store so the caller can show
    /// them; only unreadable files and a missing `title` column are fatal.
    pub fn open(path: impl AsRef<Path>) -> Result<(Self, Vec<RowWarning>)> {
        let path = path.as_ref();

        if path.is_dir() {
            return Err(CatalogError::IsDirectory(path.to_path_buf()));
        }

        if !path.exists() {
            info!("Catalog {} not found, creating an empty one", path.display());
            if let Some(parent) = parent_dir(path) {
                if !parent.exists() {
                    fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
                    info!("Created directory: {}", parent.display());
                }
            }
            create_empty(path)?;
        }

        let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
        let (records, warnings) = read_catalog(BufReader::new(file))?;

        info!(
            "Loaded {} manuals from {} ({} rows skipped)",
            records.len(),
            path.display(),
            warnings.len()
        );

        let store = Self {
            path: Some(path.to_path_buf()),
            records,
            skipped: warnings.iter().map(|w| w.raw.clone()).collect(),
        };
        Ok((store, warnings))
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn records(&self) -> &[ManualRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows skipped at load, as read. They are written back after the records.
    pub fn skipped_rows(&self) -> &[csv::ByteRecord] {
        &self.skipped
    }

    /// Rewrite the backing file from memory
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => write_atomically(path, &self.records, &self.skipped),
            None => Ok(()),
        }
    }

    /// Remove the first record equal in content to `target` and persist.
    ///
    /// Returns `Ok(false)` when no such record exists. If the rewrite fails
    /// the record stays in memory and the error is returned.
    pub fn remove(&mut self, target: &ManualRecord) -> Result<bool> {
        let Some(index) = self.records.iter().position(|r| r == target) else {
            debug!("Nothing to remove for '{}'", target.title());
            return Ok(false);
        };

        let mut remaining = self.records.clone();
        remaining.remove(index);

        if let Some(path) = &self.path {
            if let Err(e) = write_atomically(path, &remaining, &self.skipped) {
                warn!("Failed to save catalog after removing '{}': {e}", target.title());
                return Err(e);
            }
        }

        self.records = remaining;
        info!(
            "Removed '{}', {} manuals remain",
            target.title(),
            self.records.len()
        );
        Ok(true)
    }
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Create a header-only catalog. The file gets the process's default
/// permissions, and an existing file is never overwritten.
fn create_empty(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| CatalogError::io(path, e))?;

    write_catalog(&file, &[])?;
    file.sync_all().map_err(|e| CatalogError::io(path, e))?;

    debug!("Created empty catalog {}", path.display());
    Ok(())
}

/// Write the catalog to a temp file next to the catalog, then rename it over
/// the catalog. Readers never observe a half-written catalog.
///
/// The temp file takes the permissions of the file it replaces. If `path` is
/// a symlink, the file it points to is replaced and the link is left alone.
fn write_atomically(
    path: &Path,
    records: &[ManualRecord],
    skipped: &[csv::ByteRecord],
) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = parent_dir(&target).unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CatalogError::io(dir, e))?;

    write_catalog_with_skipped(&mut tmp, records, skipped)?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| CatalogError::io(tmp.path(), e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        if let Err(e) = tmp.as_file().set_permissions(metadata.permissions()) {
            debug!("Could not copy permissions to temp file: {e}");
        }
    }

    tmp.persist(&target)
        .map_err(|e| CatalogError::io(&target, e.error))?;

    debug!(
        "Wrote {} records and {} skipped rows to {}",
        records.len(),
        skipped.len(),
        target.display()
    );
    Ok(())
}
