mod entry;
mod error;

#[cfg(test)]
mod tests;

pub use entry::RomEntry;
pub use error::ScanError;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Names every scan skips: directory markers and the macOS Finder
/// metadata file.
pub const DEFAULT_EXCLUDED: [&str; 3] = [".", "..", ".DS_Store"];

/// Enumerates the top level of a target directory, skipping excluded names
pub struct DirectoryScanner {
    root: PathBuf,
    excluded: HashSet<String>,
}

impl DirectoryScanner {
    /// Create a scanner for `root` with the default exclusion set
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add a file name to the exclusion set
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }

    /// The directory this scanner targets
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate qualifying entries in the order the directory walk
    /// yields them (OS-dependent, not sorted).
    ///
    /// No file-type filtering happens here: subdirectories and special
    /// files pass through and fail later at read time.
    pub fn entries(&self) -> Result<Vec<RomEntry>, ScanError> {
        let mut entries = Vec::new();

        for item in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let item = item.map_err(|source| ScanError::List {
                path: self.root.clone(),
                source,
            })?;

            let name = item.file_name().to_string_lossy().into_owned();
            if self.excluded.contains(&name) {
                continue;
            }

            let size = item
                .metadata()
                .map_err(|source| ScanError::Metadata {
                    path: item.path().to_path_buf(),
                    source,
                })?
                .len();

            entries.push(RomEntry {
                name,
                path: item.path().to_path_buf(),
                size,
            });
        }

        Ok(entries)
    }
}
