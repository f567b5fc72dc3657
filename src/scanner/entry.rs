use super::ScanError;
use std::fs;
use std::path::PathBuf;

/// Metadata for a single candidate ROM image found during a scan
#[derive(Debug, Clone)]
pub struct RomEntry {
    /// File name (final path component), lossily decoded for display
    pub name: String,
    /// Full path used for reads
    pub path: PathBuf,
    /// Size in bytes as reported by file metadata
    pub size: u64,
}

impl RomEntry {
    /// Read the entire file content.
    ///
    /// The handle is opened and released inside this call. Any read
    /// failure (missing file, permissions, or the entry being a
    /// directory) is fatal to the run; there is no per-file recovery.
    pub fn read_bytes(&self) -> Result<Vec<u8>, ScanError> {
        fs::read(&self.path).map_err(|source| ScanError::Read {
            path: self.path.clone(),
            source,
        })
    }
}
