// Public API exports
pub mod checksum;
pub mod fingerprint;
pub mod report;
pub mod scanner;

// Re-export main types for convenience
pub use scanner::{DirectoryScanner, RomEntry, ScanError, DEFAULT_EXCLUDED};

pub use checksum::crc32;

pub use fingerprint::{data2n_offsets, Data2n};

pub use report::{write_reports, RomReport};
