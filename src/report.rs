use crate::checksum::crc32;
use crate::fingerprint::Data2n;
use crate::scanner::{DirectoryScanner, ScanError};
use std::fmt;
use std::io::Write;

/// One report line for one ROM image
#[derive(Debug, Clone)]
pub struct RomReport {
    /// File name as listed
    pub name: String,
    /// CRC32 of the complete file content
    pub crc: u32,
    /// Byte values at the power-of-2 offsets
    pub data2n: Data2n,
}

impl RomReport {
    /// Build a report from a file's name and complete content.
    ///
    /// The checksum and the sample both come from the same in-memory
    /// buffer; the checksum always covers every byte.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            crc: crc32(bytes),
            data2n: Data2n::sample(bytes),
        }
    }
}

impl fmt::Display for RomReport {
    /// `File: <name> | CRC: 0x<hex> | {0x..,0x..}`
    ///
    /// The CRC renders at its natural width, lowercase, never padded to
    /// eight digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File: {} | CRC: 0x{:x} | {}", self.name, self.crc, self.data2n)
    }
}

/// Run a full scan: one report line per qualifying entry, in listing
/// order, followed by a terminating `Done` line.
///
/// The first enumeration, read, or write failure aborts the run; lines
/// already written stay written.
pub fn write_reports<W: Write>(scanner: &DirectoryScanner, out: &mut W) -> Result<(), ScanError> {
    for entry in scanner.entries()? {
        let bytes = entry.read_bytes()?;
        let report = RomReport::from_bytes(entry.name, &bytes);
        writeln!(out, "{}", report)?;
    }

    writeln!(out, "Done")?;
    Ok(())
}
