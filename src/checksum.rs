use crc32fast::Hasher;

/// Compute the CRC32 (IEEE) checksum of the full, untruncated content
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
