use std::fmt;

/// Offsets sampled from a file of `len` bytes: 1, 2, 4, 8, ... strictly
/// below `len`.
///
/// This is the "data2n" sequence in-circuit testers use for ROM address
/// bit checks: one byte per power-of-2 address line. Offset 0 is never
/// sampled, so files of size 0 or 1 yield an empty sequence.
pub fn data2n_offsets(len: u64) -> Vec<u64> {
    let mut offsets = Vec::new();
    let mut offset = 1;
    while offset < len {
        offsets.push(offset);
        offset *= 2;
    }
    offsets
}

/// The sampled byte values for one ROM image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data2n(Vec<u8>);

impl Data2n {
    /// Sample `bytes` at the data2n offsets
    pub fn sample(bytes: &[u8]) -> Self {
        let values = data2n_offsets(bytes.len() as u64)
            .into_iter()
            .map(|offset| bytes[offset as usize])
            .collect();
        Self(values)
    }

    pub fn values(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Data2n {
    /// `{0x42,0x43}`: two lowercase hex digits per value, `{}` when empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "0x{}", hex::encode([*byte]))?;
        }
        write!(f, "}}")
    }
}
