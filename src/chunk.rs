use crate::crc32::crc32_of;
use std::fmt;

/// A 4-byte chunk type code, e.g. `IHDR` or `IDAT`.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) struct ChunkType(pub(crate) [u8; 4]);
impl ChunkType {
  pub const IHDR: Self = ChunkType(*b"IHDR");
  pub const IDAT: Self = ChunkType(*b"IDAT");
  pub const IEND: Self = ChunkType(*b"IEND");
}
impl fmt::Debug for ChunkType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [a, b, c, d] = self.0;
    write!(f, "{}{}{}{}", a as char, b as char, c as char, d as char)
  }
}

/// One chunk of a PNG chunk stream, borrowed from the input buffer.
#[derive(Debug, Copy, Clone)]
pub(crate) struct RawChunk<'b> {
  pub(crate) chunk_type: ChunkType,
  pub(crate) chunk_data: &'b [u8],
  pub(crate) declared_crc: u32,
}
impl<'b> RawChunk<'b> {
  /// Recomputes the CRC-32 over `type ‖ data` for comparison against
  /// `declared_crc`.
  pub(crate) fn actual_crc(&self) -> u32 {
    let mut bytes = Vec::with_capacity(4 + self.chunk_data.len());
    bytes.extend_from_slice(&self.chunk_type.0);
    bytes.extend_from_slice(self.chunk_data);
    crc32_of(&bytes)
  }
}
