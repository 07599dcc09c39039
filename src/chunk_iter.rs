use crate::chunk::{ChunkType, RawChunk};
use crate::error::PngError;
use crate::PngResult;

pub(crate) const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Walks the chunk stream of a PNG file, one chunk per `next()` call.
///
/// Constructed from the bytes that follow the 8-byte signature; the caller
/// is expected to have already checked and stripped the signature.
pub(crate) struct RawChunkIter<'b> {
  bytes: &'b [u8],
  done: bool,
}
impl<'b> RawChunkIter<'b> {
  pub(crate) fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, done: false }
  }
}
impl<'b> Iterator for RawChunkIter<'b> {
  type Item = PngResult<RawChunk<'b>>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    if self.bytes.is_empty() {
      return None;
    }
    if self.bytes.len() < 8 {
      self.done = true;
      return Some(Err(PngError::FileTooShort));
    }
    let length = u32::from_be_bytes(self.bytes[0..4].try_into().unwrap());
    let chunk_type = ChunkType(self.bytes[4..8].try_into().unwrap());
    let rest = &self.bytes[8..];
    let length_usize = length as usize;
    if rest.len() < length_usize + 4 {
      self.done = true;
      return Some(Err(PngError::InvalidChunkLength));
    }
    let chunk_data = &rest[..length_usize];
    let declared_crc = u32::from_be_bytes(rest[length_usize..length_usize + 4].try_into().unwrap());
    self.bytes = &rest[length_usize + 4..];
    Some(Ok(RawChunk { chunk_type, chunk_data, declared_crc }))
  }
}

/// Checks and strips the fixed 8-byte PNG signature.
pub(crate) fn strip_signature(bytes: &[u8]) -> PngResult<&[u8]> {
  if bytes.len() < 8 {
    return Err(PngError::FileTooShort);
  }
  if bytes[..8] != PNG_SIGNATURE {
    return Err(PngError::InvalidSignature);
  }
  Ok(&bytes[8..])
}
