use std::fmt;

/// An error from decoding a PNG.
///
/// Every public entry point in this crate returns this single error type.
/// The inflater internally distinguishes many more failure shapes (a bad
/// zlib header, a corrupt Huffman code, an out-of-range back-reference, a
/// premature end of input, an Adler-32 mismatch, a wrong final size) but all
/// of those collapse to [`PngError::InvalidIdatStream`] at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PngError {
  /// The first 8 bytes of the input are not the PNG signature.
  InvalidSignature,
  /// The input ended in the middle of a chunk's length/type/data/crc fields.
  FileTooShort,
  /// A chunk declared a length that can't fit in the remaining input, or an
  /// IHDR chunk with a length other than 13.
  InvalidChunkLength,
  /// A chunk's declared CRC-32 didn't match the one computed over its data.
  CrcMismatch,
  /// The stream ended (or hit IEND) without ever containing an IHDR chunk.
  MissingIhdr,
  /// A second IHDR chunk appeared.
  DuplicateIhdr,
  /// A chunk appeared out of the order the format requires (an IDAT before
  /// IHDR, or after IEND).
  UnexpectedChunkOrder,
  /// The chunk stream ended without an IEND chunk.
  NoIend,
  /// The chunk stream contained no IDAT chunks at all.
  NoIdatChunks,
  /// The concatenated IDAT data failed to decompress: a malformed zlib
  /// header, an illegal DEFLATE block type, a corrupt Huffman code, an
  /// out-of-range length/distance pair, a premature end of input, an
  /// Adler-32 mismatch, or a final size that didn't match the header.
  InvalidIdatStream,
  /// The color type isn't one this crate decodes (only RGB and RGBA are
  /// supported).
  UnsupportedColorType,
  /// The bit depth isn't one this crate decodes (only 8 is supported).
  UnsupportedBitDepth,
  /// The IDAT stream uses a DEFLATE feature this crate's profile doesn't
  /// implement: a dynamic Huffman block, or a reserved block type.
  UnsupportedCompressionFilter,
  /// A scanline declared a filter type byte outside 0..=4.
  UnsupportedFilter,
}

impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::InvalidSignature => "invalid PNG signature",
      Self::FileTooShort => "input ended in the middle of a chunk",
      Self::InvalidChunkLength => "chunk declared an impossible length",
      Self::CrcMismatch => "chunk CRC-32 did not match its data",
      Self::MissingIhdr => "no IHDR chunk was present",
      Self::DuplicateIhdr => "more than one IHDR chunk was present",
      Self::UnexpectedChunkOrder => "a chunk appeared out of order",
      Self::NoIend => "stream ended without an IEND chunk",
      Self::NoIdatChunks => "stream contained no IDAT chunks",
      Self::InvalidIdatStream => "IDAT data failed to decompress",
      Self::UnsupportedColorType => "unsupported color type",
      Self::UnsupportedBitDepth => "unsupported bit depth",
      Self::UnsupportedCompressionFilter => "unsupported compression feature (dynamic Huffman)",
      Self::UnsupportedFilter => "unsupported scanline filter type",
    };
    f.write_str(s)
  }
}

impl std::error::Error for PngError {}
