use crate::chunk::RawChunk;
use crate::error::PngError;
use crate::PngResult;
use std::fmt;

/// The parsed contents of an IHDR chunk.
#[derive(Debug, Clone, Copy)]
pub struct PngHeader {
  pub width: u32,
  pub height: u32,
  pub bit_depth: u8,
  pub color_type: PngColorType,
  pub compression_method: PngCompressionMethod,
  pub filter_method: PngFilterMethod,
  pub interlace_method: PngInterlaceMethod,
}
impl PngHeader {
  /// Parses an already-validated IHDR chunk's 13-byte payload.
  pub(crate) fn from_ihdr_chunk(chunk: &RawChunk<'_>) -> PngResult<Self> {
    if chunk.chunk_data.len() != 13 {
      return Err(PngError::InvalidChunkLength);
    }
    let width = u32::from_be_bytes(chunk.chunk_data[0..4].try_into().unwrap());
    let height = u32::from_be_bytes(chunk.chunk_data[4..8].try_into().unwrap());
    let bit_depth = chunk.chunk_data[8];
    let color_type = PngColorType(chunk.chunk_data[9]);
    let compression_method = PngCompressionMethod(chunk.chunk_data[10]);
    let filter_method = PngFilterMethod(chunk.chunk_data[11]);
    let interlace_method = PngInterlaceMethod(chunk.chunk_data[12]);
    Ok(Self { width, height, bit_depth, color_type, compression_method, filter_method, interlace_method })
  }

  /// Bytes per pixel for this profile's supported color types (0 if
  /// unsupported; the caller checks `color_type`/`bit_depth` before relying
  /// on this).
  pub(crate) fn bytes_per_pixel(&self) -> usize {
    match self.color_type {
      PngColorType::RGB => 3,
      PngColorType::RGBA => 4,
      _ => 0,
    }
  }

  /// Total size of the filtered (pre-defilter) scanline stream: one filter
  /// byte plus `width * bpp` pixel bytes, per row.
  pub(crate) fn filtered_size(&self) -> Option<usize> {
    let bpp = self.bytes_per_pixel();
    if bpp == 0 {
      return None;
    }
    let row_bytes = (self.width as usize).checked_mul(bpp)?.checked_add(1)?;
    row_bytes.checked_mul(self.height as usize)
  }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PngColorType(pub(crate) u8);
impl PngColorType {
  pub const GRAYSCALE: Self = Self(0);
  pub const RGB: Self = Self(2);
  pub const INDEXED: Self = Self(3);
  pub const GRAYSCALE_ALPHA: Self = Self(4);
  pub const RGBA: Self = Self(6);
}
impl fmt::Debug for PngColorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::GRAYSCALE => write!(f, "Grayscale"),
      Self::RGB => write!(f, "Rgb"),
      Self::INDEXED => write!(f, "Indexed"),
      Self::GRAYSCALE_ALPHA => write!(f, "GrayscaleAlpha"),
      Self::RGBA => write!(f, "Rgba"),
      other => write!(f, "Illegal({})", other.0),
    }
  }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PngCompressionMethod(pub(crate) u8);
impl PngCompressionMethod {
  pub const DEFLATE: Self = Self(0);
}
impl fmt::Debug for PngCompressionMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::DEFLATE => write!(f, "Deflate"),
      other => write!(f, "Illegal({})", other.0),
    }
  }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PngFilterMethod(pub(crate) u8);
impl PngFilterMethod {
  pub const ADAPTIVE: Self = Self(0);
}
impl fmt::Debug for PngFilterMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::ADAPTIVE => write!(f, "Adaptive"),
      other => write!(f, "Illegal({})", other.0),
    }
  }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PngInterlaceMethod(pub(crate) u8);
impl PngInterlaceMethod {
  pub const NO_INTERLACE: Self = Self(0);
  pub const ADAM7: Self = Self(1);
}
impl fmt::Debug for PngInterlaceMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::NO_INTERLACE => write!(f, "NoInterlace"),
      Self::ADAM7 => write!(f, "Adam7"),
      other => write!(f, "Illegal({})", other.0),
    }
  }
}
