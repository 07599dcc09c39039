//! The decode façade: sequences chunk parsing, inflation, and defiltering.

use crate::defilter::defilter;
use crate::error::PngError;
use crate::header::{PngColorType, PngHeader, PngInterlaceMethod};
use crate::inflate::inflate_idat;
use crate::parser::parse_chunks;
use crate::pixel::{Rgb8, Rgba8};
use crate::PngResult;

/// A decoded image: its dimensions, row stride, and owned pixel bytes.
///
/// `pixels` is row-major with no row padding (`stride == width * bpp`).
/// `srgb` is always `true` in this profile — no gAMA/iCCP/sRGB chunk is
/// interpreted, so every decoded image is treated as sRGB.
#[derive(Debug, Clone)]
pub struct DecodedImage {
  pub width: u32,
  pub height: u32,
  pub stride: usize,
  pub srgb: bool,
  pub pixels: Vec<u8>,
}
impl DecodedImage {
  /// Reinterprets the pixel buffer as `Rgb8` pixels.
  ///
  /// Panics (via `bytemuck::cast_slice`) if this image isn't 3 bytes per
  /// pixel; check `stride == width as usize * 3` first, or just call this
  /// only on an image you decoded from an RGB PNG.
  pub fn as_rgb8(&self) -> &[Rgb8] {
    bytemuck::cast_slice(&self.pixels)
  }

  /// Reinterprets the pixel buffer as `Rgba8` pixels. See [`Self::as_rgb8`].
  pub fn as_rgba8(&self) -> &[Rgba8] {
    bytemuck::cast_slice(&self.pixels)
  }
}

/// Decodes a PNG from memory into an owned pixel buffer.
pub fn decode(bytes: &[u8]) -> PngResult<DecodedImage> {
  let parsed = parse_chunks(bytes)?;
  let header = parsed.header;

  if header.interlace_method != PngInterlaceMethod::NO_INTERLACE {
    return Err(PngError::UnsupportedCompressionFilter);
  }
  if header.bit_depth != 8 {
    return Err(PngError::UnsupportedBitDepth);
  }
  if header.color_type != PngColorType::RGB && header.color_type != PngColorType::RGBA {
    return Err(PngError::UnsupportedColorType);
  }

  crate::trace!("decoding {}x{} color_type={:?}", header.width, header.height, header.color_type);

  let mut idat_concat = Vec::new();
  for span in &parsed.idat_spans {
    idat_concat.extend_from_slice(span);
  }

  let bpp = header.bytes_per_pixel();
  let filtered_size = header.filtered_size().ok_or(PngError::InvalidIdatStream)?;
  let mut filtered = inflate_idat(&idat_concat, filtered_size)?;
  let pixels = defilter(&mut filtered, header.width, header.height, bpp)?;

  Ok(DecodedImage {
    width: header.width,
    height: header.height,
    stride: header.width as usize * bpp,
    srgb: true,
    pixels,
  })
}

/// Parses only through IHDR, but still walks (and fully validates) the rest
/// of the chunk stream — a bad CRC, missing IEND, or missing IDAT still
/// surfaces here. Only the IDAT payloads' zlib/DEFLATE contents are left
/// unexamined.
pub fn read_header(bytes: &[u8]) -> PngResult<PngHeader> {
  Ok(parse_chunks(bytes)?.header)
}
