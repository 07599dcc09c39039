//! Helpers for building small, hand-constructed PNG files in tests, so the
//! suite never needs to check in binary fixtures. Every PNG built here uses
//! stored (uncompressed) DEFLATE blocks, since those are trivial to encode
//! by hand and exercise the same chunk/zlib/filter machinery as a real file.

use crate::crc32::crc32_of;
use crate::inflate::adler32;

fn chunk_bytes(chunk_type: &[u8; 4], data: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(4 + 4 + data.len() + 4);
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(chunk_type);
  out.extend_from_slice(data);
  let mut crc_input = Vec::with_capacity(4 + data.len());
  crc_input.extend_from_slice(chunk_type);
  crc_input.extend_from_slice(data);
  out.extend_from_slice(&crc32_of(&crc_input).to_be_bytes());
  out
}

/// Wraps `raw` in a minimal zlib stream using a single stored DEFLATE block.
pub(crate) fn build_stored_zlib(raw: &[u8]) -> Vec<u8> {
  assert!(raw.len() <= u16::MAX as usize, "test helper only supports one stored block");
  let mut out = Vec::with_capacity(raw.len() + 8);
  out.push(0x78); // CMF: CM=8 (deflate), CINFO=7
  out.push(0x9C); // FLG: FCHECK makes (0x78<<8|0x9C) % 31 == 0, FDICT unset
  out.push(0x01); // BFINAL=1, BTYPE=00 (stored), rest of byte padding zero
  let len = raw.len() as u16;
  out.extend_from_slice(&len.to_le_bytes());
  out.extend_from_slice(&(!len).to_le_bytes());
  out.extend_from_slice(raw);
  out.extend_from_slice(&adler32(raw).to_be_bytes());
  out
}

/// Builds a complete PNG file whose pixel data is `pixel_bytes`, using
/// filter type 0 (None) on every scanline and a single stored IDAT chunk.
/// `pixel_bytes.len()` must equal `width * height * bpp` for bpp 3 (RGB) or
/// 4 (RGBA); the color type is inferred from `bpp`.
pub(crate) fn build_stored_png(width: u32, height: u32, pixel_bytes: &[u8]) -> Vec<u8> {
  build_stored_png_filtered(width, height, pixel_bytes, None)
}

/// Like [`build_stored_png`] but lets the caller supply a custom filtered
/// scanline stream (filter byte + row bytes, per row) instead of having one
/// synthesized with filter type 0. `filtered` overrides `pixel_bytes` when
/// present; `pixel_bytes` is still used to infer `bpp`/color type.
pub(crate) fn build_stored_png_filtered(
  width: u32, height: u32, pixel_bytes: &[u8], filtered: Option<Vec<u8>>,
) -> Vec<u8> {
  let bpp = pixel_bytes.len() / (width as usize * height as usize);
  assert!(bpp == 3 || bpp == 4, "test helper only supports RGB/RGBA");
  let color_type: u8 = if bpp == 4 { 6 } else { 2 };

  let filtered = filtered.unwrap_or_else(|| {
    let mut f = Vec::with_capacity(height as usize * (1 + width as usize * bpp));
    for row in pixel_bytes.chunks_exact(width as usize * bpp) {
      f.push(0);
      f.extend_from_slice(row);
    }
    f
  });

  let zlib = build_stored_zlib(&filtered);

  let mut ihdr_data = Vec::with_capacity(13);
  ihdr_data.extend_from_slice(&width.to_be_bytes());
  ihdr_data.extend_from_slice(&height.to_be_bytes());
  ihdr_data.push(8); // bit depth
  ihdr_data.push(color_type);
  ihdr_data.push(0); // compression method
  ihdr_data.push(0); // filter method
  ihdr_data.push(0); // interlace method

  let mut out = Vec::new();
  out.extend_from_slice(&crate::chunk_iter::PNG_SIGNATURE);
  out.extend_from_slice(&chunk_bytes(b"IHDR", &ihdr_data));
  out.extend_from_slice(&chunk_bytes(b"IDAT", &zlib));
  out.extend_from_slice(&chunk_bytes(b"IEND", &[]));
  out
}
