//! zlib (RFC 1950) framing plus a DEFLATE (RFC 1951) decompressor, covering
//! stored and fixed-Huffman blocks. Dynamic Huffman blocks are rejected;
//! see [`crate::code_length`] for the building block that would complete
//! them.

use crate::bit_reader::BitReader;
use crate::error::PngError;
use crate::huffman::{fixed_dist_table, fixed_lit_len_table, HuffmanTable};
use crate::tables::{DIST_BASE, DIST_EXTRA, LENGTH_BASE, LENGTH_EXTRA};
use crate::PngResult;

/// Computes the Adler-32 checksum zlib trails its stream with.
pub(crate) fn adler32(bytes: &[u8]) -> u32 {
  const MOD_ADLER: u32 = 65521;
  let mut s1 = 1_u32;
  let mut s2 = 0_u32;
  for &b in bytes {
    s1 = (s1 + b as u32) % MOD_ADLER;
    s2 = (s2 + s1) % MOD_ADLER;
  }
  (s2 << 16) | s1
}

/// Inflates the concatenated IDAT bytes (a full zlib stream) to exactly
/// `expected_size` bytes, or fails with [`PngError::InvalidIdatStream`].
pub(crate) fn inflate_idat(zlib_data: &[u8], expected_size: usize) -> PngResult<Vec<u8>> {
  if zlib_data.len() < 6 {
    return Err(PngError::InvalidIdatStream);
  }

  let cmf = zlib_data[0];
  let flg = zlib_data[1];
  if cmf & 0x0F != 8 {
    return Err(PngError::InvalidIdatStream);
  }
  let check = ((cmf as u16) << 8) | flg as u16;
  if check % 31 != 0 {
    return Err(PngError::InvalidIdatStream);
  }
  if flg & 0x20 != 0 {
    // FDICT: a preset dictionary id would follow; not supported.
    return Err(PngError::InvalidIdatStream);
  }

  // The Adler-32 trailer lives in the last 4 bytes of the whole zlib
  // stream regardless of exactly where the DEFLATE bitstream itself
  // stops, which is what lets any padding between the two be tolerated.
  let deflate_data = &zlib_data[2..zlib_data.len() - 4];
  let adler_expected = u32::from_be_bytes(zlib_data[zlib_data.len() - 4..].try_into().unwrap());

  let mut reader = BitReader::new(deflate_data);
  let mut out = Vec::with_capacity(expected_size);

  loop {
    let is_final = reader.next_bits_lsb(1)? != 0;
    let btype = reader.next_bits_lsb(2)?;
    crate::trace!("block: final={}, btype={:02b}", is_final, btype);

    match btype {
      0b00 => inflate_stored_block(&mut reader, &mut out)?,
      0b01 => {
        let lit_len = fixed_lit_len_table();
        let dist = fixed_dist_table();
        inflate_huffman_block(&mut reader, &lit_len, &dist, &mut out, expected_size)?;
      }
      0b10 => return Err(PngError::UnsupportedCompressionFilter),
      _ => return Err(PngError::InvalidIdatStream),
    }

    if is_final {
      break;
    }
  }

  if out.len() < expected_size {
    return Err(PngError::InvalidIdatStream);
  }
  out.truncate(expected_size);

  if adler32(&out) != adler_expected {
    return Err(PngError::InvalidIdatStream);
  }

  Ok(out)
}

fn inflate_stored_block(reader: &mut BitReader<'_>, out: &mut Vec<u8>) -> PngResult<()> {
  reader.align_to_byte();
  let len_bytes = reader.take_bytes(2)?;
  let len = u16::from_le_bytes(len_bytes.try_into().unwrap());
  let nlen_bytes = reader.take_bytes(2)?;
  let nlen = u16::from_le_bytes(nlen_bytes.try_into().unwrap());
  if len != !nlen {
    return Err(PngError::InvalidIdatStream);
  }
  out.extend_from_slice(reader.take_bytes(len as usize)?);
  Ok(())
}

fn inflate_huffman_block(
  reader: &mut BitReader<'_>, lit_len: &HuffmanTable, dist: &HuffmanTable, out: &mut Vec<u8>,
  expected_size: usize,
) -> PngResult<()> {
  loop {
    let sym = lit_len.decode(reader)?;
    match sym {
      0..=255 => {
        out.push(sym as u8);
        if out.len() >= expected_size {
          return Ok(());
        }
      }
      256 => return Ok(()),
      257..=285 => {
        let idx = sym - 257;
        let mut len = LENGTH_BASE[idx] as usize;
        let extra = LENGTH_EXTRA[idx];
        if extra > 0 {
          len += reader.next_bits_lsb(extra)? as usize;
        }

        let dist_sym = dist.decode(reader)?;
        if dist_sym >= 30 {
          return Err(PngError::InvalidIdatStream);
        }
        let mut back_dist = DIST_BASE[dist_sym] as usize;
        let dist_extra = DIST_EXTRA[dist_sym];
        if dist_extra > 0 {
          back_dist += reader.next_bits_lsb(dist_extra)? as usize;
        }

        if back_dist == 0 || back_dist > out.len() {
          return Err(PngError::InvalidIdatStream);
        }
        // Copied byte-at-a-time (not a bulk memmove/copy_within) so that an
        // overlapping back-reference (distance < length, e.g. a run-length
        // of one repeated byte) replicates forward correctly instead of
        // being read as a single pre-existing window.
        let mut src = out.len() - back_dist;
        for _ in 0..len {
          out.push(out[src]);
          src += 1;
        }
        if out.len() >= expected_size {
          return Ok(());
        }
      }
      _ => return Err(PngError::InvalidIdatStream),
    }
  }
}
