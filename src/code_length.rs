//! The 19-symbol code-length alphabet used by dynamic Huffman (BTYPE=2)
//! blocks to transmit the literal/length and distance code lengths (RFC
//! 1951 §3.2.7).
//!
//! This profile's inflater (see [`crate::inflate`]) rejects BTYPE=2 before
//! reaching any of this, but the building block is implemented and tested
//! on its own so that wiring up dynamic Huffman later is a matter of
//! reading HLIT/HDIST/HCLEN and calling [`fill_code_lengths`] twice, rather
//! than redesigning anything.

use crate::bit_reader::BitReader;
use crate::error::PngError;
use crate::huffman::HuffmanTable;
use crate::PngResult;

/// Decodes `want` code lengths (for the literal/length or distance
/// alphabet) using an already-built code-length-alphabet table, following
/// the repeat codes 16 ("copy the previous length"), 17 ("zero run,
/// short"), and 18 ("zero run, long").
pub(crate) fn fill_code_lengths(
  code_length_table: &HuffmanTable, want: usize, reader: &mut BitReader<'_>,
) -> PngResult<Vec<u8>> {
  let mut lengths = Vec::with_capacity(want);

  while lengths.len() < want {
    let sym = code_length_table.decode(reader)?;
    match sym {
      0..=15 => lengths.push(sym as u8),
      16 => {
        let prev = *lengths.last().ok_or(PngError::InvalidIdatStream)?;
        let repeat = 3 + reader.next_bits_lsb(2)?;
        for _ in 0..repeat {
          lengths.push(prev);
        }
      }
      17 => {
        let repeat = 3 + reader.next_bits_lsb(3)?;
        for _ in 0..repeat {
          lengths.push(0);
        }
      }
      18 => {
        let repeat = 11 + reader.next_bits_lsb(7)?;
        for _ in 0..repeat {
          lengths.push(0);
        }
      }
      _ => return Err(PngError::InvalidIdatStream),
    }
    if lengths.len() > want {
      return Err(PngError::InvalidIdatStream);
    }
  }

  Ok(lengths)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn expands_a_repeat_previous_code() {
    // code-length alphabet with only symbols 5 (len 1) and 16 (len 1).
    let mut cl_lengths = [0_u8; 19];
    cl_lengths[5] = 1;
    cl_lengths[16] = 1;
    let table = HuffmanTable::from_lengths(&cl_lengths).unwrap();
    // symbol 5 has the lower canonical code (0), symbol 16 the next (1).
    // stream: bit 0 (symbol 5, length=5), then bit 1 (symbol 16), then bits
    // 00 (2-bit repeat count field = 0 -> repeat 3 times).
    let mut reader = BitReader::new(&[0b0000_0010]);
    let lengths = fill_code_lengths(&table, 4, &mut reader).unwrap();
    assert_eq!(lengths, vec![5, 5, 5, 5]);
  }
}
