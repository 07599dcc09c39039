use crate::chunk::ChunkType;
use crate::chunk_iter::{strip_signature, RawChunkIter};
use crate::error::PngError;
use crate::header::PngHeader;
use crate::PngResult;

/// The result of walking a PNG's chunk stream: its header plus the ordered
/// list of IDAT payload spans (borrowed from the input).
pub(crate) struct ParsedChunks<'b> {
  pub(crate) header: PngHeader,
  pub(crate) idat_spans: Vec<&'b [u8]>,
}

/// Walks the full chunk stream, validating signature, CRCs, and chunk
/// ordering, and collects the IHDR header and IDAT spans.
///
/// This is also what [`crate::decoder::read_header`] runs under the hood:
/// the header isn't trustworthy until the whole chunk stream (IEND present,
/// IDATs present, nothing out of order) has been confirmed valid.
pub(crate) fn parse_chunks(bytes: &[u8]) -> PngResult<ParsedChunks<'_>> {
  let rest = strip_signature(bytes)?;

  let mut header: Option<PngHeader> = None;
  let mut idat_spans = Vec::new();
  let mut seen_ihdr = false;
  let mut seen_iend = false;

  for chunk in RawChunkIter::new(rest) {
    let chunk = chunk?;
    crate::trace!("chunk {:?}, {} bytes", chunk.chunk_type, chunk.chunk_data.len());

    if chunk.actual_crc() != chunk.declared_crc {
      return Err(PngError::CrcMismatch);
    }

    if chunk.chunk_type == ChunkType::IHDR {
      if seen_ihdr {
        return Err(PngError::DuplicateIhdr);
      }
      if seen_iend {
        return Err(PngError::UnexpectedChunkOrder);
      }
      header = Some(PngHeader::from_ihdr_chunk(&chunk)?);
      seen_ihdr = true;
    } else if chunk.chunk_type == ChunkType::IDAT {
      if !seen_ihdr || seen_iend {
        return Err(PngError::UnexpectedChunkOrder);
      }
      idat_spans.push(chunk.chunk_data);
    } else if chunk.chunk_type == ChunkType::IEND {
      if !chunk.chunk_data.is_empty() {
        return Err(PngError::InvalidChunkLength);
      }
      if !seen_ihdr {
        return Err(PngError::MissingIhdr);
      }
      seen_iend = true;
      break;
    }
    // ancillary chunks are validated (signature, CRC) above and otherwise ignored
  }

  let header = match header {
    Some(h) => h,
    None => return Err(PngError::MissingIhdr),
  };
  if !seen_iend {
    return Err(PngError::NoIend);
  }
  if idat_spans.is_empty() {
    return Err(PngError::NoIdatChunks);
  }

  Ok(ParsedChunks { header, idat_spans })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tests_support::build_stored_png;

  #[test]
  fn rejects_bad_signature() {
    let mut bytes = build_stored_png(1, 1, &[0, 255, 0, 0, 255]);
    bytes[0] = 0x88;
    assert_eq!(parse_chunks(&bytes).unwrap_err(), PngError::InvalidSignature);
  }

  #[test]
  fn rejects_missing_iend() {
    let bytes = build_stored_png(1, 1, &[0, 255, 0, 0, 255]);
    let truncated = &bytes[..bytes.len() - 12];
    match parse_chunks(truncated) {
      Err(PngError::NoIend) | Err(PngError::FileTooShort) | Err(PngError::InvalidChunkLength) => {}
      other => panic!("expected a truncation-shaped error, got {other:?}"),
    }
  }

  #[test]
  fn parses_valid_header() {
    let bytes = build_stored_png(1, 1, &[0, 255, 0, 0, 255]);
    let parsed = parse_chunks(&bytes).unwrap();
    assert_eq!(parsed.header.width, 1);
    assert_eq!(parsed.header.height, 1);
    assert_eq!(parsed.idat_spans.len(), 1);
  }
}
