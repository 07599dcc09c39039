#![forbid(unsafe_code)]
//! A small, dependency-light decoder for 8-bit RGB/RGBA PNG images.
//!
//! This crate decodes the PNG container (chunk framing, CRC-32), a
//! hand-written DEFLATE/zlib inflater, and PNG's five scanline filters,
//! into a plain pixel buffer. It does not encode, does not handle
//! interlaced (Adam7) images, indexed/grayscale color, bit depths other
//! than 8, or dynamic Huffman DEFLATE blocks.
//!
//! ```no_run
//! let bytes = std::fs::read("image.png").unwrap();
//! let image = pngraster::decode(&bytes).unwrap();
//! println!("{}x{}, stride {}", image.width, image.height, image.stride);
//! ```

/// Traces a decode step when the `trace` feature is enabled; compiles away
/// to nothing otherwise, so the hot decode path never pays for logging it
/// isn't configured to use.
#[macro_export]
macro_rules! trace {
  ($($arg:tt)*) => {
    #[cfg(feature = "trace")] {
      ::std::eprint!("{file}:{line}> ", file = file!(), line = line!());
      ::std::eprintln!($($arg)*);
    }
  }
}

mod bit_reader;
mod chunk;
mod chunk_iter;
mod code_length;
mod crc32;
mod decoder;
mod defilter;
mod error;
mod header;
mod huffman;
mod inflate;
mod parser;
mod pixel;
mod tables;

#[cfg(test)]
mod tests_support;

pub use decoder::{decode, read_header, DecodedImage};
pub use error::PngError;
pub use header::{PngColorType, PngCompressionMethod, PngFilterMethod, PngHeader, PngInterlaceMethod};
pub use pixel::{Rgb8, Rgba8};

/// The result type every public entry point in this crate returns.
pub type PngResult<T> = Result<T, PngError>;
