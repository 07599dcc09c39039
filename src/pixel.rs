//! Pixel types for the color modes this crate decodes.

use bytemuck::{Pod, Zeroable};

/// 8-bit-per-channel RGB pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

/// 8-bit-per-channel RGBA pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}
