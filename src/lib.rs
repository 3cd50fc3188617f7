//! Mode-tagged raster pixel buffers with region-scoped traversal and
//! color effects.
//!
//! This crate defines the in-memory image model that pixel-level
//! effects operate on:
//!
//! - [`PixelBuffer`] — owned, mode-tagged byte buffer with consistent
//!   size/stride, single-pixel get/set, region-scoped `for_each`/`map`,
//!   and the batch-mutate primitives `modify_data`/`modify_surface`
//! - [`ColorMode`] — color space tag with constant stride and
//!   channel-maxima tables
//! - [`Pixel`] — fixed-capacity channel sequence for one pixel
//! - [`Size`] / [`Region`] — dimensions and half-open traversal rects
//! - [`ImageDecoder`] — async external decoder collaborator contract
//! - [`RenderSurface`] — external drawing-surface collaborator contract
//! - [`effects`] — effects built on the batch-mutate primitive
//!   ([`invert`](effects::invert) is the exemplar)
//!
//! Decoders hand pixels over as `imgref::ImgVec<rgb::Rgba<u8>>`; the
//! buffer repacks them into its own tightly packed storage. Everything
//! else is plain bytes.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod decode;
pub mod effects;
mod mode;
mod pixel;
mod region;
mod surface;

pub use buffer::{BufferError, PixelBuffer};
pub use decode::ImageDecoder;
pub use mode::ColorMode;
pub use pixel::Pixel;
pub use region::{Region, Size};
pub use surface::RenderSurface;

// Re-exports for decoder implementors and users.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb::Rgba;
