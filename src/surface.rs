//! External render-surface contract.
//!
//! [`RenderSurface`] is the collaborator an application binds a
//! [`PixelBuffer`](crate::PixelBuffer) to when an effect must operate
//! through drawing primitives instead of raw bytes. The core never
//! implements a surface — it only reconciles against one through
//! [`modify_surface`](crate::PixelBuffer::modify_surface).
//!
//! # Contract
//!
//! - The surface addresses a rectangular pixel block matching the
//!   buffer's current size.
//! - [`put_block`](RenderSurface::put_block) replaces the surface's
//!   block with the given row-major RGBA-or-mode bytes.
//! - [`get_block`](RenderSurface::get_block) snapshots the surface's
//!   current block, at the same length the last `put_block` supplied.
//! - `modify_surface` calls `put_block` with the buffer's bytes before
//!   the caller's draw closure runs, and `get_block` once after it
//!   returns; the fetched block becomes the buffer's authoritative
//!   content and the dirty flag clears.
//!
//! # Object safety
//!
//! This trait is object-safe. Use `&mut dyn RenderSurface` in generic
//! code.

use alloc::vec::Vec;

use crate::region::Size;

/// An addressable 2-D pixel grid that can ingest and emit a
/// rectangular block of raw bytes.
pub trait RenderSurface {
    /// Replace the surface's pixel block with `bytes` for an image of
    /// `size`.
    fn put_block(&mut self, bytes: &[u8], size: Size);

    /// Snapshot the surface's current pixel block.
    fn get_block(&self) -> Vec<u8>;
}
