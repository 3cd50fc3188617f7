//! Mode-tagged owned pixel buffer.
//!
//! [`PixelBuffer`] is the canonical in-memory image: a contiguous
//! row-major, channel-interleaved byte array tagged with a
//! [`ColorMode`] and a [`Size`]. The byte length is kept exactly
//! consistent with `width × height × channels` at all times — every
//! operation that changes mode or size re-derives the buffer under the
//! new length.
//!
//! Two mutation families exist. Per-pixel paths ([`set_pixel`],
//! [`map`]) validate channel counts at the boundary. Batch paths
//! ([`modify_data`], [`modify_surface`]) hand out the raw bytes for
//! high-throughput effects and drive the dirty flag: `map` and
//! `modify_data` mark the buffer modified, `modify_surface` re-reads
//! the external surface and clears the flag. The flag is the caller's
//! signal that the canonical bytes and a render surface have diverged.
//!
//! [`set_pixel`]: PixelBuffer::set_pixel
//! [`map`]: PixelBuffer::map
//! [`modify_data`]: PixelBuffer::modify_data
//! [`modify_surface`]: PixelBuffer::modify_surface

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::mode::ColorMode;
use crate::pixel::Pixel;
use crate::region::{Region, Size};
use crate::surface::RenderSurface;

// ---------------------------------------------------------------------------
// BufferError
// ---------------------------------------------------------------------------

/// Errors from pixel buffer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
    /// Two buffers (or a buffer and an ingestion source) disagree on
    /// color mode.
    ModeMismatch,
    /// A byte block's length does not match `width × height × channels`.
    SizeMismatch,
    /// The decoder could not resolve or load the given path.
    InvalidPath,
    /// Width or height is zero or causes overflow.
    InvalidDimensions,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeMismatch => write!(f, "color modes do not match"),
            Self::SizeMismatch => {
                write!(f, "byte length does not match width * height * channels")
            }
            Self::InvalidPath => write!(f, "image path could not be resolved or loaded"),
            Self::InvalidDimensions => write!(f, "width or height is zero or causes overflow"),
        }
    }
}

impl core::error::Error for BufferError {}

// ---------------------------------------------------------------------------
// PixelBuffer
// ---------------------------------------------------------------------------

/// Owned, mode-tagged raster image buffer.
///
/// Pixel `(x, y)` occupies bytes `[(y·width + x)·channels, +channels)`.
/// A freshly constructed buffer is the 1×1 zero-value under its mode
/// (every channel byte zero — fully transparent black for RGBA).
///
/// ```
/// use zenraster::{ColorMode, PixelBuffer, Size};
///
/// let mut image = PixelBuffer::new(ColorMode::Rgba);
/// image.from_raw(Size::new(2, 2), vec![255; 16])?;
/// assert_eq!(image.get_pixel(1, 1), [255, 255, 255, 255]);
/// # Ok::<(), zenraster::BufferError>(())
/// ```
pub struct PixelBuffer {
    mode: ColorMode,
    size: Size,
    data: Vec<u8>,
    region: Region,
    modified: bool,
}

impl Default for PixelBuffer {
    /// The 1×1 RGBA zero-value buffer.
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

/// ## Construction & validation.
impl PixelBuffer {
    /// Create the 1×1 zero-value buffer under `mode`. Never fails.
    pub fn new(mode: ColorMode) -> Self {
        let size = Size::new(1, 1);
        Self {
            mode,
            size,
            data: vec![0; mode.channels()],
            region: Region::full(size),
            modified: false,
        }
    }

    /// Adopt `bytes` as backing storage for an image of `size` under
    /// the buffer's current mode. The region resets to the full image;
    /// the modified flag is left as it was.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidDimensions`] when either dimension is zero
    /// or the byte length overflows; [`BufferError::SizeMismatch`] when
    /// `bytes.len()` is not `width × height × channels`. On error the
    /// buffer's prior state is untouched.
    pub fn from_raw(&mut self, size: Size, bytes: Vec<u8>) -> Result<&mut Self, BufferError> {
        if size.width == 0 || size.height == 0 {
            return Err(BufferError::InvalidDimensions);
        }
        let expected = size
            .byte_len(self.mode)
            .ok_or(BufferError::InvalidDimensions)?;
        if bytes.len() != expected {
            return Err(BufferError::SizeMismatch);
        }
        self.size = size;
        self.data = bytes;
        self.region = Region::full(size);
        Ok(self)
    }

    /// Deep-copy another buffer's size, bytes, and modified flag into
    /// self. Storage never aliases afterward; the region resets to the
    /// full (new) image.
    ///
    /// # Errors
    ///
    /// [`BufferError::ModeMismatch`] when the modes differ.
    pub fn copy_from(&mut self, other: &PixelBuffer) -> Result<&mut Self, BufferError> {
        if self.mode != other.mode {
            return Err(BufferError::ModeMismatch);
        }
        self.size = other.size;
        self.data.clear();
        self.data.extend_from_slice(&other.data);
        self.modified = other.modified;
        self.region = Region::full(other.size);
        Ok(self)
    }

    /// Re-tag the buffer with a new mode at the same pixel dimensions.
    ///
    /// The backing bytes are reset to zero under the new stride — no
    /// semantic color conversion happens here; that is an effect's
    /// responsibility. Always succeeds for any enumerated mode.
    pub fn change_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
        let len = self.size.width as usize * self.size.height as usize * mode.channels();
        self.data = vec![0; len];
        self.region = Region::full(self.size);
    }
}

/// ## Getters.
impl PixelBuffer {
    /// Color mode tag.
    #[inline]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Image dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Image width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    /// Image height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    /// Row-major, channel-interleaved backing bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the bytes have been batch-mutated since the last
    /// surface synchronization. Set by [`map`](Self::map) and
    /// [`modify_data`](Self::modify_data), cleared by
    /// [`modify_surface`](Self::modify_surface).
    #[inline]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// The active traversal region.
    #[inline]
    pub const fn region(&self) -> Region {
        self.region
    }
}

/// ## Region scoping.
impl PixelBuffer {
    /// Scope traversal and region-aware effects to `region`.
    ///
    /// # Panics
    ///
    /// Panics if the region extends past the image bounds.
    pub fn set_region(&mut self, region: Region) {
        assert!(
            region.right() <= self.size.width && region.bottom() <= self.size.height,
            "region [{}, {}) x [{}, {}) exceeds image {}x{}",
            region.left(),
            region.right(),
            region.top(),
            region.bottom(),
            self.size.width,
            self.size.height
        );
        self.region = region;
    }

    /// Restore the region to the full image.
    pub fn reset_region(&mut self) {
        self.region = Region::full(self.size);
    }
}

/// ## Pixel-level access.
impl PixelBuffer {
    /// Byte offset of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.size.width && y < self.size.height,
            "pixel ({x}, {y}) out of bounds ({}x{})",
            self.size.width,
            self.size.height
        );
        (y as usize * self.size.width as usize + x as usize) * self.mode.channels()
    }

    /// Read the pixel at `(x, y)` as a freshly materialized channel
    /// sequence of the mode's length. Pure read.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        let n = self.mode.channels();
        let at = self.offset(x, y);
        Pixel::new(&self.data[at..at + n])
    }

    /// Write `pixel` into `(x, y)`, channel by channel.
    ///
    /// Single-pixel writes are out-of-band from the dirty-tracking
    /// contract: this does not mark the buffer modified.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds or `pixel.len()` is
    /// not the mode's channel count.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[u8]) {
        let n = self.mode.channels();
        assert!(
            pixel.len() == n,
            "pixel has {} channels, mode {:?} needs {n}",
            pixel.len(),
            self.mode
        );
        let at = self.offset(x, y);
        self.data[at..at + n].copy_from_slice(pixel);
    }
}

/// ## Region-scoped traversal.
impl PixelBuffer {
    /// Visit every pixel in the active region exactly once, in
    /// row-major order (top to bottom, then left to right). Purely
    /// observational; `visit` receives a fresh [`Pixel`] and its
    /// `(x, y)` position. The traversal order is a contract callers
    /// may rely on.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(Pixel, (u32, u32)),
    {
        let n = self.mode.channels();
        let w = self.size.width as usize;
        let r = self.region;
        for y in r.top()..r.bottom() {
            for x in r.left()..r.right() {
                let at = (y as usize * w + x as usize) * n;
                visit(Pixel::new(&self.data[at..at + n]), (x, y));
            }
        }
    }

    /// Transform every pixel in the active region, in row-major order,
    /// writing each returned pixel back immediately — later calls in
    /// the same pass never observe a stale version of an
    /// already-transformed neighbor. Marks the buffer modified after
    /// completing a pass over any non-empty region.
    ///
    /// # Panics
    ///
    /// Panics if a returned pixel's length is not the mode's channel
    /// count.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(Pixel, (u32, u32)) -> Pixel,
    {
        let n = self.mode.channels();
        let w = self.size.width as usize;
        let r = self.region;
        for y in r.top()..r.bottom() {
            for x in r.left()..r.right() {
                let at = (y as usize * w + x as usize) * n;
                let next = transform(Pixel::new(&self.data[at..at + n]), (x, y));
                assert!(
                    next.len() == n,
                    "transform returned {} channels, mode {:?} needs {n}",
                    next.len(),
                    self.mode
                );
                self.data[at..at + n].copy_from_slice(&next);
            }
        }
        if !r.is_empty() {
            self.modified = true;
        }
    }
}

/// ## Batch raw mutation.
impl PixelBuffer {
    /// Grant `mutate` direct access to the full backing byte array and
    /// the current size, then unconditionally mark the buffer
    /// modified.
    ///
    /// This is the primitive region-aware effects build on for custom
    /// striding instead of per-pixel dispatch. The active region is
    /// not enforced here — a region-aware mutator reads
    /// [`region()`](Self::region) and clips its own indexing.
    pub fn modify_data<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut [u8], Size),
    {
        mutate(&mut self.data, self.size);
        self.modified = true;
    }

    /// Run `draw` against an external render surface bound to this
    /// buffer's current pixel content, then re-synchronize from the
    /// surface.
    ///
    /// The current bytes are pushed into the surface first, `draw`
    /// operates through the surface's primitives, and the surface's
    /// resulting block replaces the buffer's bytes. The modified flag
    /// clears: the surface and the buffer agree again, with the
    /// surface as the just-flushed source of truth.
    ///
    /// # Errors
    ///
    /// [`BufferError::SizeMismatch`] when the surface returns a block
    /// whose length does not match the buffer; the buffer's bytes and
    /// flag are left untouched.
    pub fn modify_surface<S, F>(&mut self, surface: &mut S, draw: F) -> Result<&mut Self, BufferError>
    where
        S: RenderSurface + ?Sized,
        F: FnOnce(&mut S, Size),
    {
        surface.put_block(&self.data, self.size);
        draw(surface, self.size);
        let block = surface.get_block();
        if block.len() != self.data.len() {
            return Err(BufferError::SizeMismatch);
        }
        self.data = block;
        self.modified = false;
        Ok(self)
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PixelBuffer({}x{}, {:?})",
            self.size.width, self.size.height, self.mode
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
