//! Decode ingestion: populating a buffer from an external decoder.
//!
//! The core never parses an image format. [`ImageDecoder`] is the
//! external collaborator contract: it resolves a URL or path to
//! decoded RGBA pixels (an `ImgVec<Rgba<u8>>`, dimensions embedded) or
//! fails with [`BufferError::InvalidPath`]. Decoding always yields
//! RGBA, so both ingestion paths reject a buffer whose mode is not
//! [`ColorMode::Rgba`] — for [`from_url`](PixelBuffer::from_url),
//! before any I/O is attempted.
//!
//! Each `from_url` call issues one independent decode; concurrent
//! calls are not de-duplicated. Timeouts and cancellation, if any,
//! are the decoder's own concern — the core imposes none.

use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::{ComponentBytes, Rgba};

use crate::buffer::{BufferError, PixelBuffer};
use crate::mode::ColorMode;
use crate::region::Size;

/// Asynchronous image decoder collaborator.
///
/// Implementations wrap whatever actually fetches and decodes the
/// source (an HTTP client plus a codec, a file reader, a test stub).
/// The returned `ImgVec` may carry a padded stride; ingestion copies
/// row by row into the buffer's tightly packed layout.
#[allow(async_fn_in_trait)] // single-threaded model; implementor futures need no Send bound
pub trait ImageDecoder {
    /// Resolve `source` to decoded RGBA pixels.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidPath`] when the source cannot be resolved
    /// or loaded.
    async fn decode(&self, source: &str) -> Result<ImgVec<Rgba<u8>>, BufferError>;
}

/// ## Decoding ingestion.
impl PixelBuffer {
    /// Populate from an already-decoded RGBA image at its native size,
    /// as if via [`from_raw`](Self::from_raw).
    ///
    /// # Errors
    ///
    /// [`BufferError::ModeMismatch`] when the buffer's mode is not
    /// [`ColorMode::Rgba`]; [`BufferError::InvalidDimensions`] when the
    /// source has a zero or overflowing dimension.
    pub fn from_image(&mut self, img: ImgRef<'_, Rgba<u8>>) -> Result<&mut Self, BufferError> {
        if self.mode() != ColorMode::Rgba {
            return Err(BufferError::ModeMismatch);
        }
        let width = u32::try_from(img.width()).map_err(|_| BufferError::InvalidDimensions)?;
        let height = u32::try_from(img.height()).map_err(|_| BufferError::InvalidDimensions)?;
        let size = Size::new(width, height);
        let expected = size
            .byte_len(ColorMode::Rgba)
            .ok_or(BufferError::InvalidDimensions)?;

        let mut bytes = Vec::with_capacity(expected);
        for row in img.rows() {
            bytes.extend_from_slice(row.as_bytes());
        }
        self.from_raw(size, bytes)
    }

    /// Populate from a URL via the external decoder. Suspends until
    /// the decoder resolves; the only suspension point in the model.
    ///
    /// On success the buffer holds the decoded pixels at the decoded
    /// dimensions and `self` is returned for chaining.
    ///
    /// # Errors
    ///
    /// [`BufferError::ModeMismatch`] when the buffer's mode is not
    /// [`ColorMode::Rgba`] — checked before the decoder is invoked.
    /// [`BufferError::InvalidPath`] when the decoder cannot resolve or
    /// load `url`.
    pub async fn from_url<D>(&mut self, decoder: &D, url: &str) -> Result<&mut Self, BufferError>
    where
        D: ImageDecoder,
    {
        if self.mode() != ColorMode::Rgba {
            return Err(BufferError::ModeMismatch);
        }
        let decoded = decoder.decode(url).await?;
        self.from_image(decoded.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;

    /// Decoder stub: resolves every non-empty source to a fixed image,
    /// counting invocations.
    struct StubDecoder {
        pixels: ImgVec<Rgba<u8>>,
        calls: Cell<u32>,
    }

    impl StubDecoder {
        fn white(side: usize) -> Self {
            let px = Rgba {
                r: 255,
                g: 255,
                b: 255,
                a: 255,
            };
            Self {
                pixels: ImgVec::new(vec![px; side * side], side, side),
                calls: Cell::new(0),
            }
        }
    }

    impl ImageDecoder for StubDecoder {
        async fn decode(&self, source: &str) -> Result<ImgVec<Rgba<u8>>, BufferError> {
            self.calls.set(self.calls.get() + 1);
            if source.is_empty() {
                return Err(BufferError::InvalidPath);
            }
            Ok(ImgVec::new(
                self.pixels.buf().clone(),
                self.pixels.width(),
                self.pixels.height(),
            ))
        }
    }

    // --- from_image ---

    #[test]
    fn from_image_populates_at_native_size() {
        let mut image = PixelBuffer::default();
        let decoder = StubDecoder::white(20);
        image.from_image(decoder.pixels.as_ref()).unwrap();
        assert_eq!(image.size(), Size::new(20, 20));
        assert_eq!(image.data(), vec![255; 1600].as_slice());
        assert!(!image.is_modified());
    }

    #[test]
    fn from_image_rejects_non_rgba_buffer() {
        let mut image = PixelBuffer::new(ColorMode::L);
        let decoder = StubDecoder::white(2);
        assert_eq!(
            image.from_image(decoder.pixels.as_ref()).unwrap_err(),
            BufferError::ModeMismatch
        );
    }

    #[test]
    fn from_image_repacks_padded_stride() {
        // 2x2 view carved out of a 4-wide backing buffer: rows are
        // padded, so ingestion must repack tightly.
        let mut backing = vec![
            Rgba {
                r: 0u8,
                g: 0,
                b: 0,
                a: 0
            };
            8
        ];
        for (i, px) in backing.iter_mut().enumerate() {
            px.r = i as u8;
        }
        let img = ImgVec::new_stride(backing, 2, 2, 4);

        let mut image = PixelBuffer::default();
        image.from_image(img.as_ref()).unwrap();
        assert_eq!(image.size(), Size::new(2, 2));
        // Rows start at pixels 0 and 4 of the backing buffer.
        assert_eq!(image.get_pixel(0, 0)[0], 0);
        assert_eq!(image.get_pixel(1, 0)[0], 1);
        assert_eq!(image.get_pixel(0, 1)[0], 4);
        assert_eq!(image.get_pixel(1, 1)[0], 5);
    }

    // --- from_url ---

    #[tokio::test]
    async fn from_url_rejects_non_rgba_before_decoding() {
        let mut image = PixelBuffer::new(ColorMode::L);
        let decoder = StubDecoder::white(20);
        let err = image.from_url(&decoder, "textures/white.png").await;
        assert_eq!(err.unwrap_err(), BufferError::ModeMismatch);
        assert_eq!(decoder.calls.get(), 0);
    }

    #[tokio::test]
    async fn from_url_surfaces_decoder_path_failure() {
        let mut image = PixelBuffer::default();
        let decoder = StubDecoder::white(20);
        let err = image.from_url(&decoder, "").await;
        assert_eq!(err.unwrap_err(), BufferError::InvalidPath);
        assert_eq!(decoder.calls.get(), 1);
        // Failed ingestion leaves the zero-value state alone.
        assert_eq!(image.size(), Size::new(1, 1));
    }

    #[tokio::test]
    async fn from_url_populates_buffer() {
        let mut image = PixelBuffer::default();
        let decoder = StubDecoder::white(20);
        image.from_url(&decoder, "textures/white.png").await.unwrap();
        assert_eq!(image.size(), Size::new(20, 20));
        assert_eq!(image.data(), vec![255; 1600].as_slice());
        assert_eq!(decoder.calls.get(), 1);
    }

    #[tokio::test]
    async fn concurrent_calls_each_issue_a_decode() {
        let decoder = StubDecoder::white(4);
        let mut first = PixelBuffer::default();
        let mut second = PixelBuffer::default();
        first.from_url(&decoder, "a.png").await.unwrap();
        second.from_url(&decoder, "b.png").await.unwrap();
        assert_eq!(decoder.calls.get(), 2);
    }
}
