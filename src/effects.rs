//! Color effects built on the batch-mutate primitive.
//!
//! Effects read the buffer's active region and mode up front, then go
//! through [`PixelBuffer::modify_data`] with their own stride-aware
//! indexing — the batch path does not clip to the region for them.
//! [`invert`] is the exemplar; further effects follow the same shape.

use crate::buffer::PixelBuffer;
use crate::mode::ColorMode;

/// Invert each channel of every pixel in the buffer's active region:
/// channel value `c` becomes `max_for_channel - c`, with the maxima
/// taken from the mode's channel table.
///
/// Dispatch by mode: RGB-like modes invert the first three channels
/// and leave alpha untouched; single-channel modes invert their one
/// channel; CMYK inverts all four. Any other mode is a no-op and the
/// buffer (including its modified flag) is left as-is.
///
/// Channel values above their maximum (possible only for the hue
/// channel of Hls/Hsv) saturate to zero rather than wrapping.
///
/// ```
/// use zenraster::{effects, ColorMode, PixelBuffer, Size};
///
/// let mut image = PixelBuffer::new(ColorMode::Rgba);
/// image.from_raw(Size::new(1, 1), vec![10, 20, 30, 40])?;
/// effects::invert(&mut image);
/// assert_eq!(image.get_pixel(0, 0), [245, 235, 225, 40]);
/// # Ok::<(), zenraster::BufferError>(())
/// ```
pub fn invert(image: &mut PixelBuffer) {
    let region = image.region();
    let mode = image.mode();
    let stride = mode.channels();
    let max = mode.channel_max();
    let width = image.width() as usize;

    match mode {
        m if m.is_rgb_like() => {
            let (max1, max2, max3) = (max[0], max[1], max[2]);
            image.modify_data(|data, _| {
                for y in region.top()..region.bottom() {
                    for x in region.left()..region.right() {
                        let at = (y as usize * width + x as usize) * stride;
                        data[at] = max1.saturating_sub(data[at]);
                        data[at + 1] = max2.saturating_sub(data[at + 1]);
                        data[at + 2] = max3.saturating_sub(data[at + 2]);
                    }
                }
            });
        }
        ColorMode::L | ColorMode::B => {
            let max1 = max[0];
            image.modify_data(|data, _| {
                for y in region.top()..region.bottom() {
                    for x in region.left()..region.right() {
                        let at = (y as usize * width + x as usize) * stride;
                        data[at] = max1.saturating_sub(data[at]);
                    }
                }
            });
        }
        ColorMode::Cmyk => {
            let (max1, max2, max3, max4) = (max[0], max[1], max[2], max[3]);
            image.modify_data(|data, _| {
                for y in region.top()..region.bottom() {
                    for x in region.left()..region.right() {
                        let at = (y as usize * width + x as usize) * stride;
                        data[at] = max1.saturating_sub(data[at]);
                        data[at + 1] = max2.saturating_sub(data[at + 1]);
                        data[at + 2] = max3.saturating_sub(data[at + 2]);
                        data[at + 3] = max4.saturating_sub(data[at + 3]);
                    }
                }
            });
        }
        _ => {}
    }
}
