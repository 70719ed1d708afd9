use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::preprocess::channel_stats::ChannelStats;
use crate::preprocess::tensor::NormalizedTensor;

/// What to do with the alpha byte of RGBA pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaMode {
    /// Read and drop alpha; colour bytes are used as stored.
    #[default]
    Discard,
    /// Scale colour bytes by `alpha / 255` first, as a premultiplied RGBA
    /// drawing context would.
    Premultiply,
}

/// Converts an already-resized image into a planar standardized tensor.
///
/// RGB8 and RGBA8 buffers are read in place; every other colour type is
/// converted to RGBA8 first.
pub fn normalize(
    image: &DynamicImage,
    stats: &ChannelStats,
    alpha: AlphaMode,
) -> Result<NormalizedTensor, DecodeError> {
    let (width, height) = (image.width(), image.height());
    match image {
        DynamicImage::ImageRgb8(buf) => normalize_raw(width, height, buf.as_raw(), 3, stats, alpha),
        DynamicImage::ImageRgba8(buf) => normalize_raw(width, height, buf.as_raw(), 4, stats, alpha),
        other => {
            let rgba = other.to_rgba8();
            normalize_raw(width, height, rgba.as_raw(), 4, stats, alpha)
        }
    }
}

/// Normalizes an interleaved 8-bit pixel buffer (`RGBRGB...` or `RGBARGBA...`).
///
/// Output index for pixel `i` and channel `c` is `c * width * height + i`.
pub fn normalize_raw(
    width: u32,
    height: u32,
    bytes: &[u8],
    channels: usize,
    stats: &ChannelStats,
    alpha: AlphaMode,
) -> Result<NormalizedTensor, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::Empty { width, height });
    }
    if channels != 3 && channels != 4 {
        return Err(DecodeError::Channels(channels));
    }
    let n = width as usize * height as usize;
    let expected = n * channels;
    if bytes.len() != expected {
        return Err(DecodeError::BufferSize { width, height, expected, actual: bytes.len() });
    }

    let mut data = vec![0.0f32; NormalizedTensor::CHANNELS * n];
    let (r_plane, rest) = data.split_at_mut(n);
    let (g_plane, b_plane) = rest.split_at_mut(n);

    let premultiply = alpha == AlphaMode::Premultiply && channels == 4;
    for (i, px) in bytes.chunks_exact(channels).enumerate() {
        let [r, g, b] = if premultiply {
            let a = px[3];
            [scale_by_alpha(px[0], a), scale_by_alpha(px[1], a), scale_by_alpha(px[2], a)]
        } else {
            [px[0], px[1], px[2]]
        };
        r_plane[i] = stats.apply(0, r);
        g_plane[i] = stats.apply(1, g);
        b_plane[i] = stats.apply(2, b);
    }

    Ok(NormalizedTensor::from_planes(width, height, data))
}

/// `round(c * a / 255)` in integer arithmetic.
#[inline]
fn scale_by_alpha(c: u8, a: u8) -> u8 {
    ((c as u16 * a as u16 + 127) / 255) as u8
}
