pub mod channel_stats;
pub mod normalize;
pub mod resize;
pub mod tensor;

pub use channel_stats::ChannelStats;
pub use normalize::{normalize, normalize_raw, AlphaMode};
pub use resize::{resize, ResizeFilter};
pub use tensor::NormalizedTensor;

use image::DynamicImage;

use crate::config::PipelineConfig;
use crate::error::DecodeError;

/// Resize to the configured input size, then normalize.
pub fn image_to_tensor(
    image: &DynamicImage,
    config: &PipelineConfig,
) -> Result<NormalizedTensor, DecodeError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(DecodeError::Empty { width: image.width(), height: image.height() });
    }
    let resized = resize(image, config.width, config.height, config.filter);
    normalize(&resized, &config.stats, config.alpha)
}

/// Decodes PNG/JPEG/BMP/GIF bytes, then resizes and normalizes.
pub fn image_bytes_to_tensor(
    bytes: &[u8],
    config: &PipelineConfig,
) -> Result<NormalizedTensor, DecodeError> {
    let image = image::load_from_memory(bytes)?;
    image_to_tensor(&image, config)
}
