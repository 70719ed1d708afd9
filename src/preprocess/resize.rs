use image::imageops::FilterType;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Interpolation used when resampling to the model's input size.
///
/// Nearest-neighbour is deliberately absent: the classifier was trained on
/// smoothly resampled inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    /// Bilinear.
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Resamples `image` to exactly `width × height`.
///
/// Aspect ratio is not preserved; non-square sources are stretched because the
/// model takes a fixed square input. An image already at the target size is
/// returned as a copy without resampling.
pub fn resize(image: &DynamicImage, width: u32, height: u32, filter: ResizeFilter) -> DynamicImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }
    image.resize_exact(width, height, filter.into())
}
