use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Per-channel standardization constants, ordered R, G, B.
///
/// Each channel value `v` in `[0, 1]` maps to `(v - mean[c]) / std[c]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl ChannelStats {
    /// The ImageNet statistics used by torchvision-trained classifiers.
    pub const IMAGENET: ChannelStats = ChannelStats {
        mean: [0.485, 0.456, 0.406],
        std: [0.229, 0.224, 0.225],
    };

    /// Standardizes one 8-bit channel value.
    #[inline]
    pub fn apply(&self, channel: usize, byte: u8) -> f32 {
        (byte as f32 / 255.0 - self.mean[channel]) / self.std[channel]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (channel, &value) in self.mean.iter().enumerate() {
            if !value.is_finite() {
                return Err(ConfigError::InvalidMean { channel, value });
            }
        }
        for (channel, &value) in self.std.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidStd { channel, value });
            }
        }
        Ok(())
    }
}

impl Default for ChannelStats {
    fn default() -> Self {
        ChannelStats::IMAGENET
    }
}
