use serde::{Deserialize, Serialize};

/// Describes how to interpret the input fed to a Network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputType {
    /// Plain feature vector with no image semantics.
    Numeric,
    /// Planar RGB image tensor of `3 × height × width` standardized values.
    ImageRgb { width: u32, height: u32 },
}

/// Optional annotations attached to a saved Network.
/// All fields are Option<> so models without metadata deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelMetadata {
    pub description: Option<String>,
    pub input_type: Option<InputType>,
}

impl ModelMetadata {
    /// The declared image size, if the model takes images.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        match self.input_type {
            Some(InputType::ImageRgb { width, height }) => Some((width, height)),
            _ => None,
        }
    }
}
