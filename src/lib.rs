pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod classifier;
pub mod config;
pub mod display;
pub mod error;
pub mod labels;
pub mod logging;
pub mod pipeline;
pub mod preprocess;
pub mod rank;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{InputType, ModelMetadata, Network};
pub use classifier::{Classifier, NetworkClassifier};
pub use config::{AppConfig, PipelineConfig};
pub use display::{format_bullets, format_bullets_with_scores};
pub use error::{ClassifierError, ClassifyError, ConfigError, DecodeError, StartupError};
pub use labels::LabelVocabulary;
pub use pipeline::ClassificationContext;
pub use preprocess::{
    image_bytes_to_tensor, image_to_tensor, normalize, normalize_raw, resize, AlphaMode,
    ChannelStats, NormalizedTensor, ResizeFilter,
};
pub use rank::{top_k, Prediction, DEFAULT_TOP_K};
