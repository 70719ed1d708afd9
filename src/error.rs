use thiserror::Error;

/// Pixel extraction failed; the image cannot be turned into a tensor.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The encoded bytes could not be decoded by the `image` crate.
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },

    /// A raw pixel buffer does not match `width * height * channels`.
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported channel count {0}; expected 3 (RGB) or 4 (RGBA)")]
    Channels(usize),
}

/// The classifier returned no result for a tensor.
#[derive(Debug, Error)]
#[error("classifier produced no result: {reason}")]
pub struct ClassifierError {
    pub reason: String,
}

impl ClassifierError {
    pub fn new(reason: impl Into<String>) -> Self {
        ClassifierError { reason: reason.into() }
    }
}

/// Every way a single classification attempt can fail.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    /// Score vector and label vocabulary disagree in length. This points at a
    /// model/label pairing from different versions, not a transient fault.
    #[error("classifier returned {scores} scores but the vocabulary has {labels} labels")]
    Alignment { scores: usize, labels: usize },
}

/// Invalid pipeline configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("target size must be at least 1x1, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("std for channel {channel} must be finite and positive, got {value}")]
    InvalidStd { channel: usize, value: f32 },

    #[error("mean for channel {channel} must be finite, got {value}")]
    InvalidMean { channel: usize, value: f32 },
}

/// Failures while building the process-wide classification context.
/// Any of these is fatal: there is no degraded mode without model and labels.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot read {what} '{path}': {source}")]
    Io {
        what: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("model file '{path}' is not a valid network: {source}")]
    Model {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model '{path}' has layers whose shapes do not chain")]
    MalformedModel { path: String },

    #[error("pipeline config '{path}' is not valid JSON: {source}")]
    PipelineJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("label file '{path}' contains no labels")]
    EmptyLabels { path: String },

    #[error("model has no layers")]
    EmptyModel,

    #[error("model expects {model} inputs but the pipeline produces {pipeline}")]
    InputMismatch { model: usize, pipeline: usize },

    #[error("model has {model} outputs but the vocabulary has {labels} labels")]
    OutputMismatch { model: usize, labels: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
