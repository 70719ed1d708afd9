use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, StartupError};
use crate::preprocess::{AlphaMode, ChannelStats, ResizeFilter};

/// Everything the normalizer and ranker need to know about the model's
/// input contract.
///
/// Every field has a default, so a partial JSON file such as
/// `{"top_k": 5}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Model input width in pixels.
    pub width: u32,
    /// Model input height in pixels.
    pub height: u32,
    pub filter: ResizeFilter,
    pub stats: ChannelStats,
    pub alpha: AlphaMode,
    /// How many ranked labels to return.
    pub top_k: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            width: 224,
            height: 224,
            filter: ResizeFilter::default(),
            stats: ChannelStats::IMAGENET,
            alpha: AlphaMode::default(),
            top_k: 3,
        }
    }
}

impl PipelineConfig {
    /// Length of the tensor this config produces (`3 * width * height`).
    pub fn tensor_len(&self) -> usize {
        3 * self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize { width: self.width, height: self.height });
        }
        self.stats.validate()
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Reads and validates a config previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<PipelineConfig, StartupError> {
        let file = std::fs::File::open(path).map_err(|source| StartupError::Io {
            what: "pipeline config",
            path: path.to_owned(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        let config: PipelineConfig = serde_json::from_reader(reader)
            .map_err(|source| StartupError::PipelineJson { path: path.to_owned(), source })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_imagenet_224() {
        let c = PipelineConfig::default();
        assert_eq!((c.width, c.height, c.top_k), (224, 224, 3));
        assert_eq!(c.stats, ChannelStats::IMAGENET);
        assert_eq!(c.tensor_len(), 150_528);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: PipelineConfig =
            serde_json::from_str(r#"{"top_k": 5, "filter": "lanczos3", "alpha": "premultiply"}"#).unwrap();
        assert_eq!(c.top_k, 5);
        assert_eq!(c.filter, ResizeFilter::Lanczos3);
        assert_eq!(c.alpha, AlphaMode::Premultiply);
        assert_eq!(c.width, 224);
    }

    #[test]
    fn zero_size_is_invalid() {
        let c = PipelineConfig { height: 0, ..PipelineConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::ZeroSize { width: 224, height: 0 }));
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        let path = path.to_str().unwrap();

        let c = PipelineConfig { width: 32, height: 48, top_k: 1, ..PipelineConfig::default() };
        c.save_json(path).unwrap();
        assert_eq!(PipelineConfig::load_json(path).unwrap(), c);
    }

    #[test]
    fn invalid_file_is_a_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"width": 0}"#).unwrap();
        let err = PipelineConfig::load_json(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, StartupError::Config(ConfigError::ZeroSize { .. })));

        let err = PipelineConfig::load_json("/nonexistent/pipeline.json").unwrap_err();
        assert!(matches!(err, StartupError::Io { .. }));
    }
}
