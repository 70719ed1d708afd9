use crate::config::pipeline_config::PipelineConfig;
use crate::error::StartupError;

pub const ENV_MODEL: &str = "FERRITE_MODEL";
pub const ENV_LABELS: &str = "FERRITE_LABELS";
pub const ENV_PIPELINE: &str = "FERRITE_PIPELINE";
pub const ENV_ADDR: &str = "FERRITE_ADDR";

/// Startup settings shared by the CLI and the picker server.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON network file.
    pub model_path: String,
    /// Newline-delimited label file.
    pub labels_path: String,
    /// Optional `PipelineConfig` JSON; defaults are used when absent.
    pub pipeline_path: Option<String>,
    /// Listen address for the picker server.
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            model_path: "model.json".into(),
            labels_path: "words.txt".into(),
            pipeline_path: None,
            bind_addr: "127.0.0.1:7878".into(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `FERRITE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = AppConfig::default();
        AppConfig {
            model_path: get(ENV_MODEL).unwrap_or(defaults.model_path),
            labels_path: get(ENV_LABELS).unwrap_or(defaults.labels_path),
            pipeline_path: get(ENV_PIPELINE),
            bind_addr: get(ENV_ADDR).unwrap_or(defaults.bind_addr),
        }
    }

    /// Loads the pipeline file if one is configured, otherwise the defaults.
    pub fn pipeline(&self) -> Result<PipelineConfig, StartupError> {
        match &self.pipeline_path {
            Some(path) => PipelineConfig::load_json(path),
            None => Ok(PipelineConfig::default()),
        }
    }
}
