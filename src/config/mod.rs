pub mod app_config;
pub mod pipeline_config;

pub use app_config::AppConfig;
pub use pipeline_config::PipelineConfig;
