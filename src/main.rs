// Classifies image files from the command line.
//
// Usage:
//   ferrite-vision <image>...
//
// Model, labels, pipeline config are taken from FERRITE_MODEL,
// FERRITE_LABELS, FERRITE_PIPELINE (defaults: model.json, words.txt, built-in).
use std::process::ExitCode;

use ferrite_vision::{format_bullets_with_scores, logging, AppConfig, ClassificationContext};
use tracing::{error, info};

fn main() -> ExitCode {
    logging::init_tracing();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: ferrite-vision <image>...");
        return ExitCode::from(2);
    }

    let app = AppConfig::from_env();
    let ctx = match ClassificationContext::load(&app) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(model = %app.model_path, labels = %app.labels_path, "startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(labels = ctx.labels().len(), width = ctx.config().width, height = ctx.config().height, "model loaded");

    let mut failed = 0usize;
    for path in &paths {
        let result = std::fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| ctx.classify_bytes(&bytes).map_err(|e| e.to_string()));
        match result {
            Ok(predictions) => {
                println!("{path}");
                println!("{}", format_bullets_with_scores(&predictions));
            }
            Err(e) => {
                error!(%path, "classification failed: {e}");
                failed += 1;
            }
        }
    }

    if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
