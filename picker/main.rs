/// ferrite-vision picker
///
/// Single-page photo classifier: pick an image in the browser, see the top
/// labels. Served by a synchronous tiny_http server.
///
/// Run with:
///   FERRITE_MODEL=model.json FERRITE_LABELS=words.txt cargo run --bin picker --release
/// Then open http://127.0.0.1:7878
///
/// Routes:
///   GET  /              picker page
///   POST /classify      multipart upload, HTML result
///   POST /api/classify  raw or multipart image, JSON predictions

mod handlers;
mod render;
mod routes;
mod state;
mod util;

use std::process::ExitCode;
use std::sync::Arc;
use tiny_http::Server;
use tracing::{error, info};

use ferrite_vision::{logging, AppConfig, ClassificationContext};

fn main() -> ExitCode {
    logging::init_tracing();
    let app = AppConfig::from_env();

    // No degraded mode: without model and labels there is nothing to serve.
    let ctx = match ClassificationContext::load(&app) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            error!(model = %app.model_path, labels = %app.labels_path, "startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let server = match Server::http(app.bind_addr.as_str()) {
        Ok(s) => s,
        Err(e) => {
            error!(addr = %app.bind_addr, "failed to bind HTTP server: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        addr = %app.bind_addr,
        labels = ctx.labels().len(),
        top_k = ctx.config().top_k,
        "picker listening on http://{}", app.bind_addr
    );

    // One thread per request; classification is CPU-bound and the context is
    // read-only, so requests never wait on each other.
    for request in server.incoming_requests() {
        let ctx = Arc::clone(&ctx);
        std::thread::spawn(move || {
            routes::dispatch(request, ctx);
        });
    }

    ExitCode::SUCCESS
}
