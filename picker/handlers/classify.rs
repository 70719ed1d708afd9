use std::io::Cursor;
use tiny_http::{Request, Response};
use tracing::{info, warn};

use ferrite_vision::{ClassifyError, Prediction};

use crate::render::render_page;
use crate::state::SharedContext;
use crate::util::html_escape;
use crate::util::multipart::{extract_boundary, multipart_extract_file};

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(ctx: SharedContext) -> Response<Cursor<Vec<u8>>> {
    crate::routes::html_response(build_page(&ctx, ""))
}

// ---------------------------------------------------------------------------
// POST /classify  (multipart form upload, HTML result)
// ---------------------------------------------------------------------------

pub fn handle_classify(request: &mut Request, ctx: SharedContext) -> Response<Cursor<Vec<u8>>> {
    let result_html = match read_upload(request) {
        Some(bytes) => match ctx.classify_bytes(&bytes) {
            Ok(predictions) => {
                info!(top = ?predictions.first().map(|p| &p.label), "classified upload");
                results_html(&predictions)
            }
            Err(e) => {
                warn!("classification failed: {e}");
                error_html(&user_message(&e))
            }
        },
        None => error_html("No image file was uploaded."),
    };
    crate::routes::html_response(build_page(&ctx, &result_html))
}

// ---------------------------------------------------------------------------
// POST /api/classify  (raw image body or multipart, JSON result)
// ---------------------------------------------------------------------------

pub fn handle_api(request: &mut Request, ctx: SharedContext) -> Response<Cursor<Vec<u8>>> {
    let bytes = match read_upload(request) {
        Some(b) => b,
        None => {
            return crate::routes::json_response(400, &serde_json::json!({ "error": "empty body" }));
        }
    };
    match ctx.classify_bytes(&bytes) {
        Ok(predictions) => {
            crate::routes::json_response(200, &serde_json::json!({ "predictions": predictions }))
        }
        Err(e) => {
            warn!("api classification failed: {e}");
            let status = match e {
                ClassifyError::Decode(_) => 422,
                ClassifyError::Classifier(_) | ClassifyError::Alignment { .. } => 500,
            };
            crate::routes::json_response(status, &serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Image bytes from either a multipart form or a raw request body.
fn read_upload(request: &mut Request) -> Option<Vec<u8>> {
    let content_type = request.headers().iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    let mut body: Vec<u8> = Vec::new();
    request.as_reader().read_to_end(&mut body).ok()?;

    let bytes = if content_type.starts_with("multipart/form-data") {
        let boundary = extract_boundary(&content_type)?;
        multipart_extract_file(&body, &boundary)?
    } else {
        body
    };
    if bytes.is_empty() { None } else { Some(bytes) }
}

fn user_message(e: &ClassifyError) -> String {
    match e {
        ClassifyError::Decode(_) => format!("Could not read that image ({}). Please pick another.", e),
        ClassifyError::Classifier(_) => format!("The model produced no result: {}", e),
        ClassifyError::Alignment { .. } => format!("Model and label list do not match: {}", e),
    }
}

// ---------------------------------------------------------------------------
// HTML fragments
// ---------------------------------------------------------------------------

fn build_page(ctx: &SharedContext, result_html: &str) -> String {
    let config = ctx.config();
    render_page(config.top_k, (config.width, config.height), |tmpl| {
        tmpl.replace("{{RESULT_SECTION}}", result_html)
    })
}

fn results_html(predictions: &[Prediction]) -> String {
    let rows: String = predictions.iter().map(|p| {
        format!(
            "<li>\u{2022} {}<span class=\"score\">{:.4}</span></li>",
            html_escape(&p.label), p.score
        )
    }).collect();
    format!(r#"<div class="result-card"><ul>{}</ul></div>"#, rows)
}

fn error_html(msg: &str) -> String {
    format!(r#"<div class="result-card"><div class="error-box">{}</div></div>"#, html_escape(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_are_escaped_bullets() {
        let html = results_html(&[Prediction { index: 0, label: "<cat>".into(), score: 0.75 }]);
        assert!(html.contains("\u{2022} &lt;cat&gt;"));
        assert!(html.contains("0.7500"));
    }

    #[test]
    fn decode_message_asks_for_another_image() {
        let err = ClassifyError::Decode(ferrite_vision::DecodeError::Channels(2));
        assert!(user_message(&err).contains("pick another"));
    }
}
