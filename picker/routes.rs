use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};
use tracing::debug;

use crate::handlers;
use crate::state::SharedContext;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn header(name: &str, value: &str) -> Header {
    // Both halves are ASCII literals from this module.
    Header::from_bytes(name.as_bytes(), value.as_bytes()).expect("valid static header")
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![header("Content-Type", "text/html; charset=utf-8")],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn json_response(status: u16, value: &serde_json::Value) -> Response<Cursor<Vec<u8>>> {
    let bytes = value.to_string().into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![header("Content-Type", "application/json")],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![header("Content-Type", "text/plain")],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches one request and responds to it.
pub fn dispatch(mut request: Request, ctx: SharedContext) {
    let method = request.method().clone();
    let url    = request.url().to_owned();
    let path   = url.split('?').next().unwrap_or("").to_owned();
    debug!(%method, %path, "request");

    let response = match (method, path.as_str()) {
        (Method::Get,  "/")             => handlers::classify::handle_get(ctx),
        (Method::Post, "/classify")     => handlers::classify::handle_classify(&mut request, ctx),
        (Method::Post, "/api/classify") => handlers::classify::handle_api(&mut request, ctx),
        _ => not_found(),
    };

    let _ = request.respond(response);
}
