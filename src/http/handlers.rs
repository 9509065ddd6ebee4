//! Method handlers.

use crate::http::dispatcher::Dispatcher;
use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

pub const NOT_FOUND_BODY: &str = "<h1>404 Not Found</h1>";
pub const NOT_IMPLEMENTED_BODY: &str = "<h1>501 Not Implemented</h1>";
pub const ALLOW: &str = "OPTIONS, GET";

/// Serves a static resource.
///
/// Image bodies (and unclassifiable ones) go out as raw bytes; everything
/// else is read as text with invalid UTF-8 replaced.
pub fn get(ctx: &Dispatcher, req: &Request) -> Response {
    let name = match req.resource_name() {
        "" => ctx.index(),
        name => name,
    };

    let resolver = ctx.resolver();
    if !resolver.exists(name) {
        return not_found(ctx);
    }

    let media_type = resolver.guess_type(name).unwrap_or_else(|| {
        tracing::debug!(resource = name, "unknown media type, using fallback");
        mime::FALLBACK.to_string()
    });

    let builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Type", media_type.as_str());

    let body = if mime::is_binary(&media_type) {
        resolver.read_bytes(name).map(|bytes| builder.bytes(bytes))
    } else {
        resolver.read_text(name).map(|text| builder.text(text))
    };

    match body {
        Ok(builder) => builder.build(ctx.headers()),
        Err(e) => {
            tracing::warn!(resource = name, error = %e, "failed to read resource");
            not_found(ctx)
        }
    }
}

pub fn options(ctx: &Dispatcher) -> Response {
    ResponseBuilder::new(StatusCode::Ok)
        .header("Allow", ALLOW)
        .build(ctx.headers())
}

pub fn not_implemented(ctx: &Dispatcher) -> Response {
    ResponseBuilder::new(StatusCode::NotImplemented)
        .text(NOT_IMPLEMENTED_BODY)
        .build(ctx.headers())
}

pub fn not_found(ctx: &Dispatcher) -> Response {
    ResponseBuilder::new(StatusCode::NotFound)
        .text(NOT_FOUND_BODY)
        .build(ctx.headers())
}
