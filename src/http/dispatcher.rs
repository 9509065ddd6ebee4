use std::sync::Arc;

use crate::content::ContentResolver;
use crate::http::handlers;
use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::response::{HeaderTable, Response};

/// The handler a request method routes to.
///
/// Method lookup is total: every token selects exactly one variant, and
/// anything other than GET or OPTIONS (in any letter case) is
/// `NotImplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Get,
    Options,
    NotImplemented,
}

impl Handler {
    /// Selects the handler for a method token.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttpd::http::dispatcher::Handler;
    /// assert_eq!(Handler::for_method("GET"), Handler::Get);
    /// assert_eq!(Handler::for_method("oPtIoNs"), Handler::Options);
    /// assert_eq!(Handler::for_method("PUT"), Handler::NotImplemented);
    /// assert_eq!(Handler::for_method(""), Handler::NotImplemented);
    /// ```
    pub fn for_method(method: &str) -> Self {
        match method.to_ascii_lowercase().as_str() {
            "get" => Handler::Get,
            "options" => Handler::Options,
            _ => Handler::NotImplemented,
        }
    }
}

/// Shared, read-only state every handler runs against.
pub struct Dispatcher {
    headers: HeaderTable,
    resolver: Arc<dyn ContentResolver>,
    index: String,
}

impl Dispatcher {
    pub fn new(
        headers: HeaderTable,
        resolver: Arc<dyn ContentResolver>,
        index: impl Into<String>,
    ) -> Self {
        Self {
            headers,
            resolver,
            index: index.into(),
        }
    }

    pub fn headers(&self) -> &HeaderTable {
        &self.headers
    }

    pub fn resolver(&self) -> &dyn ContentResolver {
        self.resolver.as_ref()
    }

    /// Resource served for an empty target.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Routes a parsed request to its handler and returns the response.
    pub fn dispatch(&self, req: &Request) -> Response {
        let handler = Handler::for_method(&req.method);
        tracing::debug!(method = %req.method, target = %req.target, ?handler, "dispatching");

        match handler {
            Handler::Get => handlers::get(self, req),
            Handler::Options => handlers::options(self),
            Handler::NotImplemented => handlers::not_implemented(self),
        }
    }

    /// Parses raw request bytes and dispatches them.
    ///
    /// Returns `None` when the request line cannot be parsed; nothing must
    /// be sent back in that case.
    pub fn handle(&self, raw: &[u8]) -> Option<Response> {
        match parse_request_line(raw) {
            Ok(req) => Some(self.dispatch(&req)),
            Err(e) => {
                tracing::debug!(error = %e, "unparsable request, no response");
                None
            }
        }
    }
}
