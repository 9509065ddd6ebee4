use crate::config::HeadersConfig;

/// HTTP status codes emitted by the server.
///
/// The set is closed:
/// - `Ok` (200): Resource served, or OPTIONS answered
/// - `NotFound` (404): Resource does not exist
/// - `NotImplemented` (501): Method has no handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }

    /// Looks up a numeric code. Anything outside the catalog is `None`.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            404 => Some(StatusCode::NotFound),
            501 => Some(StatusCode::NotImplemented),
            _ => None,
        }
    }
}

/// The base headers present on every response.
///
/// Built once at startup and shared read-only. Responses never modify it;
/// each one computes its own overlay with [`HeaderTable::overlay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTable {
    base: Vec<(String, String)>,
}

impl HeaderTable {
    pub fn new(base: Vec<(String, String)>) -> Self {
        Self { base }
    }

    pub fn from_config(cfg: &HeadersConfig) -> Self {
        Self::new(vec![
            ("Server".to_string(), cfg.server.clone()),
            ("Content-Type".to_string(), cfg.content_type.clone()),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        find(&self.base, name)
    }

    /// Merges `extra` over the base headers.
    ///
    /// An extra header whose name matches a base header (ASCII
    /// case-insensitively) replaces that header's value in place; the rest
    /// are appended in the order given. The result order is therefore
    /// deterministic: base order first, then new names.
    pub fn overlay(&self, extra: &[(String, String)]) -> Vec<(String, String)> {
        let mut merged = self.base.clone();

        for (name, value) in extra {
            match merged
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            {
                Some(slot) => slot.1 = value.clone(),
                None => merged.push((name.clone(), value.clone())),
            }
        }

        merged
    }
}

impl Default for HeaderTable {
    fn default() -> Self {
        Self::from_config(&HeadersConfig::default())
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// `headers` already holds the base headers merged with the handler's
/// extras. No `Content-Length` is added; the end of the body is signalled by
/// closing the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Final header list in serialization order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        find(&self.headers, name)
    }
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use tinyhttpd::http::response::{HeaderTable, ResponseBuilder, StatusCode};
/// let base = HeaderTable::default();
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .text("hello")
///     .build(&base);
///
/// assert_eq!(response.header("Content-Type"), Some("text/plain"));
/// assert_eq!(response.header("Server"), Some("The Ultimate Super Server"));
/// ```
#[derive(Debug)]
pub struct ResponseBuilder {
    status: StatusCode,
    extra_headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            extra_headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header that overrides any base header of the same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    /// Sets a text body, encoded as UTF-8.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = body.into().into_bytes();
        self
    }

    /// Sets an opaque binary body, passed through untouched.
    pub fn bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response against the shared base headers.
    pub fn build(self, base: &HeaderTable) -> Response {
        Response {
            status: self.status,
            headers: base.overlay(&self.extra_headers),
            body: self.body,
        }
    }
}

fn find<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
