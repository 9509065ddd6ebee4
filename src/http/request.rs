/// HTTP version assumed when the request line carries none.
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

/// Represents a parsed HTTP request line.
///
/// Every field is taken verbatim from the wire: no case folding, no
/// percent-decoding and no character validation. A `Request` only exists
/// for input that had at least a method and a target; anything less is a
/// [`ParseError`](crate::http::parser::ParseError) and is never dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token as sent (e.g., "GET", "get", "XYZ123")
    pub method: String,
    /// The request target as sent (e.g., "/index.html")
    pub target: String,
    /// HTTP version, "HTTP/1.1" when absent from the request line
    pub version: String,
}

/// Builder for constructing Request objects.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<String>,
    target: Option<String>,
    version: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            target: self.target.ok_or("target missing")?,
            version: self
                .version
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        })
    }
}

impl Request {
    /// Resource name derived from the target: surrounding slashes removed.
    ///
    /// Returns an empty string for "/" and for an empty target.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttpd::http::request::RequestBuilder;
    /// let req = RequestBuilder::new().method("GET").target("/css/site.css/").build().unwrap();
    /// assert_eq!(req.resource_name(), "css/site.css");
    /// ```
    pub fn resource_name(&self) -> &str {
        self.target.trim_matches('/')
    }
}
