use std::fmt;

use crate::http::request::{DEFAULT_VERSION, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was received.
    Empty,
    /// The request line has no space, so there is no target.
    MissingTarget,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty request"),
            ParseError::MissingTarget => write!(f, "request line has no target"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line at the start of `buf`.
///
/// The request line ends at the first CRLF, or at the end of the buffer when
/// there is none. It is split on single spaces: the first token is the
/// method, the second the target, the third (if any) the version. Further
/// tokens are ignored. Headers and body are not inspected.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let line_end = find_line_end(buf).unwrap_or(buf.len());
    let line = String::from_utf8_lossy(&buf[..line_end]);

    let mut parts = line.split(' ');

    let method = parts.next().ok_or(ParseError::MissingTarget)?;
    let target = parts.next().ok_or(ParseError::MissingTarget)?;
    let version = parts.next().unwrap_or(DEFAULT_VERSION);

    Ok(Request {
        method: method.to_string(),
        target: target.to_string(),
        version: version.to_string(),
    })
}

/// Parses a serialized status line (`HTTP/1.1 404 Not Found\r\n...`) back
/// into its code and reason phrase.
pub fn parse_status_line(buf: &[u8]) -> Option<(u16, String)> {
    let line_end = find_line_end(buf)?;
    let line = std::str::from_utf8(&buf[..line_end]).ok()?;

    let (version, rest) = line.split_once(' ')?;
    if !version.starts_with("HTTP/") {
        return None;
    }

    let (code, reason) = rest.split_once(' ')?;
    let code = code.parse::<u16>().ok()?;

    Some((code, reason.to_string()))
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}
