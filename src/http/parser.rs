use std::fmt;

use crate::http::request::{Method, Request};

/// Version used in the status line when the request line carries none.
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The request line was blank
    Empty,
    /// Fewer than three non-empty tokens (method, target, version)
    MissingParts,
    /// The method token contains characters not allowed in a token
    InvalidMethod(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request line"),
            ParseError::MissingParts => f.write_str("malformed request line"),
            ParseError::InvalidMethod(m) => write!(f, "{} is not a valid method", m),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses `METHOD SP TARGET SP VERSION`, line terminator already removed.
///
/// Tokens are separated by single spaces. Anything after the third token is
/// ignored.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parts = line.split(' ');

    let method_str = next_token(&mut parts)?;
    let target = next_token(&mut parts)?;
    let version = next_token(&mut parts)?;

    let method = Method::from_token(method_str)
        .ok_or_else(|| ParseError::InvalidMethod(method_str.to_string()))?;

    Ok(Request {
        method,
        target: target.to_string(),
        version: version.to_string(),
    })
}

/// The version to echo when answering a line that failed to parse.
pub fn fallback_version(line: &str) -> &str {
    line.split(' ')
        .nth(2)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_VERSION)
}

/// Strips a trailing `\n` or `\r\n`.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn next_token<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, ParseError> {
    parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::MissingParts)
}
