use std::fmt;

/// HTTP request methods.
///
/// GET, HEAD, POST, PUT and DELETE are served. The remaining registered
/// methods and any other well-formed token are answered with 501.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Append text lines to a file
    POST,
    /// PUT - Create or replace a file
    PUT,
    /// DELETE - Remove a file
    DELETE,
    /// CONNECT - Open a tunnel (not served)
    CONNECT,
    /// OPTIONS - Describe communication options (not served)
    OPTIONS,
    /// TRACE - Echo the request back (not served)
    TRACE,
    /// PATCH - Partial modification of a resource (not served)
    PATCH,
    /// Any other syntactically valid method token
    Extension(String),
}

/// A parsed request line. Headers are consumed but not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target, exactly as sent (e.g. "/index.html")
    pub target: String,
    /// HTTP version, echoed verbatim in the status line
    pub version: String,
}

impl Method {
    /// Parses a method token.
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string is a well-formed token (RFC 7230 `tchar`s),
    /// `None` otherwise. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use filegate::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_token("BREW"), Some(Method::Extension("BREW".into())));
    /// assert_eq!(Method::from_token("GE(T"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(is_tchar) {
            return None;
        }

        let method = match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "CONNECT" => Method::CONNECT,
            "OPTIONS" => Method::OPTIONS,
            "TRACE" => Method::TRACE,
            "PATCH" => Method::PATCH,
            other => Method::Extension(other.to_string()),
        };
        Some(method)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::CONNECT => "CONNECT",
            Method::OPTIONS => "OPTIONS",
            Method::TRACE => "TRACE",
            Method::PATCH => "PATCH",
            Method::Extension(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
