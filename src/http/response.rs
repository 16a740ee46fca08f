use bytes::Bytes;
use tokio::fs::File;

/// HTTP status codes the server emits.
///
/// - `Ok` (200): File served or replaced
/// - `Created` (201): File created by PUT
/// - `NoContent` (204): DELETE succeeded, or a POST body ended
/// - `BadRequest` (400): Malformed request line
/// - `Forbidden` (403): Target lies under the reserved directory
/// - `NotFound` (404): No such file
/// - `PreconditionFailed` (412): Target is a directory, or POST to a non-text file
/// - `InternalServerError` (500): Write failure during POST/PUT
/// - `NotImplemented` (501): Well-formed but unhandled method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 204 No Content
    NoContent,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 412 Precondition Failed
    PreconditionFailed,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use filegate::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::PreconditionFailed.as_u16(), 412);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::PreconditionFailed => 412,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::PreconditionFailed => "Precondition Failed",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// What follows the header block.
#[derive(Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    /// Inline bytes, sent as-is
    Bytes(Bytes),
    /// An opened file, copied raw to the connection
    File(File),
}

impl Body {
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }
}

/// A response ready to be handed to the [`ResponseWriter`](crate::http::writer::ResponseWriter).
///
/// The `Server` header is added by the writer; `headers` holds everything else,
/// in emission order.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .file(file)
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Body,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// Adds a header, replacing any earlier value under the same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Body::Bytes(body.into());
        self
    }

    pub fn file(mut self, file: File) -> Self {
        self.body = Body::File(file);
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A response carrying a one-line HTML notice, e.g. `<h1>File created</h1>`.
    pub fn notice(status: StatusCode, message: &str) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", "text/html")
            .body(format!("<h1>{}</h1>\n", message))
            .build()
    }

    /// Status line and `Server` header only.
    pub fn empty(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    pub fn internal_error() -> Self {
        Self::notice(StatusCode::InternalServerError, "Internal Server Error")
    }

    pub fn not_implemented(method: &str) -> Self {
        Self::notice(
            StatusCode::NotImplemented,
            &format!("{} is not supported", method),
        )
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
