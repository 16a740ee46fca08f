//! Per-method file operations
//!
//! Every handler follows validate → act → respond and yields exactly one
//! [`Response`]. An `Err` means the request hit a transport or filesystem
//! fault with no defined answer; the connection is then closed without one.

use std::io::ErrorKind;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt};

use crate::config::Config;
use crate::http::idle::{self, Idle};
use crate::http::mime;
use crate::http::parser::trim_line_ending;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::resource::path::{Access, Resolver};

/// Chunk size for PUT body copies
const BUFFER_SIZE: usize = 8192;

/// Serves the handled method set against the document root.
#[derive(Debug, Clone)]
pub struct FileHandlers {
    resolver: Resolver,
    body_timeout: Duration,
}

impl FileHandlers {
    pub fn new(resolver: Resolver, body_timeout: Duration) -> Self {
        Self {
            resolver,
            body_timeout,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Resolver::from_config(cfg), cfg.body_timeout)
    }

    /// Routes a request to its handler. `body` is the connection input,
    /// positioned just after the header block.
    pub async fn dispatch<R>(&self, request: &Request, body: &mut R) -> Result<Response>
    where
        R: AsyncBufRead + Unpin,
    {
        match &request.method {
            Method::GET => self.get(&request.target).await,
            Method::HEAD => self.head(&request.target).await,
            Method::POST => self.post(&request.target, body).await,
            Method::PUT => self.put(&request.target, body).await,
            Method::DELETE => self.delete(&request.target).await,
            other => Ok(Response::not_implemented(other.as_str())),
        }
    }

    /// Sends the file's bytes.
    pub async fn get(&self, target: &str) -> Result<Response> {
        let (path, access) = self.resolver.locate(target).await;

        match access {
            Access::Forbidden => Ok(Response::notice(
                StatusCode::Forbidden,
                "Access to this resource is forbidden",
            )),
            Access::IsDirectory => Ok(Response::notice(
                StatusCode::PreconditionFailed,
                &format!("{} is a directory", path.relative()),
            )),
            // A file may appear or vanish after classification; the open decides.
            Access::NotFound | Access::Exists => match File::open(path.full()).await {
                Ok(file) => Ok(ResponseBuilder::new(StatusCode::Ok)
                    .header("Content-Type", mime::content_type(path.full()))
                    .file(file)
                    .build()),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    Ok(Response::notice(StatusCode::NotFound, "404 Not Found"))
                }
                Err(e) => Err(e)
                    .with_context(|| format!("failed to open {}", path.full().display())),
            },
        }
    }

    /// Same classification as GET, never a body.
    pub async fn head(&self, target: &str) -> Result<Response> {
        let (path, access) = self.resolver.locate(target).await;

        let response = match access {
            Access::Forbidden => Response::empty(StatusCode::Forbidden),
            Access::IsDirectory => Response::empty(StatusCode::PreconditionFailed),
            Access::NotFound => Response::empty(StatusCode::NotFound),
            Access::Exists => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", mime::content_type(path.full()))
                .build(),
        };
        Ok(response)
    }

    /// Appends the body, line by line, to a text file.
    ///
    /// The body ends when the client goes quiet for `body_timeout` or closes
    /// its side. Lines written before a failure stay written.
    pub async fn post<R>(&self, target: &str, body: &mut R) -> Result<Response>
    where
        R: AsyncBufRead + Unpin,
    {
        let path = self.resolver.resolve(target);

        let content_type = mime::content_type(path.full());
        if !mime::is_text(&content_type) {
            tracing::debug!(path = path.relative(), content_type = %content_type, "POST target is not text");
            return Ok(Response::empty(StatusCode::PreconditionFailed));
        }

        let mut file = match OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.full())
            .await
        {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(path = path.relative(), error = %e, "Failed to open file for append");
                return Ok(Response::empty(StatusCode::InternalServerError));
            }
        };

        let mut line = Vec::new();
        let mut appended = 0usize;
        loop {
            line.clear();
            let n = match idle::within(self.body_timeout, body.read_until(b'\n', &mut line)).await {
                Ok(Idle::Ready(n)) => n,
                Ok(Idle::Expired) => {
                    // An unterminated last line is already buffered when the deadline hits
                    if !line.is_empty() {
                        if let Err(e) = append_line(&mut file, trim_line_ending(&line)).await {
                            tracing::warn!(path = path.relative(), error = %e, "Failed to append line");
                            return Ok(Response::empty(StatusCode::InternalServerError));
                        }
                        appended += 1;
                    }
                    tracing::debug!(path = path.relative(), lines = appended, "POST body idle, finishing");
                    break;
                }
                Err(e) => {
                    tracing::warn!(path = path.relative(), error = %e, "Failed to read POST body");
                    return Ok(Response::empty(StatusCode::InternalServerError));
                }
            };
            if n == 0 {
                break;
            }

            if let Err(e) = append_line(&mut file, trim_line_ending(&line)).await {
                tracing::warn!(path = path.relative(), error = %e, "Failed to append line");
                return Ok(Response::empty(StatusCode::InternalServerError));
            }
            appended += 1;
        }

        Ok(Response::empty(StatusCode::NoContent))
    }

    /// Replaces the file with the body, creating it if needed.
    ///
    /// The status is chosen before any byte is written. A client that stalls
    /// mid-upload leaves the partial content in place.
    pub async fn put<R>(&self, target: &str, body: &mut R) -> Result<Response>
    where
        R: AsyncBufRead + Unpin,
    {
        let path = self.resolver.resolve(target);

        let existed = fs::try_exists(path.full()).await.unwrap_or(false);
        let (status, message) = if existed {
            (StatusCode::Ok, "File replaced")
        } else {
            (StatusCode::Created, "File created")
        };

        let mut file = match File::create(path.full()).await {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(path = path.relative(), error = %e, "Failed to create file");
                return Ok(Response::internal_error());
            }
        };

        let mut buf = vec![0u8; BUFFER_SIZE];
        let mut total = 0usize;
        loop {
            let n = match idle::within(self.body_timeout, body.read(&mut buf)).await {
                Ok(Idle::Ready(n)) => n,
                Ok(Idle::Expired) => break,
                Err(e) => {
                    tracing::warn!(path = path.relative(), error = %e, "Failed to read PUT body");
                    return Ok(Response::internal_error());
                }
            };
            if n == 0 {
                break;
            }

            if let Err(e) = file.write_all(&buf[..n]).await {
                tracing::warn!(path = path.relative(), error = %e, "Failed to write PUT body");
                return Ok(Response::internal_error());
            }
            total += n;
        }

        if let Err(e) = file.flush().await {
            tracing::warn!(path = path.relative(), error = %e, "Failed to flush PUT body");
            return Ok(Response::internal_error());
        }

        tracing::debug!(path = path.relative(), bytes = total, created = !existed, "PUT stored");
        Ok(Response::notice(status, message))
    }

    /// Removes the file, or the empty directory, if it exists.
    ///
    /// A directory that still has entries fails the request.
    pub async fn delete(&self, target: &str) -> Result<Response> {
        let path = self.resolver.resolve(target);

        let is_dir = fs::metadata(path.full())
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        let removed = if is_dir {
            fs::remove_dir(path.full()).await
        } else {
            fs::remove_file(path.full()).await
        };

        match removed {
            Ok(()) => Ok(Response::empty(StatusCode::NoContent)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Ok(Response::notice(StatusCode::NotFound, "File not found"))
            }
            Err(e) => {
                Err(e).with_context(|| format!("failed to delete {}", path.full().display()))
            }
        }
    }
}

async fn append_line(file: &mut File, text: &[u8]) -> std::io::Result<()> {
    file.write_all(text).await?;
    file.write_all(b"\n").await?;
    file.flush().await
}
