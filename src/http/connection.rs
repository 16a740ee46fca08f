use std::sync::Arc;

use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf, WriteHalf,
};

use crate::config::Config;
use crate::http::parser::{fallback_version, parse_request_line, trim_line_ending, ParseError};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::resource::FileHandlers;

/// One request/response exchange over a bidirectional byte stream.
pub struct Connection<S> {
    reader: BufReader<ReadHalf<S>>,
    writer: WriteHalf<S>,
    config: Arc<Config>,
    handlers: FileHandlers,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Rejecting { version: String, error: ParseError },
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite,
{
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        let (read_half, write_half) = tokio::io::split(stream);
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
            handlers: FileHandlers::from_config(&config),
            config,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the exchange to completion and closes the output side.
    ///
    /// An `Err` means the connection was dropped without a complete response.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match self.read_head().await? {
                    Some(line) => {
                        tracing::info!(request = %line, "Request received");
                        match parse_request_line(&line) {
                            Ok(req) => ConnectionState::Processing(req),
                            Err(error) => ConnectionState::Rejecting {
                                version: fallback_version(&line).to_string(),
                                error,
                            },
                        }
                    }
                    None => {
                        tracing::debug!("Client closed before sending a request");
                        ConnectionState::Closed
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = self.handlers.dispatch(&req, &mut self.reader).await?;

                    tracing::info!(
                        method = %req.method,
                        target = %req.target,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    let writer =
                        ResponseWriter::new(&req.version, &self.config.server_name, response);
                    ConnectionState::Writing(writer)
                }

                ConnectionState::Rejecting { version, error } => {
                    tracing::warn!(error = %error, "Bad request");

                    let response = Response::notice(StatusCode::BadRequest, &error.to_string());
                    let writer = ResponseWriter::new(&version, &self.config.server_name, response);
                    ConnectionState::Writing(writer)
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.writer).await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => {
                    break;
                }
            };
        }

        self.writer.shutdown().await?;
        Ok(())
    }

    /// Reads the request line and skips the header block.
    ///
    /// Returns `None` if the stream ended before any byte arrived.
    async fn read_head(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = Vec::new();

        if self.reader.read_until(b'\n', &mut line).await? == 0 {
            return Ok(None);
        }
        let request_line = String::from_utf8_lossy(trim_line_ending(&line)).into_owned();

        // Headers are ignored; a blank request line has none to skip
        if !request_line.is_empty() {
            loop {
                line.clear();
                let n = self.reader.read_until(b'\n', &mut line).await?;
                if n == 0 || trim_line_ending(&line).is_empty() {
                    break;
                }
            }
        }

        Ok(Some(request_line))
    }
}
