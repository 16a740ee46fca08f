use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

/// Serializes the status line and header block, blank line included.
fn serialize_head(version: &str, server: &str, resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        version,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    buf.extend_from_slice(b"Server: ");
    buf.extend_from_slice(server.as_bytes());
    buf.extend_from_slice(b"\r\n");
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

pub struct ResponseWriter {
    head: Vec<u8>,
    written: usize,
    body: Body,
}

impl ResponseWriter {
    pub fn new(version: &str, server: &str, response: Response) -> Self {
        Self {
            head: serialize_head(version, server, &response),
            written: 0,
            body: response.body,
        }
    }

    /// Writes the header block, flushes it, then sends the body raw.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.head.len() {
            let n = stream.write(&self.head[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }
        stream.flush().await?;

        match std::mem::take(&mut self.body) {
            Body::Empty => {}
            Body::Bytes(bytes) => stream.write_all(&bytes).await?,
            Body::File(mut file) => {
                let sent = tokio::io::copy(&mut file, stream).await?;
                tracing::trace!(bytes = sent, "File body sent");
            }
        }
        stream.flush().await?;

        Ok(())
    }
}
