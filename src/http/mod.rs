//! HTTP protocol implementation.
//!
//! One request per connection, no keep-alive, no chunked bodies.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine driving one exchange
//! - **`parser`**: Splits the request line into method, target and version
//! - **`request`**: Method and request representation
//! - **`response`**: Status codes, bodies and the response builder
//! - **`writer`**: Serializes the status line and headers, then streams the body
//! - **`mime`**: Content type inference from file extensions
//! - **`idle`**: Idle-read deadlines that end POST and PUT bodies
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Request line, then headers are skipped
//!        └──────┬──────┘
//!               │
//!       ┌───────┴────────┐
//!       ▼                ▼
//! ┌────────────┐  ┌─────────────┐
//! │ Processing │  │  Rejecting  │ ← Malformed request line (400)
//! └─────┬──────┘  └──────┬──────┘
//!       └───────┬────────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Writing   │ ← Header block flushed, then body
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Closed    │
//!        └─────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use filegate::config::Config;
//! use filegate::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Arc::new(Config::default());
//!     let listener = TcpListener::bind(&cfg.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let cfg = Arc::clone(&cfg);
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, cfg).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod idle;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
