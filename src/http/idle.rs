//! Idle-read deadlines for request bodies.
//!
//! POST and PUT bodies have no length framing: the client is done once it
//! stops sending. Expiry is reported as a value, separate from `io::Error`,
//! so callers never mistake a quiet client for a broken one.

use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::time::timeout;

/// Outcome of a read bounded by an idle deadline.
#[derive(Debug, PartialEq, Eq)]
pub enum Idle<T> {
    /// The read completed before the deadline
    Ready(T),
    /// Nothing arrived within the deadline
    Expired,
}

/// Runs `read`, giving up after `limit` without treating that as an error.
pub async fn within<T, F>(limit: Duration, read: F) -> io::Result<Idle<T>>
where
    F: Future<Output = io::Result<T>>,
{
    match timeout(limit, read).await {
        Ok(result) => result.map(Idle::Ready),
        Err(_) => Ok(Idle::Expired),
    }
}
