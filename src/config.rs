use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

pub const USAGE: &str = "Usage: filegate <port>";

/// Runtime settings shared by every connection.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the listener binds to, e.g. `0.0.0.0:8080`
    pub listen_addr: String,
    /// Directory resource paths are resolved against
    pub document_root: PathBuf,
    /// Name substituted when the request target is exactly `/`
    pub default_document: String,
    /// First path segment that GET and HEAD refuse to serve
    pub reserved_dir: String,
    /// How long a POST/PUT body may stay idle before it is considered complete
    pub body_timeout: Duration,
    /// Value of the `Server` header
    pub server_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            document_root: PathBuf::from("."),
            default_document: "index.html".to_string(),
            reserved_dir: "src".to_string(),
            body_timeout: Duration::from_secs(5),
            server_name: format!("filegate/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Builds the configuration from the command line arguments, program name excluded.
    ///
    /// Exactly one argument, the TCP port, is accepted.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() != 1 {
            anyhow::bail!("expected exactly one argument, got {}", args.len());
        }

        let port: u16 = args[0]
            .parse()
            .with_context(|| format!("invalid port {:?}", args[0]))?;

        Ok(Self {
            listen_addr: format!("0.0.0.0:{}", port),
            ..Self::default()
        })
    }
}
