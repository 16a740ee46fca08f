//! Filegate - a file-backed HTTP/1.x server
//!
//! Maps GET, HEAD, POST, PUT and DELETE onto reads, appends, overwrites and
//! deletions of files under a document root.

pub mod config;
pub mod http;
pub mod resource;
pub mod server;
