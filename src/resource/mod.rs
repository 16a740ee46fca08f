//! File-backed resources
//!
//! Turns request targets into paths under the document root and carries out
//! the per-method filesystem operations.

pub mod handlers;
pub mod path;

pub use handlers::FileHandlers;
pub use path::{Access, ResourcePath, Resolver};
