//! Request target resolution
//!
//! Resolution is purely textual: no URL decoding, no canonicalization, no
//! symlink handling. A target containing `..` segments can therefore reach
//! outside the document root.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::config::Config;

/// What a resolved path denotes at the moment it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// First segment is the reserved directory name
    Forbidden,
    IsDirectory,
    NotFound,
    Exists,
}

/// A request target mapped onto the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    /// Target with the root alias applied and one leading `/` removed
    relative: String,
    /// `relative` joined onto the document root
    full: PathBuf,
}

impl ResourcePath {
    pub fn relative(&self) -> &str {
        &self.relative
    }

    pub fn full(&self) -> &Path {
        &self.full
    }

    /// The first `/`-separated segment of the relative path.
    pub fn first_segment(&self) -> &str {
        self.relative.split('/').next().unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
    default_document: String,
    reserved_dir: String,
}

impl Resolver {
    pub fn new(
        root: impl Into<PathBuf>,
        default_document: impl Into<String>,
        reserved_dir: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            default_document: default_document.into(),
            reserved_dir: reserved_dir.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.document_root.clone(),
            cfg.default_document.clone(),
            cfg.reserved_dir.clone(),
        )
    }

    /// Applies the `/` alias and strips exactly one leading separator.
    pub fn resolve(&self, target: &str) -> ResourcePath {
        let target = if target == "/" {
            self.default_document.as_str()
        } else {
            target
        };
        let relative = target.strip_prefix('/').unwrap_or(target).to_string();
        let full = self.root.join(&relative);

        ResourcePath { relative, full }
    }

    pub fn is_reserved(&self, path: &ResourcePath) -> bool {
        path.first_segment() == self.reserved_dir
    }

    /// Classifies a resolved path against the filesystem.
    ///
    /// The reserved-name check happens first and touches nothing on disk.
    /// Metadata failures other than "not found" are reported as `NotFound`.
    pub async fn classify(&self, path: &ResourcePath) -> Access {
        if self.is_reserved(path) {
            return Access::Forbidden;
        }

        match fs::metadata(path.full()).await {
            Ok(meta) if meta.is_dir() => Access::IsDirectory,
            Ok(_) => Access::Exists,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(path = %path.full().display(), error = %e, "Metadata lookup failed");
                }
                Access::NotFound
            }
        }
    }

    /// Resolves and classifies in one step.
    pub async fn locate(&self, target: &str) -> (ResourcePath, Access) {
        let path = self.resolve(target);
        let access = self.classify(&path).await;
        (path, access)
    }
}
