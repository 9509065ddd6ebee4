//! Static content resolution.
//!
//! Handlers never touch the filesystem directly. They go through a
//! [`ContentResolver`], which maps a resource name (the request target with
//! surrounding slashes removed) to existence, a media type and the bytes.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::http::mime;

/// Maps resource names to content.
pub trait ContentResolver: Send + Sync {
    /// Whether `name` refers to an existing resource.
    fn exists(&self, name: &str) -> bool;

    /// Media type of `name`, or `None` if it cannot be classified.
    fn guess_type(&self, name: &str) -> Option<String>;

    /// Raw contents of `name`.
    fn read_bytes(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Contents of `name` as text. Invalid UTF-8 sequences are replaced,
    /// never fatal.
    fn read_text(&self, name: &str) -> io::Result<String> {
        let bytes = self.read_bytes(name)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Serves files below a root directory.
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `name` onto the root. Names that would escape the root
    /// (`..`, absolute paths, drive prefixes) resolve to nothing.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if !confined {
            tracing::debug!(name, "rejecting resource outside of root");
            return None;
        }

        Some(self.root.join(relative))
    }
}

impl ContentResolver for FsResolver {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|path| path.is_file())
    }

    fn guess_type(&self, name: &str) -> Option<String> {
        mime::guess_type(name).map(str::to_string)
    }

    fn read_bytes(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self.resolve(name).ok_or_else(|| {
            io::Error::new(io::ErrorKind::PermissionDenied, "path escapes content root")
        })?;
        std::fs::read(path)
    }
}

/// In-memory content, keyed by resource name.
///
/// Media types come from an explicit override when one was given, otherwise
/// from the name's extension.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    entries: HashMap<String, (Vec<u8>, Option<String>)>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), (body.into(), None));
    }

    pub fn insert_typed(
        &mut self,
        name: impl Into<String>,
        media_type: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) {
        self.entries
            .insert(name.into(), (body.into(), Some(media_type.into())));
    }

    pub fn with(mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(name, body);
        self
    }
}

impl ContentResolver for MemoryResolver {
    fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn guess_type(&self, name: &str) -> Option<String> {
        match self.entries.get(name) {
            Some((_, Some(media_type))) => Some(media_type.clone()),
            _ => mime::guess_type(name).map(str::to_string),
        }
    }

    fn read_bytes(&self, name: &str) -> io::Result<Vec<u8>> {
        self.entries
            .get(name)
            .map(|(body, _)| body.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_resolver_rejects_parent_components() {
        let resolver = FsResolver::new("/srv/www");

        assert!(resolver.resolve("../etc/passwd").is_none());
        assert!(resolver.resolve("a/../../b").is_none());
        assert!(resolver.resolve("/etc/passwd").is_none());
        assert_eq!(
            resolver.resolve("css/site.css"),
            Some(PathBuf::from("/srv/www/css/site.css"))
        );
    }

    #[test]
    fn memory_resolver_prefers_explicit_type() {
        let mut resolver = MemoryResolver::new();
        resolver.insert_typed("blob", "image/x-custom", vec![1, 2, 3]);
        resolver.insert("page.html", "<p>hi</p>");

        assert_eq!(resolver.guess_type("blob").as_deref(), Some("image/x-custom"));
        assert_eq!(resolver.guess_type("page.html").as_deref(), Some("text/html"));
        assert_eq!(resolver.guess_type("missing"), None);
    }

    #[test]
    fn read_text_replaces_invalid_utf8() {
        let resolver = MemoryResolver::new().with("bad.txt", vec![b'o', b'k', 0xff, b'!']);

        assert_eq!(resolver.read_text("bad.txt").unwrap(), "ok\u{FFFD}!");
    }
}
