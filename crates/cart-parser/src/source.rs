//! Where cart text comes from.
//!
//! The orchestrator only needs "read text given a path". [`FsSource`] does
//! that against the filesystem; [`StaticSource`] hands back text it already
//! holds, whatever the path.

use std::io;
use std::path::Path;

/// Reads the full text behind a path.
pub trait TextSource: Send + Sync {
    /// Reads the whole text.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Size in bytes, if known without reading the text.
    fn size_hint(&self, _path: &Path) -> io::Result<Option<u64>> {
        Ok(None)
    }
}

/// Reads files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl TextSource for FsSource {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn size_hint(&self, path: &Path) -> io::Result<Option<u64>> {
        Ok(Some(std::fs::metadata(path)?.len()))
    }
}

/// Returns the same text for every path.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        StaticSource { text: text.into() }
    }
}

impl TextSource for StaticSource {
    fn read_text(&self, _path: &Path) -> io::Result<String> {
        Ok(self.text.clone())
    }

    fn size_hint(&self, _path: &Path) -> io::Result<Option<u64>> {
        Ok(Some(self.text.len() as u64))
    }
}
