//! Cursor over a memory-mapped file

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;
use tracing::{debug, warn};

use crate::cursor::Cursor;

/// Maps a whole file read-only and walks the mapping
///
/// Opening never fails: when the file cannot be opened or mapped the reader
/// exposes an empty view and keeps the failure in [`MmapReader::error`]. The
/// mapping is released when the reader is dropped; the file handle is closed
/// as soon as the mapping exists.
#[derive(Debug)]
pub struct MmapReader {
    map: Option<Mmap>,
    pos: usize,
    error: Option<io::Error>,
}

impl MmapReader {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path).and_then(|file| map_file(&file)) {
            Ok(map) => {
                debug!(path = %path.display(), len = map.len(), "mapped file");
                Self {
                    map: Some(map),
                    pos: 0,
                    error: None,
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to map file");
                Self {
                    map: None,
                    pos: 0,
                    error: Some(e),
                }
            }
        }
    }

    /// The mapped bytes, or an empty slice when mapping failed
    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or_default()
    }

    pub fn is_mapped(&self) -> bool {
        self.map.is_some()
    }

    /// Why the file could not be mapped
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub const fn position(&self) -> usize {
        self.pos
    }
}

#[allow(unsafe_code)]
fn map_file(file: &File) -> io::Result<Mmap> {
    // SAFETY: the mapping is read-only and owned by the reader. Truncating the
    // file from another process while it is mapped is undefined behaviour and
    // is the caller's responsibility to avoid.
    unsafe { Mmap::map(file) }
}

impl Cursor for MmapReader {
    fn peek(&mut self) -> Option<u8> {
        self.as_bytes().get(self.pos).copied()
    }

    fn pop(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn putback(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }
}
