//! Buffered cursor over a file or any seekable stream

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek};
use std::path::Path;

use tracing::{debug, warn};

use crate::cursor::Cursor;

/// Sequential cursor over a `Read + Seek` source
///
/// Reads go through a [`BufReader`]; stepping back seeks one byte, which stays
/// inside the buffer in the common case. An I/O error ends the input and is
/// kept for inspection through [`FileReader::io_error`].
#[derive(Debug)]
pub struct FileReader<R = File> {
    inner: BufReader<R>,
    offset: u64,
    error: Option<io::Error>,
}

impl FileReader<File> {
    /// Open a file by path
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened file reader");
        Ok(Self::new(file))
    }
}

impl<R: Read + Seek> FileReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            offset: 0,
            error: None,
        }
    }

    /// Bytes consumed so far
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// The I/O error that ended the input, if any
    pub fn io_error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    fn record(&mut self, err: io::Error) {
        warn!(offset = self.offset, error = %err, "file reader failed");
        self.error = Some(err);
    }
}

impl<R: Read + Seek> Cursor for FileReader<R> {
    fn peek(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }
        loop {
            let next = self.inner.fill_buf().map(|buf| buf.first().copied());
            match next {
                Ok(b) => return b,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.record(e);
                    return None;
                }
            }
        }
    }

    fn pop(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.inner.consume(1);
        self.offset += 1;
        Some(b)
    }

    fn putback(&mut self) {
        if self.offset == 0 {
            return;
        }
        match self.inner.seek_relative(-1) {
            Ok(()) => self.offset -= 1,
            Err(e) => self.record(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    #[test]
    fn test_pop_and_peek() {
        let mut reader = FileReader::new(IoCursor::new(b"[1]".to_vec()));
        assert_eq!(reader.peek(), Some(b'['));
        assert_eq!(reader.pop(), Some(b'['));
        assert_eq!(reader.pop(), Some(b'1'));
        assert_eq!(reader.pop(), Some(b']'));
        assert_eq!(reader.pop(), None);
        assert_eq!(reader.offset(), 3);
    }

    #[test]
    fn test_putback_never_below_zero() {
        let mut reader = FileReader::new(IoCursor::new(b"ab".to_vec()));
        reader.putback();
        assert_eq!(reader.offset(), 0);
        assert_eq!(reader.pop(), Some(b'a'));
        assert_eq!(reader.pop(), Some(b'b'));
        reader.putback();
        reader.putback();
        reader.putback();
        assert_eq!(reader.offset(), 0);
        assert_eq!(reader.pop(), Some(b'a'));
        assert!(reader.io_error().is_none());
    }

    #[test]
    fn test_putback_after_end() {
        let mut reader = FileReader::new(IoCursor::new(b"z".to_vec()));
        assert_eq!(reader.pop(), Some(b'z'));
        assert_eq!(reader.pop(), None);
        reader.putback();
        assert_eq!(reader.peek(), Some(b'z'));
    }

    #[test]
    fn test_open_missing_file() {
        let result = FileReader::open("definitely/not/here.json");
        assert!(result.is_err());
    }
}
