//! Zero-copy cursor over in-memory bytes

use crate::cursor::Cursor;

/// Cursor over a byte slice
#[derive(Clone, Debug)]
pub struct BufferReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BufferReader<'a> {
    /// Create from byte slice
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Create from string
    pub const fn from_str(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }

    /// Get current position index
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Get source bytes
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }
}

impl Cursor for BufferReader<'_> {
    fn peek(&mut self) -> Option<u8> {
        self.data.get(self.pos).copied()
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

impl<'a> From<&'a str> for BufferReader<'a> {
    fn from(s: &'a str) -> Self {
        Self::from_str(s)
    }
}

impl<'a> From<&'a [u8]> for BufferReader<'a> {
    fn from(b: &'a [u8]) -> Self {
        Self::new(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_advance() {
        let mut reader = BufferReader::from_str("{    \"id:\", 10}");
        assert_eq!(reader.peek(), Some(b'{'));
        assert_eq!(reader.peek(), Some(b'{'));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_putback_at_start_is_noop() {
        let mut reader = BufferReader::from_str("{}");
        reader.putback();
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.pop(), Some(b'{'));
        reader.putback();
        assert_eq!(reader.pop(), Some(b'{'));
    }

    #[test]
    fn test_repeated_putback() {
        let mut reader = BufferReader::from_str("abc");
        reader.pop();
        reader.pop();
        reader.pop();
        reader.putback();
        reader.putback();
        assert_eq!(reader.position(), 1);
        reader.putback();
        reader.putback();
        reader.putback();
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.pop(), Some(b'a'));
    }

    #[test]
    fn test_end_of_input() {
        let mut reader = BufferReader::from_str("x");
        assert_eq!(reader.pop(), Some(b'x'));
        assert!(reader.is_eof());
        assert_eq!(reader.pop(), None);
        assert_eq!(reader.pop(), None);
        assert_eq!(reader.peek(), None);
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn test_empty_input() {
        let mut reader: BufferReader<'_> = b"".as_slice().into();
        assert!(reader.is_eof());
        assert_eq!(reader.peek(), None);
        reader.putback();
        assert_eq!(reader.position(), 0);
    }
}
