//! Single-byte lookahead over a byte source

/// Byte cursor consumed by the parser
///
/// `None` marks the end of input. Implementations must return the same byte
/// from `peek` and `pop` for the same position, and must keep returning
/// `None` once the source is exhausted.
pub trait Cursor {
    /// Get the next byte without consuming it
    fn peek(&mut self) -> Option<u8>;

    /// Get the next byte and advance past it
    fn pop(&mut self) -> Option<u8>;

    /// Step back one byte; does nothing at the start of input
    fn putback(&mut self);
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn peek(&mut self) -> Option<u8> {
        (**self).peek()
    }

    fn pop(&mut self) -> Option<u8> {
        (**self).pop()
    }

    fn putback(&mut self) {
        (**self).putback();
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn peek(&mut self) -> Option<u8> {
        (**self).peek()
    }

    fn pop(&mut self) -> Option<u8> {
        (**self).pop()
    }

    fn putback(&mut self) {
        (**self).putback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::BufferReader;

    fn drain(cursor: &mut dyn Cursor) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(b) = cursor.pop() {
            out.push(b);
        }
        out
    }

    #[test]
    fn test_dyn_cursor() {
        let mut reader = BufferReader::from_str("abc");
        assert_eq!(drain(&mut reader), b"abc");
    }

    #[test]
    fn test_boxed_cursor() {
        let mut boxed: Box<dyn Cursor> = Box::new(BufferReader::from_str("xy"));
        assert_eq!(boxed.peek(), Some(b'x'));
        assert_eq!(boxed.pop(), Some(b'x'));
        boxed.putback();
        assert_eq!(drain(&mut boxed), b"xy");
    }
}
