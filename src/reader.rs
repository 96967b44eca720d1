//! Byte sources implementing [`Cursor`](crate::Cursor)
//!
//! - [`BufferReader`] views bytes already in memory
//! - [`FileReader`] reads a file (or any seekable stream) through a buffer
//! - [`MmapReader`] maps a whole file and views the mapping

pub mod buffer;
pub mod file;
pub mod mmap;

pub use buffer::BufferReader;
pub use file::FileReader;
pub use mmap::MmapReader;
