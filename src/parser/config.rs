/// Default maximum nesting depth for objects/arrays
pub const DEFAULT_MAX_DEPTH: u16 = 128;
/// Default maximum input size in bytes
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for parser limits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum number of bytes consumed from the cursor (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: u16) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub(crate) const fn depth_exceeded(&self, depth: u16) -> bool {
        self.max_depth != 0 && depth > self.max_depth
    }

    pub(crate) const fn size_exceeded(&self, size: usize) -> bool {
        self.max_size != 0 && size > self.max_size
    }
}
