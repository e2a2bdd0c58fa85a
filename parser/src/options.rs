//! Decoding options.

/// The default limit of nested sequence items.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// The highest nesting limit accepted.
///
/// Items are decoded recursively,
/// so larger limits are capped to this value.
pub const MAX_DEPTH_LIMIT: u32 = 256;

/// The set of options for decoding a data set.
///
/// # Example
///
/// ```
/// # use dcmframes_parser::DecodeOptions;
/// let options = DecodeOptions::new()
///     .max_depth(16)
///     .byte_budget(64 * 1024 * 1024);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct DecodeOptions {
    /// The maximum sequence nesting depth,
    /// capped to [`MAX_DEPTH_LIMIT`].
    /// Items beyond it fail with a recursion limit error.
    pub max_depth: u32,
    /// The maximum number of bytes to read from the source,
    /// or `None` for no limit.
    pub byte_budget: Option<u64>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            byte_budget: None,
        }
    }
}

impl DecodeOptions {
    /// Create the default set of options.
    pub fn new() -> Self {
        DecodeOptions::default()
    }

    /// Replace the maximum sequence nesting depth.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Limit the number of bytes read from the source.
    pub fn byte_budget(mut self, budget: u64) -> Self {
        self.byte_budget = Some(budget);
        self
    }

    /// Remove the byte budget.
    pub fn unbounded(mut self) -> Self {
        self.byte_budget = None;
        self
    }

    /// The nesting depth limit in effect.
    pub fn depth_limit(&self) -> u32 {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }
}
