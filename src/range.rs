//! Compact range representation for zero-copy text references.
//!
//! Uses `u32` offsets to save memory (8 bytes vs 16 for usize pair).
//! Replies longer than 4GB are rejected up front (see [`crate::limits`]).

/// Compact byte range into the placeholder-bearing reply text.
///
/// # Example
/// ```
/// use replymark::Range;
///
/// let text = "Hello, World!";
/// let range = Range::new(7, 12);
/// assert_eq!(range.str_of(text), "World");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

// Compile-time size verification
const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the byte slice this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start_usize()..self.end_usize()]
    }

    /// Get the text this range refers to.
    ///
    /// Ranges produced by the block parser always sit on char boundaries
    /// because they start and end next to ASCII markers or whitespace.
    #[inline]
    pub fn str_of<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start_usize()..self.end_usize()]
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Shrink the range so it excludes leading and trailing whitespace of `text`.
    pub fn trimmed(&self, text: &str) -> Self {
        let s = self.str_of(text);
        let lead = s.len() - s.trim_start().len();
        let body = s.trim();
        let start = self.start_usize() + lead;
        Self::from_usize(start, start + body.len())
    }
}
