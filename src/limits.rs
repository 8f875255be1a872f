//! DoS prevention constants.
//!
//! These limits keep rendering linear-ish on pathological replies.

/// Maximum nesting depth for inline spans (emphasis inside links inside
/// strikethrough ...). Deeper content is emitted as literal text.
pub const MAX_INLINE_NESTING: usize = 32;

/// Maximum digits in an ordered list marker (prevents big-integer labels).
pub const MAX_LIST_MARKER_DIGITS: usize = 9;

/// Maximum ATX heading level.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Largest reply the range-based pipeline can address.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;
