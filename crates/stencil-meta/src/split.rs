//! Fence-delimited front matter splitting
//!
//! A fenced document looks like:
//!
//! ```text
//! +++
//! title = "A title"
//! +++
//! Page content
//! ```
//!
//! The opening fence must be the first line. Lines are compared with trailing
//! whitespace removed, but the returned blocks are untouched sub-slices of the
//! input, newline terminators included.

/// Front matter and body of a fenced document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Lines between the fences
    pub meta: &'a [u8],
    /// Everything after the closing fence line
    pub body: &'a [u8],
}

/// Split `input` at the `fence` lines.
///
/// Returns `None` when the first line is not the fence or the closing fence is
/// missing.
pub fn split<'a>(input: &'a [u8], fence: &str) -> Option<Split<'a>> {
    let mut lines = input.split_inclusive(|&b| b == b'\n');

    let first = lines.next()?;
    if !is_fence(first, fence) {
        return None;
    }

    let meta_start = first.len();
    let mut offset = meta_start;
    for line in lines {
        if is_fence(line, fence) {
            return Some(Split {
                meta: &input[meta_start..offset],
                body: &input[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    None
}

fn is_fence(line: &[u8], fence: &str) -> bool {
    line.trim_ascii_end() == fence.as_bytes()
}
