use std::ops::Range;

/// Resolves optional `start`/`end` offsets against a sequence of `len` units.
///
/// Negative offsets count back from the end, out-of-range offsets clamp to
/// `[0, len]`, and `start >= end` yields an empty range.
pub fn resolve(len: usize, start: Option<isize>, end: Option<isize>) -> Range<usize> {
    let start = start.map_or(0, |offset| clamp(offset, len));
    let end = end.map_or(len, |offset| clamp(offset, len));

    if start >= end { start..start } else { start..end }
}

fn clamp(offset: isize, len: usize) -> usize {
    if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        (offset as usize).min(len)
    }
}
