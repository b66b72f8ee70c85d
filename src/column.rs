//! Raw-column to render-column mapping
//! Pure cursor arithmetic shared by the viewport and render pipeline

use crate::constants::layout::{TAB_STOP, WIDE_ALIGN};

/// Map a raw column index into the tab/width-expanded render column.
///
/// Walks the line's code points up to (excluding) `cx`: a tab advances to
/// the next multiple of [`TAB_STOP`], a non-ASCII code point advances to
/// the next multiple of [`WIDE_ALIGN`], and every code point then counts
/// one column. The even-column rounding for non-ASCII glyphs is an
/// approximation, preserved as-is for compatibility with the original's
/// rendering.
#[must_use]
pub fn raw_to_render_column(line: &str, cx: usize) -> usize {
    let mut rx = 0;
    for c in line.chars().take(cx) {
        if c == '\t' {
            rx += (TAB_STOP - 1) - (rx % TAB_STOP);
        }
        if (c as u32) >= 0x80 {
            rx += (WIDE_ALIGN - 1) - (rx % WIDE_ALIGN);
        }
        rx += 1;
    }
    rx
}
