//! Frame composition
//! Builds one complete output frame from buffer, viewport and cursor
//!
//! ## render/ Invariants
//!
//! - Rendering reads editor state and buffer contents only.
//! - Rendering never mutates editor, buffer, cursor, or viewport state.
//! - The viewport must be scrolled before a frame is composed.
//! - The whole frame is one string, flushed by the caller in one write.

use crate::buffer::Buffer;
use crate::constants::ui::WELCOME;
use crate::message::StatusMessage;
use crate::syntax;
use crate::term::ansi;
use crate::viewport::Viewport;

/// Everything a frame is composed from
pub struct FrameInput<'a> {
    pub buffer: &'a Buffer,
    pub viewport: &'a Viewport,
    /// Cursor line (raw coordinates)
    pub cy: usize,
    /// Cursor render column
    pub rx: usize,
    pub message: &'a StatusMessage,
}

/// Compose one full frame: hidden cursor, home, text rows, status bar,
/// message bar, cursor placement, visible cursor.
#[must_use]
pub fn draw_frame(input: &FrameInput<'_>) -> String {
    let mut frame = String::new();
    frame.push_str(ansi::HIDE_CURSOR);
    frame.push_str(ansi::RESET_CURSOR);
    draw_rows(input, &mut frame);
    draw_status_bar(input, &mut frame);
    draw_message_bar(input, &mut frame);
    frame.push_str(&ansi::format_cursor_position(
        input.cy - input.viewport.rowoff(),
        input.rx - input.viewport.coloff(),
    ));
    frame.push_str(ansi::SHOW_CURSOR);
    frame
}

/// Draw the text area: populated rows are clipped to the viewport and
/// highlighted; rows past end-of-buffer render as `~`, with the welcome
/// banner centered a third of the way down an empty buffer.
fn draw_rows(input: &FrameInput<'_>, frame: &mut String) {
    let viewport = input.viewport;
    let screencols = viewport.screencols();

    for y in 0..viewport.screenrows() {
        let filerow = y + viewport.rowoff();

        if filerow >= input.buffer.line_count() {
            if input.buffer.is_empty() && y == viewport.screenrows() / 3 {
                draw_welcome(screencols, frame);
            } else {
                frame.push('~');
            }
        } else {
            let row = input.buffer.render_row(filerow).unwrap_or("");
            let segment: String = row
                .chars()
                .skip(viewport.coloff())
                .take(screencols)
                .collect();
            frame.push_str(&syntax::highlight(&segment));
        }
        frame.push_str(ansi::CLEAR_TO_EOL);
        frame.push_str("\r\n");
    }
}

fn draw_welcome(screencols: usize, frame: &mut String) {
    let welcome: String = WELCOME.chars().take(screencols).collect();
    let mut padding = screencols.saturating_sub(welcome.chars().count()) / 2;
    if padding > 0 {
        frame.push('~');
        padding -= 1;
    }
    for _ in 0..padding {
        frame.push(' ');
    }
    frame.push_str(&welcome);
}

/// Inverted status bar: name, line count and modified flag on the left,
/// percentage and line position right-aligned at the edge.
fn draw_status_bar(input: &FrameInput<'_>, frame: &mut String) {
    let screencols = input.viewport.screencols();
    let line_count = input.buffer.line_count();

    frame.push_str(ansi::REVERSE_VIDEO);

    let status = format!(
        "{} - {} lines {}",
        input.buffer.display_name(),
        line_count,
        if input.buffer.is_dirty() { "(modified)" } else { "" }
    );
    let percent = if line_count > 0 {
        (input.cy + 1) * 100 / line_count
    } else {
        0
    };
    let rstatus = format!("{}% {}/{}", percent, input.cy + 1, line_count);

    let mut len = status.chars().count().min(screencols);
    frame.extend(status.chars().take(len));
    while len < screencols {
        if screencols - len == rstatus.chars().count() {
            frame.push_str(&rstatus);
            break;
        }
        frame.push(' ');
        len += 1;
    }

    frame.push_str(ansi::RESET_ATTRIBUTES);
    frame.push_str("\r\n");
}

/// Message bar: the current status message, truncated to the screen width
fn draw_message_bar(input: &FrameInput<'_>, frame: &mut String) {
    frame.push_str(ansi::CLEAR_TO_EOL);
    let text = input.message.text();
    frame.extend(text.chars().take(input.viewport.screencols()));
}
