//! ANSI escape sequences for terminal control
//! The render pipeline embeds these in the composed frame

/// ANSI escape sequence constants
pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const RESET_CURSOR: &str = "\x1b[H";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";
pub const CLEAR_TO_EOL: &str = "\x1b[K";
pub const REVERSE_VIDEO: &str = "\x1b[7m";
pub const RESET_ATTRIBUTES: &str = "\x1b[m";

/// Format cursor position escape sequence (0-indexed input, 1-based code)
#[must_use]
pub fn format_cursor_position(row: usize, col: usize) -> String {
    format!("\x1b[{};{}H", row + 1, col + 1)
}
