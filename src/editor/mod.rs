//! Editor core
//! The modal state machine that ties every component together
//!
//! ## editor/ Invariants
//!
//! - One key event is fully processed (state mutation + render) before
//!   the next is accepted.
//! - The cursor addresses a real line or the virtual line past the end;
//!   `cx` never exceeds the current line's length after a key returns.
//! - Every mutating NORMAL-mode command records exactly one undo
//!   snapshot before its effects apply; an INSERT session shares the
//!   snapshot of the command that entered it.
//! - Recoverable failures (save) become status messages, never panics.

use crate::buffer::Buffer;
use crate::column;
use crate::constants::ui::HELP_MESSAGE;
use crate::error::EditorError;
use crate::key::Key;
use crate::message::StatusMessage;
use crate::mode::{Mode, PendingOperator};
use crate::render::{self, FrameInput};
use crate::search::SearchState;
use crate::term::TerminalBackend;
use crate::undo::{Snapshot, UndoStore};
use crate::viewport::Viewport;

/// Cursor motion directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Main editor struct
pub struct Editor<T: TerminalBackend> {
    /// Terminal backend
    pub term: T,
    buffer: Buffer,
    viewport: Viewport,
    search: SearchState,
    undo: UndoStore,
    message: StatusMessage,
    mode: Mode,
    pending: PendingOperator,
    command_line: String,
    yank: String,
    cx: usize,
    cy: usize,
    should_quit: bool,
}

impl<T: TerminalBackend> Editor<T> {
    /// Create a new editor instance with an empty buffer
    pub fn new(terminal: T) -> Result<Self, EditorError> {
        Self::with_file(terminal, None)
    }

    /// Create a new editor instance with an optional file to load.
    ///
    /// The file is loaded before the terminal is initialized so a failed
    /// open never leaves the terminal in raw mode.
    pub fn with_file(mut terminal: T, filename: Option<String>) -> Result<Self, EditorError> {
        let buffer = match filename {
            Some(path) => Buffer::from_file(path)?,
            None => Buffer::new(),
        };

        terminal.init().map_err(EditorError::terminal)?;
        let size = terminal.get_size().map_err(EditorError::terminal)?;

        let mut message = StatusMessage::new();
        message.set(HELP_MESSAGE);

        Ok(Editor {
            term: terminal,
            buffer,
            viewport: Viewport::new(size.rows as usize, size.cols as usize),
            search: SearchState::new(),
            undo: UndoStore::new(),
            message,
            mode: Mode::Normal,
            pending: PendingOperator::None,
            command_line: String::new(),
            yank: String::new(),
            cx: 0,
            cy: 0,
            should_quit: false,
        })
    }

    /// Run the editor until quit. The terminal is restored on both the
    /// clean and the error path; errors bubble up for `main` to report.
    pub fn run(&mut self) -> Result<(), EditorError> {
        let result = self.event_loop();
        let _ = self.term.clear_screen();
        self.term.deinit();
        result
    }

    fn event_loop(&mut self) -> Result<(), EditorError> {
        self.refresh()?;
        loop {
            let key = self.term.read_key().map_err(EditorError::terminal)?;
            self.process_key(key);
            if self.should_quit {
                return Ok(());
            }
            self.refresh()?;
        }
    }

    /// Recompute the viewport and write one full frame
    pub fn refresh(&mut self) -> Result<(), EditorError> {
        let rx = if self.cy < self.buffer.line_count() {
            column::raw_to_render_column(self.buffer.row(self.cy).unwrap_or(""), self.cx)
        } else {
            0
        };
        self.viewport.scroll(self.cy, rx);

        let frame = render::draw_frame(&FrameInput {
            buffer: &self.buffer,
            viewport: &self.viewport,
            cy: self.cy,
            rx,
            message: &self.message,
        });
        self.term.write(frame.as_bytes()).map_err(EditorError::terminal)
    }

    /// Process a single key event against the current mode
    pub fn process_key(&mut self, key: Key) {
        match key {
            Key::Resize(cols, rows) => {
                self.viewport.resize(rows as usize, cols as usize);
            }
            Key::Escape => {
                // Unconditional return to NORMAL from any state
                if self.mode == Mode::Command {
                    self.message.set("");
                }
                self.mode = Mode::Normal;
                self.pending = PendingOperator::None;
                self.search.end();
                self.command_line.clear();
            }
            Key::Ctrl(b'q') => {
                self.should_quit = true;
            }
            Key::Ctrl(b's') => {
                self.save_file();
            }
            Key::Ctrl(_) => {}
            key => {
                let came_from_command = self.mode == Mode::Command;
                match self.mode {
                    Mode::Normal => self.normal_key(key),
                    Mode::Insert => self.insert_key(key),
                    Mode::Search => self.search_key(key),
                    Mode::Command => self.command_key(key),
                }
                self.clamp_cursor();

                if self.mode == Mode::Command {
                    self.message.set(format!(":{}", self.command_line));
                } else if !came_from_command {
                    // Command dispatch owns its result message
                    self.update_position_message();
                }
            }
        }
    }

    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.cx, self.cy)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // === NORMAL mode ===

    fn normal_key(&mut self, key: Key) {
        // Any key other than the matching repeat cancels a pending operator
        let pending = std::mem::take(&mut self.pending);

        match key {
            Key::Char('h') | Key::ArrowLeft => self.move_cursor(Direction::Left),
            Key::Char('l') | Key::ArrowRight => self.move_cursor(Direction::Right),
            Key::Char('k') | Key::ArrowUp => self.move_cursor(Direction::Up),
            Key::Char('j') | Key::ArrowDown => self.move_cursor(Direction::Down),
            Key::Enter => self.move_cursor(Direction::Down),
            Key::Char('0') | Key::Char('^') | Key::Home => self.cx = 0,
            Key::Char('$') | Key::End => {
                if self.cy < self.buffer.line_count() {
                    self.cx = self.buffer.row_len(self.cy);
                }
            }
            Key::Char('g') => {
                if pending == PendingOperator::G {
                    self.cx = 0;
                    self.cy = 0;
                } else {
                    self.pending = PendingOperator::G;
                }
            }
            Key::Char('G') => {
                if !self.buffer.is_empty() {
                    self.cy = self.buffer.line_count() - 1;
                }
                self.cx = 0;
            }
            Key::PageUp => self.page_move(Direction::Up),
            Key::PageDown => self.page_move(Direction::Down),
            Key::Char('i') => {
                self.snapshot();
                self.mode = Mode::Insert;
            }
            Key::Char('a') => {
                self.snapshot();
                self.move_cursor(Direction::Right);
                self.mode = Mode::Insert;
            }
            Key::Char('o') => {
                self.snapshot();
                self.move_cursor(Direction::Down);
                self.buffer.insert_row(self.cy, String::new());
                self.cx = 0;
                self.mode = Mode::Insert;
            }
            Key::Char('O') => {
                self.snapshot();
                self.buffer.insert_row(self.cy, String::new());
                self.cx = 0;
                self.mode = Mode::Insert;
            }
            Key::Char('x') | Key::Delete => {
                if self.deletable() {
                    self.snapshot();
                }
                self.delete_char_at_cursor();
            }
            Key::Backspace => {
                self.move_cursor(Direction::Left);
                if self.deletable() {
                    self.snapshot();
                }
                self.delete_char_at_cursor();
            }
            Key::Char('d') => {
                if pending == PendingOperator::D {
                    self.delete_line();
                } else {
                    self.pending = PendingOperator::D;
                }
            }
            Key::Char('D') => self.delete_to_eol(),
            Key::Char('y') => {
                if pending == PendingOperator::Y {
                    if let Some(row) = self.buffer.row(self.cy) {
                        self.yank = row.to_string();
                    }
                } else {
                    self.pending = PendingOperator::Y;
                }
            }
            Key::Char('p') => {
                self.snapshot();
                self.move_cursor(Direction::Down);
                self.buffer.insert_row(self.cy, self.yank.clone());
            }
            Key::Char('u') => self.undo_swap(),
            Key::Char('/') => {
                self.mode = Mode::Search;
                self.search.begin();
            }
            Key::Char(':') => {
                self.mode = Mode::Command;
                self.command_line.clear();
            }
            _ => {}
        }
    }

    // === INSERT mode ===

    fn insert_key(&mut self, key: Key) {
        match key {
            Key::Home => self.cx = 0,
            Key::End => {
                if self.cy < self.buffer.line_count() {
                    self.cx = self.buffer.row_len(self.cy);
                }
            }
            Key::Enter => self.split_line(),
            Key::Backspace => {
                self.move_cursor(Direction::Left);
                self.delete_char_at_cursor();
            }
            Key::Delete => self.delete_char_at_cursor(),
            Key::ArrowLeft => self.move_cursor(Direction::Left),
            Key::ArrowRight => self.move_cursor(Direction::Right),
            Key::ArrowUp => self.move_cursor(Direction::Up),
            Key::ArrowDown => self.move_cursor(Direction::Down),
            Key::PageUp => self.page_move(Direction::Up),
            Key::PageDown => self.page_move(Direction::Down),
            key => {
                if let Some(c) = key.printable_char() {
                    self.cy = self.buffer.insert_char(self.cy, self.cx, c);
                    self.move_cursor(Direction::Right);
                }
            }
        }
    }

    // === SEARCH mode ===

    fn search_key(&mut self, key: Key) {
        match key {
            // The query resets but matches survive until the next rescan
            Key::Backspace | Key::Delete => self.search.clear_query(),
            Key::Enter => {
                self.search.end();
                self.mode = Mode::Normal;
            }
            Key::ArrowRight | Key::ArrowUp => {
                if let Some(hit) = self.search.next() {
                    self.cx = hit.col;
                    self.cy = hit.line;
                }
            }
            Key::ArrowLeft | Key::ArrowDown => {
                if let Some(hit) = self.search.prev() {
                    self.cx = hit.col;
                    self.cy = hit.line;
                }
            }
            key => {
                if let Some(c) = key.printable_char() {
                    if let Some(hit) = self.search.push_char(c, &self.buffer) {
                        self.cx = hit.col;
                        self.cy = hit.line;
                    }
                }
            }
        }
    }

    // === COMMAND mode ===

    fn command_key(&mut self, key: Key) {
        match key {
            Key::Enter => {
                let cmd = std::mem::take(&mut self.command_line);
                self.mode = Mode::Normal;
                self.message.set("");
                match cmd.as_str() {
                    "w" => self.save_file(),
                    "q" => self.should_quit = true,
                    "wq" => {
                        self.save_file();
                        self.should_quit = true;
                    }
                    // Unrecognized commands are silently discarded
                    _ => {}
                }
            }
            Key::Backspace => {
                if self.command_line.is_empty() {
                    self.mode = Mode::Normal;
                    self.message.set("");
                } else {
                    self.command_line.pop();
                }
            }
            key => {
                if let Some(c) = key.printable_char() {
                    self.command_line.push(c);
                }
            }
        }
    }

    // === Cursor movement ===

    fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = self.buffer.row_len(self.cy);
                }
            }
            Direction::Right => {
                if self.cy < self.buffer.line_count() {
                    if self.cx < self.buffer.row_len(self.cy) {
                        self.cx += 1;
                    } else {
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            Direction::Up => {
                if self.cy > 0 {
                    self.cy -= 1;
                }
            }
            Direction::Down => {
                if self.cy < self.buffer.line_count() {
                    self.cy += 1;
                }
            }
        }
        self.clamp_cursor();
    }

    /// Page motion: jump to the viewport edge, then move a full screen
    fn page_move(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.cy = self.viewport.rowoff(),
            Direction::Down => {
                self.cy = (self.viewport.rowoff() + self.viewport.screenrows())
                    .saturating_sub(1)
                    .min(self.buffer.line_count());
            }
            _ => return,
        }
        for _ in 0..self.viewport.screenrows() {
            self.move_cursor(direction);
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.buffer.row_len(self.cy);
        if self.cx > len {
            self.cx = len;
        }
    }

    // === Buffer operations ===

    fn deletable(&self) -> bool {
        !self.buffer.is_empty() && self.cy < self.buffer.line_count()
    }

    fn delete_char_at_cursor(&mut self) {
        if !self.deletable() {
            return;
        }
        self.cy = self.buffer.delete_char(self.cy, self.cx);
    }

    /// `dd`: char-delete across the whole line, yanking it first.
    /// A zero-length line yields zero deletes and survives.
    fn delete_line(&mut self) {
        if self.cy >= self.buffer.line_count() {
            return;
        }
        self.snapshot();
        let row = self.buffer.row(self.cy).unwrap_or("").to_string();
        let times = row.chars().count();
        self.yank = row;
        self.cx = 0;
        for _ in 0..times {
            self.cy = self.buffer.delete_char(self.cy, self.cx);
        }
    }

    /// `D`: char-delete from the cursor to the end of the line
    fn delete_to_eol(&mut self) {
        let len = self.buffer.row_len(self.cy);
        if self.cy >= self.buffer.line_count() || self.cx >= len {
            return;
        }
        self.snapshot();
        for _ in self.cx..len {
            self.cy = self.buffer.delete_char(self.cy, self.cx);
        }
    }

    /// INSERT-mode return: split the line at the cursor and land at the
    /// start of the new line
    fn split_line(&mut self) {
        if self.cy == self.buffer.line_count() {
            self.buffer.insert_row(self.cy, String::new());
        } else {
            self.buffer.split_row(self.cy, self.cx);
        }
        self.cy += 1;
        self.cx = 0;
    }

    // === Undo ===

    fn capture(&self) -> Snapshot {
        Snapshot {
            rows: self.buffer.rows().to_vec(),
            cx: self.cx,
            cy: self.cy,
            rowoff: self.viewport.rowoff(),
            coloff: self.viewport.coloff(),
            dirty: self.buffer.dirty_count(),
        }
    }

    fn snapshot(&mut self) {
        self.undo.record(self.capture());
    }

    /// Swap the current state with the stored snapshot; no-op without
    /// history. Applying undo twice returns to the post-mutation state.
    fn undo_swap(&mut self) {
        let current = self.capture();
        if let Some(prev) = self.undo.swap(current) {
            self.buffer.restore(prev.rows, prev.dirty);
            self.cx = prev.cx;
            self.cy = prev.cy;
            self.viewport.set_offsets(prev.rowoff, prev.coloff);
        }
    }

    // === Persistence ===

    /// Save the buffer; both outcomes surface as a status message and
    /// the editor keeps running
    fn save_file(&mut self) {
        match self.buffer.save() {
            Ok(bytes) => self.message.set(format!("{} bytes written to disk", bytes)),
            Err(e) => self.message.set(e.to_string()),
        }
    }

    // === Status line ===

    fn update_position_message(&mut self) {
        let search = if self.mode == Mode::Search {
            format!(
                "/{} ({}) found <-prev:next->",
                self.search.query(),
                self.search.match_count()
            )
        } else {
            String::new()
        };
        let insert = if self.mode == Mode::Insert {
            "-- INSERT --"
        } else {
            ""
        };
        self.message
            .set(format!("({}:{}) - {} - {}", self.cx, self.cy, search, insert));
    }
}
