//! Global constants for the Quill editor

pub mod layout {
    /// Render columns per tab stop
    pub const TAB_STOP: usize = 8;

    /// Render-column alignment applied to non-ASCII code points
    pub const WIDE_ALIGN: usize = 2;

    /// Rows reserved for the status and message bars
    pub const CHROME_ROWS: usize = 2;
}

pub mod ui {
    /// Display text for buffers with no file path
    pub const NO_NAME: &str = "[No Name]";

    /// Message bar text shown on startup
    pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit";

    /// Welcome banner shown on an empty buffer
    pub const WELCOME: &str = concat!("Quill editor -- version ", env!("CARGO_PKG_VERSION"));

    /// Seconds a status message stays visible
    pub const MESSAGE_TIMEOUT_SECS: u64 = 5;
}
