//! Centralized error handling for Quill
//! Defines the crate-wide error type and its categories

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File system or I/O errors
    Io,
    /// Terminal backend errors
    Terminal,
    /// Rendering errors
    Render,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Terminal => write!(f, "Terminal"),
            Self::Render => write!(f, "Render"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in Quill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Human-readable description
    pub message: String,
}

impl EditorError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Terminal, message)
    }

    /// Check if the message contains a substring (useful for tests)
    #[must_use]
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for EditorError {
    /// `Kind: message`, the shape the status bar shows for save failures
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for EditorError {}
