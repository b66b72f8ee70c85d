//! Editor mode definitions

/// Editor operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal mode (motions and operators)
    Normal,
    /// Insert mode (text entry)
    Insert,
    /// Command mode (ex command line, entered with :)
    Command,
    /// Search mode (entered with /)
    Search,
}

impl Mode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
            Mode::Search => "SEARCH",
        }
    }
}

/// First half of a two-key operator (`gg`, `dd`, `yy`).
///
/// Any key other than the matching repeat clears the pending state, so
/// mixed sequences like `g` then `y` are no-ops by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOperator {
    #[default]
    None,
    /// `g` pressed, waiting for a second `g`
    G,
    /// `d` pressed, waiting for a second `d`
    D,
    /// `y` pressed, waiting for a second `y`
    Y,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strings() {
        assert_eq!(Mode::Normal.as_str(), "NORMAL");
        assert_eq!(Mode::Insert.as_str(), "INSERT");
        assert_eq!(Mode::Command.as_str(), "COMMAND");
        assert_eq!(Mode::Search.as_str(), "SEARCH");
    }

    #[test]
    fn test_pending_operator_default() {
        assert_eq!(PendingOperator::default(), PendingOperator::None);
    }
}
