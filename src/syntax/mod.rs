//! Regex-based syntax highlighting
//!
//! A best-effort colorizer, not a parser: seven sequential substitution
//! passes over one viewport-clipped line segment, each wrapping its
//! matches in an SGR color and a foreground reset.
//!
//! Rule order is a hard contract. Later passes run over the textual
//! output of earlier passes, and only the ordering keeps them from
//! re-matching inside already-emitted escape codes. Do not reorder.

use once_cell::sync::Lazy;
use regex::Regex;

/// SGR foreground codes used by the rules
mod color {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[39m";
}

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)").unwrap());
static SINGLE_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(')([^']*)(')").unwrap());
static DOUBLE_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(")([^"]*)(")"#).unwrap());
static OPERATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(&{1,2}|[-*+\\|?"<>;:=!])"#).unwrap());
static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\W])(try|let|const|constructor|require|this|new|undefined)([\W])").unwrap()
});
static RESERVED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([\W])(break|case|catch|continue|debugger|default|delete|do|else|finally|for|function|if|in|instanceof|new|return|switch)([\W])",
    )
    .unwrap()
});
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(//.*$)").unwrap());

/// Colorize one already-clipped render segment.
pub fn highlight(segment: &str) -> String {
    let s = NUMBER.replace_all(segment, format!("{}${{1}}{}", color::RED, color::RESET));
    let s = SINGLE_QUOTE.replace_all(
        &s,
        format!("{}${{1}}${{2}}${{3}}{}", color::MAGENTA, color::RESET),
    );
    let s = DOUBLE_QUOTE.replace_all(
        &s,
        format!("{}${{1}}${{2}}${{3}}{}", color::MAGENTA, color::RESET),
    );
    let s = OPERATOR.replace_all(&s, format!("{}${{1}}{}", color::CYAN, color::RESET));
    let s = KEYWORD.replace_all(
        &s,
        format!("${{1}}{}${{2}}{}${{3}}", color::GREEN, color::RESET),
    );
    let s = RESERVED.replace_all(
        &s,
        format!("${{1}}{}${{2}}{}${{3}}", color::YELLOW, color::RESET),
    );
    let s = COMMENT.replace_all(&s, format!("{}${{1}}{}", color::CYAN, color::RESET));
    s.into_owned()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
