//! Reading and writing graphs in Graphviz DOT format.
//!
//! [`DiGraph::from_dot`](crate::DiGraph::from_dot) builds a `DiGraph<String>`
//! from DOT text, and [`DiGraph::write_dot`](crate::DiGraph::write_dot)
//! renders any graph whose vertices implement `Display`.  A node's `label`
//! attribute, when present, is used as its vertex identifier, so rendering a
//! graph and parsing the output gives back the same vertices and edges.
use std::io;

mod parser;
mod renderer;

/// Errors that can occur while reading or writing DOT data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DotError {
    /// The input is not valid DOT.
    #[error("failed to parse DOT data: {0}")]
    Parse(String),
    /// A graph name that is not a valid DOT identifier.
    #[error("invalid DOT identifier: {0}")]
    InvalidId(String),
    /// Writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Removes one level of double quotes from a DOT identifier and undoes the
/// backslash escapes the renderer writes into labels (`\\`, `\"`, `\'`,
/// `\n`, `\r`, `\t` and `\u{..}`).  Unrecognised escapes are kept as
/// written.
pub(crate) fn unquote(id: &str) -> String {
    let inner = id
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(id);
    unescape(inner)
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(q @ ('"' | '\'' | '\\')) => out.push(q),
            Some('u') => match unicode_escape(chars.as_str()) {
                Some((decoded, rest)) => {
                    out.push(decoded);
                    chars = rest.chars();
                }
                None => out.push_str("\\u"),
            },
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Decodes the `{hex}` part of a `\u{hex}` escape, returning the character
/// and the text after the closing brace.
fn unicode_escape(text: &str) -> Option<(char, &str)> {
    let body = text.strip_prefix('{')?;
    let end = body.find('}')?;
    let code = u32::from_str_radix(&body[..end], 16).ok()?;
    Some((char::from_u32(code)?, &body[end + 1..]))
}
