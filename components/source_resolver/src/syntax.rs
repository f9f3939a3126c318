//! Syntax error location heuristics.
//!
//! When a script fails to compile there is no stack to parse, only the
//! engine's message. This scanner walks the source once, tracking strings,
//! comments and open brackets, and guesses where the error is.
//!
//! Regular-expression literals are not recognised: a `/[(]/` or `/'/` in
//! the learner's code is scanned as ordinary brackets or quotes and can
//! produce a wrong guess. A backslash line continuation followed by a CRLF
//! line ending is reported as a broken string: the backslash escapes the
//! `\r`, not the `\n`.

use core_types::SourcePosition;
use regex::Regex;
use std::sync::LazyLock;

static QUOTED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"`]([^'"`]+)['"`]"#).expect("quoted token pattern"));

const UNEXPECTED_TOKEN_MARKERS: [&str; 3] = [
    "unexpected identifier",
    "unexpected token",
    "invalid or unexpected token",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Literal {
    Single,
    Double,
    Template,
}

impl Literal {
    fn opened_by(ch: char) -> Option<Self> {
        match ch {
            '\'' => Some(Literal::Single),
            '"' => Some(Literal::Double),
            '`' => Some(Literal::Template),
            _ => None,
        }
    }

    fn closer(self) -> char {
        match self {
            Literal::Single => '\'',
            Literal::Double => '"',
            Literal::Template => '`',
        }
    }

    /// Quoted strings may not span lines; templates may
    fn is_single_line(self) -> bool {
        !matches!(self, Literal::Template)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comment {
    Line,
    Block,
}

fn closes(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}'))
}

/// Guess the position of a syntax error in `source`.
///
/// Checked in order: a quoted string broken by a newline, a closing
/// bracket with no matching opener, an unterminated string, an unclosed
/// bracket (the innermost `(` when the message mentions `missing )` or
/// `expected`, else the innermost opener), and finally the first
/// occurrence of a token quoted in an "unexpected token" message.
///
/// # Examples
///
/// ```
/// use source_resolver::infer_syntax_position;
///
/// let pos = infer_syntax_position("foo(bar(1,2);", "missing ) after argument list").unwrap();
/// assert_eq!((pos.line, pos.column), (1, 4));
/// ```
pub fn infer_syntax_position(source: &str, error_message: &str) -> Option<SourcePosition> {
    let mut openers: Vec<(char, SourcePosition)> = Vec::new();
    let mut literal: Option<Literal> = None;
    let mut comment: Option<Comment> = None;
    let mut escaped = false;
    let mut quote_start: Option<SourcePosition> = None;
    let mut line: u32 = 1;
    let mut column: u32 = 0;

    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        column = column.saturating_add(1);

        if ch == '\n' && !escaped && literal.is_some_and(Literal::is_single_line) {
            return Some(
                quote_start.unwrap_or_else(|| SourcePosition::new(line, column.saturating_sub(1))),
            );
        }

        if ch == '\n' {
            line = line.saturating_add(1);
            column = 0;
            if comment == Some(Comment::Line) {
                comment = None;
            }
            escaped = false;
            continue;
        }

        match comment {
            Some(Comment::Line) => continue,
            Some(Comment::Block) => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    column = column.saturating_add(1);
                    comment = None;
                }
                continue;
            }
            None => {}
        }

        if let Some(open) = literal {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open.closer() {
                literal = None;
                quote_start = None;
            }
            continue;
        }

        if ch == '/' {
            let next = match chars.peek() {
                Some('/') => Some(Comment::Line),
                Some('*') => Some(Comment::Block),
                _ => None,
            };
            if next.is_some() {
                chars.next();
                column = column.saturating_add(1);
                comment = next;
                continue;
            }
        }

        let here = SourcePosition::new(line, column);

        if let Some(open) = Literal::opened_by(ch) {
            literal = Some(open);
            quote_start = Some(here);
            continue;
        }

        match ch {
            '(' | '[' | '{' => openers.push((ch, here)),
            ')' | ']' | '}' => {
                if !openers.last().is_some_and(|&(open, _)| closes(open, ch)) {
                    return Some(here);
                }
                openers.pop();
            }
            _ => {}
        }
    }

    if quote_start.is_some() {
        return quote_start;
    }

    let message = error_message.to_lowercase();

    if let Some(&(_, innermost)) = openers.last() {
        if message.contains("missing )") || message.contains("expected") {
            if let Some(&(_, paren)) = openers.iter().rev().find(|(ch, _)| *ch == '(') {
                return Some(paren);
            }
        }
        return Some(innermost);
    }

    if UNEXPECTED_TOKEN_MARKERS.iter().any(|m| message.contains(m)) {
        let token = QUOTED_TOKEN.captures(error_message)?.get(1)?.as_str();
        let index = source.find(token)?;
        return Some(position_of(source, index));
    }

    None
}

/// 1-based position of byte offset `index` in `source`
fn position_of(source: &str, index: usize) -> SourcePosition {
    let mut line: u32 = 1;
    let mut column: u32 = 1;
    for ch in source[..index].chars() {
        if ch == '\n' {
            line = line.saturating_add(1);
            column = 1;
        } else {
            column = column.saturating_add(1);
        }
    }
    SourcePosition::new(line, column)
}
