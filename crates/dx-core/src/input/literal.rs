//! Bracketed list literals: `['fever', "cough"]`, `[0.9, 0.7]`.
//!
//! Items are either quoted strings (single or double quotes, backslash escapes
//! the next character) or bare numbers. A trailing comma is allowed.

use thiserror::Error;

/// One element of a list literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Text(String),
    Number(f64),
}

impl Item {
    fn kind(&self) -> &'static str {
        match self {
            Item::Text(_) => "string",
            Item::Number(_) => "number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("expected a list starting with '['")]
    MissingOpen,

    #[error("list is not closed with ']'")]
    MissingClose,

    #[error("unterminated string starting at column {column}")]
    UnterminatedString { column: usize },

    #[error("expected ',' or ']' at column {column}")]
    ExpectedSeparator { column: usize },

    #[error("empty list item at column {column}")]
    EmptyItem { column: usize },

    #[error("invalid number {token:?}")]
    InvalidNumber { token: String },

    #[error("unexpected content after ']' at column {column}")]
    TrailingContent { column: usize },

    #[error("item {index} is a {found}, expected a {expected}")]
    WrongKind {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// Parse one list literal occupying the whole of `text` (surrounding
/// whitespace ignored).
pub fn parse_list(text: &str) -> Result<Vec<Item>, LiteralError> {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = skip_whitespace(&chars, 0);
    if chars.get(pos) != Some(&'[') {
        return Err(LiteralError::MissingOpen);
    }
    pos += 1;

    let mut items = Vec::new();
    loop {
        pos = skip_whitespace(&chars, pos);
        match chars.get(pos) {
            None => return Err(LiteralError::MissingClose),
            Some(']') => {
                pos += 1;
                break;
            }
            Some(&quote) if quote == '\'' || quote == '"' => {
                let (value, next) = read_string(&chars, pos, quote)?;
                items.push(Item::Text(value));
                pos = next;
            }
            Some(',') => return Err(LiteralError::EmptyItem { column: pos + 1 }),
            Some(_) => {
                let start = pos;
                while let Some(c) = chars.get(pos) {
                    if *c == ',' || *c == ']' || c.is_whitespace() {
                        break;
                    }
                    pos += 1;
                }
                let token: String = chars[start..pos].iter().collect();
                let value = token
                    .parse::<f64>()
                    .map_err(|_| LiteralError::InvalidNumber { token: token.clone() })?;
                items.push(Item::Number(value));
            }
        }

        pos = skip_whitespace(&chars, pos);
        match chars.get(pos) {
            Some(',') => pos += 1,
            Some(']') => {
                pos += 1;
                break;
            }
            None => return Err(LiteralError::MissingClose),
            Some(_) => return Err(LiteralError::ExpectedSeparator { column: pos + 1 }),
        }
    }

    let rest = skip_whitespace(&chars, pos);
    if rest < chars.len() {
        return Err(LiteralError::TrailingContent { column: rest + 1 });
    }
    Ok(items)
}

/// Require every item to be a string.
pub fn into_strings(items: Vec<Item>) -> Result<Vec<String>, LiteralError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Item::Text(s) => Ok(s),
            other => Err(LiteralError::WrongKind {
                index,
                expected: "string",
                found: other.kind(),
            }),
        })
        .collect()
}

/// Require every item to be a number.
pub fn into_numbers(items: Vec<Item>) -> Result<Vec<f64>, LiteralError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Item::Number(n) => Ok(n),
            other => Err(LiteralError::WrongKind {
                index,
                expected: "number",
                found: other.kind(),
            }),
        })
        .collect()
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while chars.get(pos).is_some_and(|c| c.is_whitespace()) {
        pos += 1;
    }
    pos
}

fn read_string(chars: &[char], open: usize, quote: char) -> Result<(String, usize), LiteralError> {
    let mut value = String::new();
    let mut pos = open + 1;
    loop {
        match chars.get(pos) {
            None => return Err(LiteralError::UnterminatedString { column: open + 1 }),
            Some('\\') => {
                let escaped = chars
                    .get(pos + 1)
                    .ok_or(LiteralError::UnterminatedString { column: open + 1 })?;
                value.push(*escaped);
                pos += 2;
            }
            Some(c) if *c == quote => return Ok((value, pos + 1)),
            Some(c) => {
                value.push(*c);
                pos += 1;
            }
        }
    }
}
