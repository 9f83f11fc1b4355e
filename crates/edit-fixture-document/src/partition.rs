//! Content partitions.
//!
//! The partitioner splits a document into maximal runs of one content kind, driven by the
//! tokens of a [`LanguageConfig`]. Partitions are contiguous and cover the whole document.
//!
//! - A line comment runs up to (not including) the next `\n`.
//! - An unterminated block comment runs to the end of the document.
//! - A string or char literal ends at its closing delimiter; an unterminated one ends at the
//!   line break. The escape character skips the next character, except a line break.

use edit_fixture_lang::LanguageConfig;
use std::ops::Range;

/// Kind of content in a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKind {
    /// Everything that is not a comment or literal.
    Code,
    /// A line comment, including its token.
    LineComment,
    /// A block comment, including both tokens.
    BlockComment,
    /// A string literal, including delimiters.
    String,
    /// A character literal, including delimiters.
    Char,
}

/// A run of the document with a single [`PartitionKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Content kind.
    pub kind: PartitionKind,
    /// Character range (half-open).
    pub range: Range<usize>,
}

impl Partition {
    fn new(kind: PartitionKind, range: Range<usize>) -> Self {
        Self { kind, range }
    }
}

/// Compute the partitions of `text`.
pub fn partition(text: &str, language: &LanguageConfig) -> Vec<Partition> {
    let chars: Vec<char> = text.chars().collect();
    let line_token: Option<Vec<char>> = language
        .comments
        .line_token()
        .map(|t| t.chars().collect());
    let block_tokens: Option<(Vec<char>, Vec<char>)> = language
        .comments
        .block_tokens()
        .map(|(start, end)| (start.chars().collect(), end.chars().collect()));

    let mut partitions = Vec::new();
    let mut code_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let special = if line_token.as_ref().is_some_and(|t| starts_with(&chars, i, t)) {
            let end = find_char(&chars, i, '\n').unwrap_or(chars.len());
            Some((PartitionKind::LineComment, end))
        } else if let Some((start, end_token)) = block_tokens
            .as_ref()
            .filter(|(start, _)| starts_with(&chars, i, start))
        {
            let end = find_token(&chars, i + start.len(), end_token)
                .map(|at| at + end_token.len())
                .unwrap_or(chars.len());
            Some((PartitionKind::BlockComment, end))
        } else if Some(chars[i]) == language.string_delimiter {
            Some((PartitionKind::String, literal_end(&chars, i, language.escape)))
        } else if Some(chars[i]) == language.char_delimiter {
            Some((PartitionKind::Char, literal_end(&chars, i, language.escape)))
        } else {
            None
        };

        match special {
            Some((kind, end)) => {
                if code_start < i {
                    partitions.push(Partition::new(PartitionKind::Code, code_start..i));
                }
                partitions.push(Partition::new(kind, i..end));
                i = end;
                code_start = end;
            }
            None => i += 1,
        }
    }

    if code_start < chars.len() {
        partitions.push(Partition::new(PartitionKind::Code, code_start..chars.len()));
    }
    partitions
}

fn starts_with(chars: &[char], at: usize, token: &[char]) -> bool {
    chars.get(at..at + token.len()) == Some(token)
}

fn find_char(chars: &[char], from: usize, needle: char) -> Option<usize> {
    chars[from..].iter().position(|&c| c == needle).map(|p| from + p)
}

fn find_token(chars: &[char], from: usize, token: &[char]) -> Option<usize> {
    (from..chars.len()).find(|&at| starts_with(chars, at, token))
}

/// End (exclusive) of the literal opened at `open`.
fn literal_end(chars: &[char], open: usize, escape: char) -> usize {
    let delimiter = chars[open];
    let mut i = open + 1;
    while i < chars.len() {
        match chars[i] {
            '\n' => return i,
            c if c == escape => {
                if chars.get(i + 1) == Some(&'\n') {
                    return i + 1;
                }
                i += 2;
            }
            c if c == delimiter => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}
