/*
 * preprocess.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Line preprocessing.
//!
//! Turns raw INI text into [`LogicalLine`]s ready for classification. The
//! passes run in a fixed order:
//!
//! 1. blank lines are dropped
//! 2. comment lines (`;` or `#` after optional indentation) are dropped
//! 3. indented lines are joined onto the preceding logical line
//!
//! Comments are only recognized at the start of a line. A trailing `; note`
//! after a value stays part of the value.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());
static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").unwrap());
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[;#]").unwrap());
static CONTINUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]+").unwrap());

/// One complete header or entry line, after comment removal and
/// continuation joining.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalLine {
    /// The joined line content. Never blank and never a comment.
    pub text: String,
    /// 1-based physical line on which this logical line starts.
    pub line_number: usize,
}

impl LogicalLine {
    pub fn new(text: impl Into<String>, line_number: usize) -> Self {
        Self {
            text: text.into(),
            line_number,
        }
    }
}

/// Split raw text into physical lines and preprocess them.
///
/// `\r\n`, `\r` and `\n` each end a physical line. Runs of line breaks only
/// produce empty lines, which the blank pass removes, so the result is the
/// same as splitting on whole runs; counting each break keeps line numbers
/// faithful to the source.
pub fn preprocess(text: &str) -> Vec<LogicalLine> {
    preprocess_lines(LINE_BREAK_RE.split(text))
}

/// Preprocess text that has already been split into physical lines.
pub fn preprocess_lines<'a, I>(lines: I) -> Vec<LogicalLine>
where
    I: IntoIterator<Item = &'a str>,
{
    let numbered = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !is_blank(line))
        .filter(|(_, line)| !is_comment(line));

    join_continuations(numbered)
}

/// Returns true if the line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    BLANK_RE.is_match(line)
}

/// Returns true if the line is a full-line comment.
pub fn is_comment(line: &str) -> bool {
    COMMENT_RE.is_match(line)
}

/// If `line` is a continuation, returns its content without the indentation.
fn continuation_content(line: &str) -> Option<&str> {
    CONTINUATION_RE.find(line).map(|m| &line[m.end()..])
}

fn join_continuations<'a>(lines: impl Iterator<Item = (usize, &'a str)>) -> Vec<LogicalLine> {
    let mut result = Vec::new();
    let mut pending = LogicalLine::default();

    for (line_number, line) in lines {
        match continuation_content(line) {
            Some(content) => {
                // A continuation before any content starts the accumulator.
                if pending.text.is_empty() {
                    pending.line_number = line_number;
                }
                pending.text.push_str(content);
            }
            None => {
                flush(&mut pending, &mut result);
                pending = LogicalLine::new(line, line_number);
            }
        }
    }
    flush(&mut pending, &mut result);

    result
}

fn flush(pending: &mut LogicalLine, result: &mut Vec<LogicalLine>) {
    if !pending.text.is_empty() {
        result.push(std::mem::take(pending));
    }
}
