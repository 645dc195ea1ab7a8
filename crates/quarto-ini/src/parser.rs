/*
 * parser.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Line classification and model construction.
//!
//! Each [`LogicalLine`] is either a section header (`[name]`) or an entry
//! (`key = value`). Anything else aborts the parse with
//! [`IniError::Parse`].

use crate::error::{IniError, IniResult};
use crate::model::{DEFAULT_SECTION, Ini};
use crate::preprocess::{LogicalLine, preprocess, preprocess_lines};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[(.*\S.*)\]\s*$").unwrap());
static ENTRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^=]*)=(.*)$").unwrap());

/// A classified logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[name]`, with the name trimmed.
    Section(&'a str),
    /// `key = value`, split on the first `=` with both sides trimmed.
    ///
    /// The key may be empty (`=value`).
    Entry { key: &'a str, value: &'a str },
}

/// Classify a single logical line, or return `None` if it is malformed.
///
/// Headers take precedence, so `[a=b]` is a section named `a=b`.
pub fn classify(text: &str) -> Option<Line<'_>> {
    if let Some(caps) = SECTION_RE.captures(text) {
        let name = caps.get(1)?.as_str().trim();
        return Some(Line::Section(name));
    }
    if let Some(caps) = ENTRY_RE.captures(text) {
        let key = caps.get(1)?.as_str().trim();
        let value = caps.get(2)?.as_str().trim();
        return Some(Line::Entry { key, value });
    }
    None
}

/// Parse INI text into a new [`Ini`].
///
/// # Example
///
/// ```rust
/// use quarto_ini::parse;
///
/// let ini = parse("name = demo\n[server]\nport = 8080").unwrap();
/// assert_eq!(ini.get("default", "name"), Some("demo"));
/// assert_eq!(ini.get("server", "port"), Some("8080"));
/// ```
///
/// # Errors
///
/// - [`IniError::Parse`] for a line that is neither header nor entry
/// - [`IniError::DuplicateSection`] if a header repeats a section name
/// - [`IniError::InvalidName`] for a `[default]` header in any case
pub fn parse(text: &str) -> IniResult<Ini> {
    let mut ini = Ini::new();
    ini.read_str(text)?;
    Ok(ini)
}

/// Parse INI text that has already been split into physical lines.
pub fn parse_lines<'a, I>(lines: I) -> IniResult<Ini>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ini = Ini::new();
    ini.read_lines(lines)?;
    Ok(ini)
}

impl Ini {
    /// Parse INI text into this configuration.
    ///
    /// Entries before the first header go to the default section. Headers
    /// follow [`Ini::add_section`] rules, so a header naming a section that
    /// is already registered fails with [`IniError::DuplicateSection`].
    ///
    /// On error, entries read before the failing line remain in `self`.
    pub fn read_str(&mut self, text: &str) -> IniResult<()> {
        self.read_logical_lines(&preprocess(text))
    }

    /// Like [`Ini::read_str`], for text already split into physical lines.
    pub fn read_lines<'a, I>(&mut self, lines: I) -> IniResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.read_logical_lines(&preprocess_lines(lines))
    }

    /// Populate this configuration from preprocessed lines.
    pub fn read_logical_lines(&mut self, lines: &[LogicalLine]) -> IniResult<()> {
        let mut current = DEFAULT_SECTION.to_string();

        for line in lines {
            match classify(&line.text) {
                Some(Line::Section(name)) => {
                    self.add_section(name)?;
                    tracing::debug!(
                        line_number = line.line_number,
                        section = name,
                        "Registered section"
                    );
                    current = name.to_string();
                }
                Some(Line::Entry { key, value }) => {
                    tracing::trace!(
                        line_number = line.line_number,
                        section = %current,
                        key,
                        "Entry"
                    );
                    self.set(&current, key, value)?;
                }
                None => {
                    tracing::debug!(
                        line_number = line.line_number,
                        line = %line.text,
                        "Malformed INI line"
                    );
                    return Err(IniError::Parse {
                        line: line.text.clone(),
                        line_number: line.line_number,
                    });
                }
            }
        }

        tracing::debug!(
            logical_lines = lines.len(),
            sections = self.sections().count(),
            "Parsed INI text"
        );
        Ok(())
    }
}

impl FromStr for Ini {
    type Err = IniError;

    fn from_str(s: &str) -> IniResult<Self> {
        parse(s)
    }
}
