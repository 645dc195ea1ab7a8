/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for INI parsing and model mutation.

use thiserror::Error;

/// Errors that can occur while parsing INI text or mutating an [`Ini`](crate::Ini).
///
/// Lookups of missing sections or options are not errors; query operations
/// report absence with `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IniError {
    /// A logical line is neither a section header nor a `key = value` entry.
    #[error("Parse error on line {line_number}: {line:?}")]
    Parse {
        /// The offending logical line, as it appeared after preprocessing.
        line: String,
        /// 1-based physical line on which the logical line starts.
        line_number: usize,
    },

    /// The name is reserved for the default section.
    #[error("Invalid section name: {name:?} is reserved for the default section")]
    InvalidName { name: String },

    /// A section with this name is already registered.
    #[error("Section {name:?} already exists")]
    DuplicateSection { name: String },

    /// No section with this name has been registered.
    #[error("No section: {name:?}")]
    NoSection { name: String },
}

/// Result type for INI operations.
pub type IniResult<T> = Result<T, IniError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_includes_line() {
        let err = IniError::Parse {
            line: "not an entry".to_string(),
            line_number: 3,
        };
        assert_eq!(err.to_string(), "Parse error on line 3: \"not an entry\"");
    }

    #[test]
    fn test_section_error_messages() {
        let err = IniError::DuplicateSection {
            name: "server".to_string(),
        };
        assert_eq!(err.to_string(), "Section \"server\" already exists");

        let err = IniError::NoSection {
            name: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "No section: \"nope\"");
    }
}
