/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! INI configuration parsing and serialization for Quarto.
//!
//! This crate reads INI text into an [`Ini`] model and writes the model back
//! out as canonical INI text. It supports:
//!
//! - A default section for entries before the first `[section]` header
//! - Full-line comments starting with `;` or `#`
//! - Continuation lines: an indented line is appended to the previous line
//! - Querying and mutating sections and options
//!
//! It does not interpolate values, coerce types, or read files; callers
//! supply text and consume text.
//!
//! # Pipeline
//!
//! ```text
//! raw text -> preprocess -> logical lines -> parser -> Ini -> writer -> text
//! ```
//!
//! # Example
//!
//! ```rust
//! use quarto_ini::{Ini, parse};
//!
//! let mut ini = parse("
//! ; project settings
//! title = Report
//!
//! [render]
//! format = html
//! toc = true
//! ").unwrap();
//!
//! assert_eq!(ini.get("default", "title"), Some("Report"));
//! assert_eq!(ini.sections().collect::<Vec<_>>(), vec!["render"]);
//!
//! ini.set("render", "toc", "false").unwrap();
//! assert_eq!(
//!     ini.to_string(),
//!     "title = Report\n\n[render]\nformat = html\ntoc = false\n\n"
//! );
//! ```
//!
//! # Absence versus errors
//!
//! Queries (`get`, `options`, `items`) return `None` for a missing section or
//! option, and `has_section` / `has_option` return `false`. Mutations on a
//! section that was never registered fail with [`IniError::NoSection`].
//!
//! # The default section
//!
//! The name `default` (in any case) always refers to the default section.
//! It cannot be registered with [`Ini::add_section`], is never listed by
//! [`Ini::sections`], and [`Ini::remove_section`] only empties it.

pub mod error;
pub mod model;
pub mod parser;
pub mod preprocess;
pub mod writer;

pub use error::{IniError, IniResult};
pub use model::{DEFAULT_SECTION, Ini, OptionMap, is_default_section_name};
pub use parser::{Line, classify, parse, parse_lines};
pub use preprocess::{LogicalLine, preprocess, preprocess_lines};
pub use writer::{to_ini_string, write_ini, write_to};
