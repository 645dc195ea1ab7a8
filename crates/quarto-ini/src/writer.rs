/*
 * writer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Canonical INI output.
//!
//! The default section comes first, without a header, followed by each
//! named section under a `[name]` header in registration order. Every
//! option is written as `option = value` and every block ends with a blank
//! line. The default block is always written, so a model without defaults
//! starts with a blank line.
//!
//! Names and values are written verbatim. A value that starts with `[` or
//! spans a comment marker at a line boundary will not reparse to the same
//! model. The same holds for section names that [`Ini::add_section`]
//! accepts but the header grammar does not: an empty name writes `[]`,
//! which is malformed, and surrounding whitespace is trimmed on reparse.

use crate::model::Ini;
use std::fmt;
use std::io;

/// Write `ini` as canonical INI text to a formatter-style sink.
pub fn write_ini<W: fmt::Write>(ini: &Ini, out: &mut W) -> fmt::Result {
    write_options(ini.defaults().iter(), out)?;
    for name in ini.sections() {
        writeln!(out, "[{}]", name)?;
        if let Some(items) = ini.items(name) {
            write_options(items, out)?;
        }
    }
    Ok(())
}

fn write_options<K, V, W>(options: impl Iterator<Item = (K, V)>, out: &mut W) -> fmt::Result
where
    K: fmt::Display,
    V: fmt::Display,
    W: fmt::Write,
{
    for (option, value) in options {
        writeln!(out, "{} = {}", option, value)?;
    }
    out.write_char('\n')
}

/// Render `ini` as canonical INI text.
pub fn to_ini_string(ini: &Ini) -> String {
    ini.to_string()
}

/// Write `ini` as canonical INI text to an I/O sink such as a file or socket.
pub fn write_to<W: io::Write>(ini: &Ini, mut out: W) -> io::Result<()> {
    out.write_all(to_ini_string(ini).as_bytes())?;
    out.flush()
}

impl fmt::Display for Ini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ini(self, f)
    }
}
