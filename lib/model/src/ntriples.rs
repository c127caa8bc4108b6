//! Writers for the [N-Triples](https://www.w3.org/TR/n-triples/) lexical forms of terms.
//!
//! The N-Triples form is the canonical string projection of a term. It is used for debugging and
//! by serializers, but it is not the definition of equality.

use std::fmt::{self, Write};

/// Writes `<iri>`, escaping the characters that may not appear in an `IRIREF`.
pub(crate) fn write_iri(f: &mut impl Write, iri: &str) -> fmt::Result {
    f.write_char('<')?;
    for c in iri.chars() {
        match c {
            '\u{0}'..='\u{20}' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                write_uchar(f, c)?;
            }
            _ => f.write_char(c)?,
        }
    }
    f.write_char('>')
}

/// Writes `"value"` with the `STRING_LITERAL_QUOTE` escapes.
pub(crate) fn write_quoted_string(f: &mut impl Write, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\u{0}'..='\u{1F}' | '\u{7F}' => write_uchar(f, c)?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Writes `_:label`.
///
/// The label is restricted to `[A-Za-z0-9.-]`. Any other character, `-` and a trailing `.` are
/// written as their hexadecimal code point between two `-`. A label that does not start with an
/// alphanumeric character, or that starts with `x`, gets an `x` prefix. Distinct identifiers
/// always get distinct labels.
pub(crate) fn write_blank_node(f: &mut impl Write, id: &str) -> fmt::Result {
    f.write_str("_:")?;
    if !id.starts_with(|c: char| c.is_ascii_alphanumeric() && c != 'x') {
        f.write_char('x')?;
    }
    let last = id.char_indices().last().map(|(i, _)| i);
    for (i, c) in id.char_indices() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' => f.write_char(c)?,
            '.' if Some(i) != last => f.write_char(c)?,
            _ => write!(f, "-{:x}-", u32::from(c))?,
        }
    }
    Ok(())
}

/// Writes a language tag in its lowercase canonical form.
pub(crate) fn write_language_tag(f: &mut impl Write, language: &str) -> fmt::Result {
    f.write_char('@')?;
    for c in language.chars() {
        f.write_char(c.to_ascii_lowercase())?;
    }
    Ok(())
}

fn write_uchar(f: &mut impl Write, c: char) -> fmt::Result {
    let code = u32::from(c);
    if code <= 0xFFFF {
        write!(f, "\\u{code:04X}")
    } else {
        write!(f, "\\U{code:08X}")
    }
}
