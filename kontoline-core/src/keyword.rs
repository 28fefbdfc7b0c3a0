//! Keyword-block convention.
//!
//! Each SEPA field starts a physical line with a four-letter tag and `+`:
//!
//! ```text
//! EREF+42
//!
//! MREF+C5D043E1A2C847988DF9F3
//! 5F005785EB
//! SVWZ+1.840000 Max Musterman
//! n Lastschrift Miete
//! ```
//!
//! A field value may wrap once, so it spans two physical lines. `SVWZ+` is
//! always last and everything after it is remittance text.

use tracing::trace;

use crate::statement::{Field, NormalizedStatement};
use crate::text::{strip_line_terminators, LINE_TERMINATOR};

/// Tags whose value is a single reference spanning at most two lines.
pub const FIELD_TAGS: [(&str, Field); 3] = [
    ("EREF", Field::EndToEndReference),
    ("MREF", Field::MandateReference),
    ("CRED", Field::CreditorId),
];

/// Tag of the free-text remittance information.
pub const REMITTANCE_TAG: &str = "SVWZ";

const TAG_LEN: usize = 4;
const HEAD_LEN: usize = TAG_LEN + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Head {
    Field(Field),
    Remittance,
}

/// Result of walking the keyword block.
#[derive(Debug, PartialEq, Eq)]
pub enum BlockEnd<'a> {
    /// `SVWZ+` was reached and the narrative is set
    Remittance,
    /// The block stopped at text that is not a recognized field
    Unclosed(&'a str),
}

/// True if `text` starts with a tag followed by `+`, recognized or not.
fn has_head(text: &str) -> bool {
    text.as_bytes().get(TAG_LEN) == Some(&b'+')
}

fn head(text: &str) -> Option<Head> {
    if !has_head(text) {
        return None;
    }
    let tag = &text[..TAG_LEN];
    if tag == REMITTANCE_TAG {
        return Some(Head::Remittance);
    }
    FIELD_TAGS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|&(_, field)| Head::Field(field))
}

/// True if `text` opens with a recognized keyword head.
pub fn starts_block(text: &str) -> bool {
    head(text).is_some()
}

/// Extract all leading keyword fields into `out`.
///
/// Stops at `SVWZ+` (the rest becomes the narrative) or at the first head
/// that is missing or unknown, in which case the unconsumed text is handed
/// back untouched.
pub fn extract<'a>(text: &'a str, out: &mut NormalizedStatement) -> BlockEnd<'a> {
    let mut rest = text;
    while has_head(rest) {
        match head(rest) {
            Some(Head::Remittance) => {
                out.narrative = strip_line_terminators(&rest[HEAD_LEN..]).trim().to_string();
                trace!(narrative = %out.narrative, "remittance text");
                return BlockEnd::Remittance;
            }
            Some(Head::Field(field)) => {
                let (span, remainder) = split_value_span(&rest[HEAD_LEN..]);
                let value = strip_line_terminators(span).trim().to_string();
                trace!(?field, %value, "keyword field");
                out.set(field, value);
                rest = remainder;
            }
            None => break,
        }
    }
    BlockEnd::Unclosed(rest)
}

/// Split a field value off the front of `body` (the text after `XXXX+`).
///
/// The value covers the rest of the current line and the whole next line;
/// the terminator closing the second line is dropped. When the next line
/// already opens another recognized field, the value ends with the current
/// line. Text ending without a terminator belongs entirely to the value.
fn split_value_span(body: &str) -> (&str, &str) {
    let Some(first) = body.find(LINE_TERMINATOR) else {
        return (body, "");
    };
    let next_line = &body[first + 1..];
    if starts_block(next_line) {
        return (&body[..first], next_line);
    }
    match next_line.find(LINE_TERMINATOR) {
        Some(second) => {
            let end = first + 1 + second;
            (&body[..end], &body[end + 1..])
        }
        None => (body, ""),
    }
}
