//! Rejoin fixed-width usage lines into one working string.
//!
//! The banking format transmits the purpose field as physical lines of at
//! most [`LINE_WIDTH`] characters. A line shorter than that ended on its own,
//! so the word boundary that wrapping would have swallowed gets restored as a
//! single space. Every line is followed by [`LINE_TERMINATOR`], which the
//! normalizer uses to find field boundaries.

use crate::text::LINE_TERMINATOR;

/// Width of one physical usage line.
pub const LINE_WIDTH: usize = 27;

/// Concatenate `fragments` in order, one terminator after each.
///
/// Fragments are appended verbatim (padding included). An empty input gives
/// an empty string.
pub fn assemble<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        out.push_str(fragment);
        if fragment.chars().count() < LINE_WIDTH {
            out.push(' ');
        }
        out.push(LINE_TERMINATOR);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        let none: [&str; 0] = [];
        assert_eq!(assemble(none), "");
    }

    #[test]
    fn test_short_line_gets_space() {
        assert_eq!(assemble(["ank fuer Ihre Spende EREF:"]), "ank fuer Ihre Spende EREF: \n");
    }

    #[test]
    fn test_full_width_line_has_no_space() {
        let full = "Brot fuer die Welt-Vielen D";
        assert_eq!(full.chars().count(), LINE_WIDTH);
        assert_eq!(assemble([full]), "Brot fuer die Welt-Vielen D\n");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        // 27 characters, more than 27 bytes
        let umlauts = "Überweisung für Müller äöüß";
        assert_eq!(umlauts.chars().count(), LINE_WIDTH);
        assert_eq!(assemble([umlauts]), format!("{umlauts}\n"));
    }

    #[test]
    fn test_padding_and_order_preserved() {
        let lines = vec!["EREF+42       ".to_string(), String::new(), "SVWZ+Miete".to_string()];
        assert_eq!(assemble(&lines), "EREF+42        \n \nSVWZ+Miete \n");
    }

    #[test]
    fn test_deterministic() {
        let lines = ["SVWZ+1.840000 Max Musterman", "n Lastschrift Miete"];
        assert_eq!(assemble(lines), assemble(lines));
    }
}
