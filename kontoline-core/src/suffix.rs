//! Suffix-label convention.
//!
//! Some banks put the narrative first and append `LABEL: value` pairs,
//! wrapped at the fixed line width like everything else:
//!
//! ```text
//! Brot fuer die Welt-Vielen D
//! ank fuer Ihre Spende EREF:
//! 0002958342 MREF: 0000000253
//! 74 CRED: DE18ZZZ00000180162
//! ```
//!
//! Only a contiguous run of pairs at the very end is structured data.

use tracing::trace;

use crate::statement::{Field, NormalizedStatement};
use crate::text::strip_line_terminators;

/// Recognized labels, matched case-sensitively against whole words.
pub const LABELS: [(&str, Field); 5] = [
    ("BIC:", Field::CounterpartyBic),
    ("IBAN:", Field::CounterpartyIban),
    ("CRED:", Field::CreditorId),
    ("MREF:", Field::MandateReference),
    ("EREF:", Field::EndToEndReference),
];

fn label(word: &str) -> Option<Field> {
    LABELS
        .iter()
        .find(|(l, _)| *l == word)
        .map(|&(_, field)| field)
}

fn flatten(text: &str) -> String {
    strip_line_terminators(text).trim().to_string()
}

/// True if the flattened text ends in at least one `LABEL: value` pair.
pub fn has_trailing_label(text: &str) -> bool {
    let flat = flatten(text);
    let words: Vec<&str> = flat.split(' ').collect();
    words.len() >= 2 && label(words[words.len() - 2]).is_some()
}

/// Walk `words` backwards two at a time, recording every `label value` pair
/// into `out` until a word in label position is not a label.
///
/// Returns the index of the first consumed word, or `words.len()` if the
/// text does not end in a pair.
fn scan_pairs(words: &[&str], out: &mut NormalizedStatement) -> usize {
    let mut boundary = words.len();
    while boundary >= 2 {
        let Some(field) = label(words[boundary - 2]) else {
            break;
        };
        let value = words[boundary - 1];
        trace!(?field, value, "suffix label");
        out.set(field, value);
        boundary -= 2;
    }
    boundary
}

/// Extract trailing label pairs and set the narrative to the words before
/// them.
///
/// Words are split on single spaces, so runs of spaces inside the narrative
/// survive the rejoin unchanged.
pub fn extract(text: &str, out: &mut NormalizedStatement) {
    let flat = flatten(text);
    let words: Vec<&str> = flat.split(' ').collect();
    let boundary = scan_pairs(&words, out);
    out.narrative = words[..boundary].join(" ");
}
