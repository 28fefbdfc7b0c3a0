//! Which convention a bank used to embed SEPA fields in the purpose text.

use serde::{Deserialize, Serialize};

use crate::{keyword, suffix};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// `EREF+`/`MREF+`/`CRED+` blocks up front, `SVWZ+` remittance text last
    KeywordBlock,
    /// Narrative first, then trailing `EREF: x MREF: y ... BIC: z` pairs
    SuffixLabel,
    /// No recognized structure; the whole text is narrative
    #[default]
    PlainNarrative,
}

impl Dialect {
    /// Pick the convention for an assembled purpose text.
    ///
    /// A recognized keyword head at the very start wins; otherwise the text
    /// is checked for a trailing label/value pair.
    pub fn classify(text: &str) -> Dialect {
        if keyword::starts_block(text) {
            Dialect::KeywordBlock
        } else if suffix::has_trailing_label(text) {
            Dialect::SuffixLabel
        } else {
            Dialect::PlainNarrative
        }
    }
}
