//! Entry points: assembled purpose text in, [`NormalizedStatement`] out.
//!
//! Normalization never fails. Text that matches neither convention comes
//! back as narrative with no structured fields.

use tracing::debug;

use crate::assembler::assemble;
use crate::dialect::Dialect;
use crate::keyword::{self, BlockEnd};
use crate::statement::NormalizedStatement;
use crate::suffix;
use crate::text::strip_line_terminators;

/// Normalize an assembled purpose text with nothing known up front.
pub fn normalize(text: &str) -> NormalizedStatement {
    normalize_onto(text, NormalizedStatement::default())
}

/// Normalize `text` on top of `base`.
///
/// Fields the detected convention does not recover keep the value they have
/// in `base`; the narrative is always replaced.
pub fn normalize_onto(text: &str, base: NormalizedStatement) -> NormalizedStatement {
    let mut out = base;
    let dialect = Dialect::classify(text);
    debug!(?dialect, len = text.len(), "normalizing purpose text");

    match dialect {
        Dialect::KeywordBlock => {
            if let BlockEnd::Unclosed(rest) = keyword::extract(text, &mut out) {
                // fields without a closing SVWZ+: whatever follows is narrative,
                // possibly with trailing labels
                suffix::extract(rest, &mut out);
            }
        }
        Dialect::SuffixLabel => suffix::extract(text, &mut out),
        Dialect::PlainNarrative => {
            out.narrative = strip_line_terminators(text).trim().to_string();
        }
    }

    out.dialect = dialect;
    out
}

/// Assemble fixed-width `fragments` and normalize the result.
pub fn normalize_fragments<I, S>(fragments: I) -> NormalizedStatement
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    normalize(&assemble(fragments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_block_scenario() {
        let out = normalize(concat!(
            "EREF+0003920452\n",
            "MREF+000000002943\n",
            "CRED+DE18ZZZ00000180162\n",
            "SVWZ+Brot fuer die Welt-Vie\n",
            "len Dank fuerIhre Spende"
        ));
        assert_eq!(out.dialect, Dialect::KeywordBlock);
        assert_eq!(out.narrative, "Brot fuer die Welt-Vielen Dank fuerIhre Spende");
        assert_eq!(out.end_to_end_reference.as_deref(), Some("0003920452"));
        assert_eq!(out.mandate_reference.as_deref(), Some("000000002943"));
        assert_eq!(out.creditor_id.as_deref(), Some("DE18ZZZ00000180162"));
        assert_eq!(out.counterparty_iban, None);
    }

    #[test]
    fn test_keyword_block_wrapped_scenario() {
        let out = normalize(concat!(
            "EREF+42       \n",
            "              \n",
            "MREF+C5D043E1A2C847988DF9F3\n",
            "5F005785EB    \n",
            "CRED+DE05ZZZ00000205131    \n",
            "              \n",
            "SVWZ+1.840000 Max Musterman\n",
            "n Lastschrift Miete\n"
        ));
        assert_eq!(out.narrative, "1.840000 Max Mustermann Lastschrift Miete");
        assert_eq!(out.end_to_end_reference.as_deref(), Some("42"));
        assert_eq!(
            out.mandate_reference.as_deref(),
            Some("C5D043E1A2C847988DF9F35F005785EB")
        );
        assert_eq!(out.creditor_id.as_deref(), Some("DE05ZZZ00000205131"));
    }

    #[test]
    fn test_suffix_label_scenario() {
        let out = normalize(concat!(
            "Brot fuer die Welt-Vielen D\n",
            "ank fuer Ihre Spende EREF: \n",
            "0002958342 MREF: 0000000253\n",
            "74 CRED: DE18ZZZ00000180162\n",
            " IBAN: DE093702050000041084\n",
            "05 BIC: BFSWDE33\n"
        ));
        assert_eq!(out.dialect, Dialect::SuffixLabel);
        assert_eq!(out.narrative, "Brot fuer die Welt-Vielen Dank fuer Ihre Spende");
        assert_eq!(out.end_to_end_reference.as_deref(), Some("0002958342"));
        assert_eq!(out.mandate_reference.as_deref(), Some("000000025374"));
        assert_eq!(out.creditor_id.as_deref(), Some("DE18ZZZ00000180162"));
        assert_eq!(out.counterparty_iban.as_deref(), Some("DE09370205000004108405"));
        assert_eq!(out.counterparty_bic.as_deref(), Some("BFSWDE33"));
    }

    #[test]
    fn test_plain_narrative() {
        let out = normalize(" KARTENZAHLUNG \nREWE Markt GmbH \n");
        assert_eq!(out.dialect, Dialect::PlainNarrative);
        assert_eq!(out.narrative, "KARTENZAHLUNG REWE Markt GmbH");
        assert!(!out.has_sepa_references());
    }

    #[test]
    fn test_seeded_counterparty_survives_keyword_block() {
        let base = NormalizedStatement::with_counterparty(
            Some("DE02120300000000202051".into()),
            Some("BYLADEM1001".into()),
        );
        let out = normalize_onto("EREF+42 \n \nSVWZ+Miete \n", base);
        assert_eq!(out.counterparty_iban.as_deref(), Some("DE02120300000000202051"));
        assert_eq!(out.counterparty_bic.as_deref(), Some("BYLADEM1001"));
        assert_eq!(out.narrative, "Miete");
    }

    #[test]
    fn test_extracted_counterparty_overwrites_seed() {
        let base = NormalizedStatement::with_counterparty(
            Some("DE02120300000000202051".into()),
            Some("BYLADEM1001".into()),
        );
        let out = normalize_onto("Beitrag BIC: GENODEF1S04 \n", base);
        assert_eq!(out.counterparty_bic.as_deref(), Some("GENODEF1S04"));
        assert_eq!(out.counterparty_iban.as_deref(), Some("DE02120300000000202051"));
        assert_eq!(out.narrative, "Beitrag");
    }

    #[test]
    fn test_unclosed_block_falls_back_to_suffix_scan() {
        let out = normalize("EREF+42 \n \nVielen Dank \nBIC: BFSWDE33 \n");
        assert_eq!(out.dialect, Dialect::KeywordBlock);
        assert_eq!(out.end_to_end_reference.as_deref(), Some("42"));
        assert_eq!(out.counterparty_bic.as_deref(), Some("BFSWDE33"));
        assert_eq!(out.narrative, "Vielen Dank");
    }

    #[test]
    fn test_unknown_keyword_is_plain_text() {
        let out = normalize("KREF+NONREF \nMiete \n");
        assert_eq!(out.dialect, Dialect::PlainNarrative);
        assert_eq!(out.narrative, "KREF+NONREF Miete");
    }

    #[test]
    fn test_narrative_never_contains_terminators() {
        let inputs = [
            "",
            "\n\n",
            "SVWZ+a\nb\nc\n",
            "EREF+x\ny\nz\n",
            "foo \nEREF: \n42 \n",
            "MREF+ABC",
        ];
        for text in inputs {
            let out = normalize(text);
            assert!(!out.narrative.contains('\n'), "{text:?}");
            assert_eq!(out.narrative, out.narrative.trim(), "{text:?}");
        }
    }

    #[test]
    fn test_fragments_end_to_end() {
        let out = normalize_fragments([
            "EREF+42",
            "",
            "MREF+C5D043E1A2C847988DF9F3",
            "5F005785EB",
            "CRED+DE05ZZZ00000205131",
            "",
            "SVWZ+1.840000 Max Musterman",
            "n Lastschrift Miete",
        ]);
        assert_eq!(out.narrative, "1.840000 Max Mustermann Lastschrift Miete");
        assert_eq!(out.end_to_end_reference.as_deref(), Some("42"));
        assert_eq!(
            out.mandate_reference.as_deref(),
            Some("C5D043E1A2C847988DF9F35F005785EB")
        );
        assert_eq!(out.creditor_id.as_deref(), Some("DE05ZZZ00000205131"));
    }
}
