//! Plain-text rendering for terminal output.

use kontoline_core::{Dialect, Field, NormalizedStatement};
use kontoline_ingest::Statement;

const FIELD_LABELS: [(Field, &str); 5] = [
    (Field::EndToEndReference, "EREF"),
    (Field::MandateReference, "MREF"),
    (Field::CreditorId, "CRED"),
    (Field::CounterpartyIban, "IBAN"),
    (Field::CounterpartyBic, "BIC"),
];

fn dialect_name(d: Dialect) -> &'static str {
    match d {
        Dialect::KeywordBlock => "keyword-block",
        Dialect::SuffixLabel => "suffix-label",
        Dialect::PlainNarrative => "plain",
    }
}

/// Multi-line view of one normalized purpose text.
pub fn purpose_block(p: &NormalizedStatement) -> String {
    let mut out = format!("narrative: {}\ndialect:   {}\n", p.narrative, dialect_name(p.dialect));
    for (field, label) in FIELD_LABELS {
        if let Some(v) = p.get(field) {
            out.push_str(&format!("{:<10} {}\n", format!("{}:", label.to_lowercase()), v));
        }
    }
    out
}

/// One-line summary of a statement.
pub fn statement_line(s: &Statement) -> String {
    let mut line = format!(
        "{}  {:>12.2} {}  {}",
        s.booking_date,
        s.amount,
        s.currency,
        s.counterparty_name.as_deref().unwrap_or("-")
    );
    if !s.purpose.narrative.is_empty() {
        line.push_str(" | ");
        line.push_str(&s.purpose.narrative);
    }
    let refs: Vec<String> = FIELD_LABELS[..3]
        .iter()
        .filter_map(|&(field, label)| s.purpose.get(field).map(|v| format!("{label} {v}")))
        .collect();
    if !refs.is_empty() {
        line.push_str(&format!(" [{}]", refs.join(", ")));
    }
    line
}
