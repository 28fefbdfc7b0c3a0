//! Turn a [`RawStatementLine`] into a display-ready [`Statement`].
//!
//! The purpose lines are assembled and normalized; IBAN/BIC from the
//! structured counterparty account seed the result and are only replaced
//! when the purpose text carries its own.

use anyhow::{Context, Result};
use kontoline_core::{assemble, normalize_onto, NormalizedStatement};
use tracing::warn;

use crate::amount::parse_amount;
use crate::types::{RawStatementLine, Statement};

fn seed(raw: &RawStatementLine) -> NormalizedStatement {
    let Some(other) = raw.other.as_ref() else {
        return NormalizedStatement::default();
    };
    let clean = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    NormalizedStatement::with_counterparty(clean(&other.iban), clean(&other.bic))
}

/// Normalize one statement line.
///
/// `default_currency` is used when `value` carries no currency code. A
/// malformed `value` is an error; a malformed `saldo` is dropped with a
/// warning.
pub fn prettify(raw: &RawStatementLine, default_currency: &str) -> Result<Statement> {
    let value = parse_amount(&raw.value).context("value")?;

    let saldo = match raw.saldo.as_deref() {
        Some(s) => match parse_amount(s) {
            Ok(a) => Some(a.value),
            Err(e) => {
                warn!(saldo = s, error = %e, "ignoring unparseable saldo");
                None
            }
        },
        None => None,
    };

    let purpose = normalize_onto(&assemble(&raw.usage), seed(raw));

    Ok(Statement {
        valuta: raw.valuta,
        booking_date: raw.booking_date,
        amount: value.value,
        currency: value.currency.unwrap_or_else(|| default_currency.to_string()),
        saldo,
        gv_code: raw.gv_code.clone(),
        transaction_type: raw.transaction_type.clone(),
        counterparty_name: raw.other.as_ref().and_then(|o| o.display_name()),
        purpose,
    })
}

/// Normalize every line, failing on the first malformed one.
pub fn prettify_all(raws: &[RawStatementLine], default_currency: &str) -> Result<Vec<Statement>> {
    raws.iter()
        .enumerate()
        .map(|(i, raw)| {
            prettify(raw, default_currency).with_context(|| format!("statement #{}", i + 1))
        })
        .collect()
}
