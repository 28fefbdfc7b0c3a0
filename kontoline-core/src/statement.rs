//! Output record of the normalizer.

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;

/// Purpose text of one statement line, split into narrative and SEPA fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedStatement {
    /// Human-readable remainder; never contains line terminators
    pub narrative: String,
    pub end_to_end_reference: Option<String>,
    pub mandate_reference: Option<String>,
    pub creditor_id: Option<String>,
    /// May be seeded from the structured counterparty account
    pub counterparty_iban: Option<String>,
    pub counterparty_bic: Option<String>,
    /// Convention the purpose text was encoded in
    #[serde(default)]
    pub dialect: Dialect,
}

/// A structured field either convention can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "eref")]
    EndToEndReference,
    #[serde(rename = "mref")]
    MandateReference,
    #[serde(rename = "cred")]
    CreditorId,
    #[serde(rename = "iban")]
    CounterpartyIban,
    #[serde(rename = "bic")]
    CounterpartyBic,
}

impl NormalizedStatement {
    /// Start from a counterparty IBAN/BIC already known from structured data.
    ///
    /// Extraction only replaces these when it recovers its own value.
    pub fn with_counterparty(iban: Option<String>, bic: Option<String>) -> Self {
        Self {
            counterparty_iban: iban,
            counterparty_bic: bic,
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::EndToEndReference => self.end_to_end_reference.as_deref(),
            Field::MandateReference => self.mandate_reference.as_deref(),
            Field::CreditorId => self.creditor_id.as_deref(),
            Field::CounterpartyIban => self.counterparty_iban.as_deref(),
            Field::CounterpartyBic => self.counterparty_bic.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::EndToEndReference => &mut self.end_to_end_reference,
            Field::MandateReference => &mut self.mandate_reference,
            Field::CreditorId => &mut self.creditor_id,
            Field::CounterpartyIban => &mut self.counterparty_iban,
            Field::CounterpartyBic => &mut self.counterparty_bic,
        };
        *slot = Some(value.into());
    }

    /// True if any SEPA reference (EREF, MREF or CRED) was recovered.
    pub fn has_sepa_references(&self) -> bool {
        self.end_to_end_reference.is_some()
            || self.mandate_reference.is_some()
            || self.creditor_id.is_some()
    }
}
