//! JSON export: an array of statement-line objects.
//!
//! ```json
//! [{"valuta": "2015-03-02", "booking_date": "2015-03-02", "value": "-5.00 EUR",
//!   "usage": ["EREF+42", "", "SVWZ+Miete"],
//!   "other": {"name": "Max Mustermann", "iban": "DE02120300000000202051"}}]
//! ```

use anyhow::{Context, Result};

use crate::types::RawStatementLine;

pub fn parse_statement_json(text: &str) -> Result<Vec<RawStatementLine>> {
    serde_json::from_str(text).context("statement JSON must be an array of statement lines")
}
