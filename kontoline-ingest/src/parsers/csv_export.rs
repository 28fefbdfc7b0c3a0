//! CSV export, one statement line per row.
//!
//! Header:
//!   valuta,booking_date,value,saldo,gv_code,transaction_type,
//!   other_name,other_name2,other_iban,other_bic,usage
//!
//! `usage` holds the purpose lines separated by newlines inside a quoted
//! field, padding included. Dates are `YYYY-MM-DD` or `DD.MM.YYYY`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

use crate::types::{CounterpartyAccount, RawStatementLine};

#[derive(Debug, Deserialize)]
struct Row {
    valuta: String,
    booking_date: String,
    value: String,
    #[serde(default)]
    saldo: Option<String>,
    #[serde(default)]
    gv_code: Option<String>,
    #[serde(default)]
    transaction_type: Option<String>,
    #[serde(default)]
    other_name: Option<String>,
    #[serde(default)]
    other_name2: Option<String>,
    #[serde(default)]
    other_iban: Option<String>,
    #[serde(default)]
    other_bic: Option<String>,
    #[serde(default)]
    usage: String,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .with_context(|| format!("bad date {s:?}"))
}

/// Split the `usage` cell back into its physical lines.
fn split_usage(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect()
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

impl Row {
    fn into_line(self) -> Result<RawStatementLine> {
        let other = CounterpartyAccount {
            name: non_blank(self.other_name),
            name2: non_blank(self.other_name2),
            iban: non_blank(self.other_iban).map(|s| s.trim().to_string()),
            bic: non_blank(self.other_bic).map(|s| s.trim().to_string()),
        };

        Ok(RawStatementLine {
            valuta: parse_date(&self.valuta).context("valuta")?,
            booking_date: parse_date(&self.booking_date).context("booking_date")?,
            value: self.value,
            saldo: non_blank(self.saldo),
            gv_code: non_blank(self.gv_code),
            transaction_type: non_blank(self.transaction_type),
            usage: split_usage(&self.usage),
            other: (!other.is_empty()).then_some(other),
        })
    }
}

pub fn parse_statement_csv<R: Read>(reader: R) -> Result<Vec<RawStatementLine>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut out = Vec::new();
    for (i, result) in rdr.deserialize::<Row>().enumerate() {
        // +2: header row, 1-based
        let row_no = i + 2;
        let row = result.with_context(|| format!("row {row_no}"))?;
        out.push(row.into_line().with_context(|| format!("row {row_no}"))?);
    }

    Ok(out)
}
