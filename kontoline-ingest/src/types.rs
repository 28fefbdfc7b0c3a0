use chrono::NaiveDate;
use kontoline_core::NormalizedStatement;
use serde::{Deserialize, Serialize};

/// The other side of a transfer, as carried in the structured record fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyAccount {
    #[serde(default)]
    pub name: Option<String>,
    /// Continuation of `name` when it did not fit one field
    #[serde(default)]
    pub name2: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub bic: Option<String>,
}

impl CounterpartyAccount {
    /// `name` directly followed by `name2`, trimmed; `None` if both are blank.
    pub fn display_name(&self) -> Option<String> {
        let joined = format!(
            "{}{}",
            self.name.as_deref().unwrap_or(""),
            self.name2.as_deref().unwrap_or("")
        );
        let joined = joined.trim();
        (!joined.is_empty()).then(|| joined.to_string())
    }

    pub fn is_empty(&self) -> bool {
        [&self.name, &self.name2, &self.iban, &self.bic]
            .iter()
            .all(|f| f.as_deref().is_none_or(|s| s.trim().is_empty()))
    }
}

/// One statement line as handed over by the banking backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStatementLine {
    pub valuta: NaiveDate,
    pub booking_date: NaiveDate,
    /// Amount with optional currency, e.g. `"-12.34 EUR"`
    pub value: String,
    /// Balance after this line
    #[serde(default)]
    pub saldo: Option<String>,
    /// Business transaction code
    #[serde(default)]
    pub gv_code: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    /// Fixed-width purpose lines, in order
    #[serde(default)]
    pub usage: Vec<String>,
    #[serde(default)]
    pub other: Option<CounterpartyAccount>,
}

/// Display-ready statement line with the purpose text normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub valuta: NaiveDate,
    pub booking_date: NaiveDate,
    /// Negative means money left the account
    pub amount: f64,
    pub currency: String,
    pub saldo: Option<f64>,
    pub gv_code: Option<String>,
    pub transaction_type: Option<String>,
    pub counterparty_name: Option<String>,
    #[serde(flatten)]
    pub purpose: NormalizedStatement,
}

impl Statement {
    pub fn is_debit(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_credit(&self) -> bool {
        self.amount > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_concatenates_continuation() {
        let acct = CounterpartyAccount {
            name: Some("Brot fuer die Welt - Evange".into()),
            name2: Some("lisches Werk".into()),
            ..Default::default()
        };
        assert_eq!(
            acct.display_name().as_deref(),
            Some("Brot fuer die Welt - Evangelisches Werk")
        );
    }

    #[test]
    fn test_blank_account() {
        let acct = CounterpartyAccount {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(acct.display_name(), None);
        assert!(acct.is_empty());
        assert!(CounterpartyAccount::default().is_empty());
    }

    #[test]
    fn test_raw_line_optional_fields_default() {
        let raw: RawStatementLine = serde_json::from_str(
            r#"{"valuta":"2015-01-02","booking_date":"2015-01-02","value":"-5.00 EUR"}"#,
        )
        .unwrap();
        assert!(raw.usage.is_empty());
        assert_eq!(raw.other, None);
        assert_eq!(raw.saldo, None);
    }
}
