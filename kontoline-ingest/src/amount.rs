//! Amounts as the banking backend renders them: `"-12.34 EUR"`,
//! `"1.234,56 EUR"`, `"+5,00"`.

use anyhow::{bail, Context, Result};
use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    pub value: f64,
    pub currency: Option<String>,
}

/// Normalize a decimal that may use either `.` or `,` as separator.
///
/// With both present the later one is the decimal point; a lone `,` is a
/// decimal comma.
fn parse_decimal(num: &str) -> Option<f64> {
    let cleaned = match (num.rfind(','), num.rfind('.')) {
        (Some(c), Some(d)) if c > d => num.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => num.replace(',', ""),
        (Some(_), None) => num.replace(',', "."),
        _ => num.to_string(),
    };
    cleaned.parse().ok()
}

pub fn parse_amount(s: &str) -> Result<Amount> {
    let re = Regex::new(r"^\s*(?P<sign>[+-])?\s*(?P<num>\d[\d.,]*)\s*(?P<cur>[A-Z]{3})?\s*$")?;
    let Some(caps) = re.captures(s) else {
        bail!("not an amount: {s:?}");
    };

    let mut value = parse_decimal(&caps["num"]).with_context(|| format!("bad number in {s:?}"))?;
    if caps.name("sign").is_some_and(|m| m.as_str() == "-") {
        value = -value;
    }

    Ok(Amount {
        value,
        currency: caps.name("cur").map(|m| m.as_str().to_string()),
    })
}
