//! Loaders for exported statement lines.

pub mod csv_export;
pub mod json_export;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::types::RawStatementLine;

pub use csv_export::parse_statement_csv;
pub use json_export::parse_statement_json;

/// Load statement lines from a `.json` or `.csv` export.
pub fn load_statements(path: impl AsRef<Path>) -> Result<Vec<RawStatementLine>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let lines = match ext.as_deref() {
        Some("json") => {
            let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            parse_statement_json(&s).with_context(|| format!("parsing {}", path.display()))?
        }
        Some("csv") => {
            let f = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            parse_statement_csv(f).with_context(|| format!("parsing {}", path.display()))?
        }
        _ => bail!(
            "unsupported statement file {} (expected .json or .csv)",
            path.display()
        ),
    };

    debug!(path = %path.display(), count = lines.len(), "loaded statement lines");
    Ok(lines)
}
