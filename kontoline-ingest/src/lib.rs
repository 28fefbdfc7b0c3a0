//! kontoline-ingest: statement-line records, amount parsing, JSON/CSV
//! loaders, and the step that turns a raw record into a display-ready
//! [`Statement`].

pub mod amount;
pub mod parsers;
pub mod prettify;
pub mod types;

pub use amount::{parse_amount, Amount};
pub use parsers::{load_statements, parse_statement_csv, parse_statement_json};
pub use prettify::{prettify, prettify_all};
pub use types::{CounterpartyAccount, RawStatementLine, Statement};
