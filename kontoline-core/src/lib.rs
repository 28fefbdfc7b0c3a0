//! kontoline-core: recover SEPA fields and a clean narrative from the
//! fixed-width purpose lines of a bank statement.

pub mod assembler;
pub mod dialect;
pub mod keyword;
pub mod normalize;
pub mod statement;
pub mod suffix;
pub mod text;

pub use assembler::{assemble, LINE_WIDTH};
pub use dialect::Dialect;
pub use normalize::{normalize, normalize_fragments, normalize_onto};
pub use statement::{Field, NormalizedStatement};
pub use text::{strip_line_terminators, strip_line_terminators_in_place};
