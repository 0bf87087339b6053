//! XML-Import für AIXM-4.5-Snapshots.
//!
//! Der Parser liefert nur Roh-Records als Strings; dekodiert wird im Core.
pub mod parser;

pub use parser::{load_aixm_file, parse_aixm_document};
