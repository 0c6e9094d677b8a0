//! Batch query processing
//!
//! Reads `Q` followed by `Q` pairs of `(code, string)` and dispatches them to
//! a prefix tree: `1` inserts, `2` searches, `3` checks a prefix.

mod driver;
mod op;
mod reader;

pub use driver::{DriverConfig, OutputFormat, QueryDriver, RunSummary};
pub use op::{Operation, Query};
pub use reader::QueryReader;
