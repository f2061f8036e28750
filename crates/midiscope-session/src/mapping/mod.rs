//! User-labeled controller mappings.

mod entry;
mod table;

pub use entry::{mapping_description, MappingEntry};
pub use table::{ImportSummary, MappingTable, Upsert};

use serde::{Deserialize, Serialize};

/// How an import treats the existing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Update entries with matching keys, append the rest.
    #[default]
    Merge,
    /// Clear the table, then add every imported entry.
    Replace,
}
