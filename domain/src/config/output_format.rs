//! Output format value object

use serde::{Deserialize, Serialize};

/// How generated combos are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One combo per line, optional candidate table (default)
    #[default]
    Text,
    /// A single JSON document
    Json,
}
