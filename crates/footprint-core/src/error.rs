use crate::input::Category;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FootprintError {
    #[error("failed to load factor table from {path}: {reason}")]
    FactorsLoad { path: PathBuf, reason: String },

    #[error("invalid factor table: {0}")]
    FactorsInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure inside a single category calculator.
///
/// Never crosses `compute_footprint`: the aggregation engine converts it
/// into the category's error entry and keeps the other categories intact.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("invalid {category} data: {reason}")]
    Malformed { category: Category, reason: String },

    #[error("factor table has no '{sub_key}' entry for {category}")]
    MissingFactor { category: Category, sub_key: String },
}

impl CategoryError {
    pub fn malformed(category: Category, err: serde_json::Error) -> Self {
        CategoryError::Malformed {
            category,
            reason: err.to_string(),
        }
    }
}
