//! @ai:module:intent Define error types for annotation construction and batch loading
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all schemacheck annotation operations
#[derive(Error, Debug)]
pub enum Error {
    /// The only construction-time failure: a rule must identify itself.
    #[error("annotation rule ID is empty")]
    EmptyRuleId,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read batch file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
