pub mod catalog;
pub mod classify;
pub mod cli;
pub mod pipeline;
pub mod table;

pub use crate::catalog::{FamilyCatalog, TargetCatalog};
pub use crate::classify::{ClassificationRecord, Resolver, Status};
pub use crate::pipeline::{BatchMapper, DedupPipeline};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GtopError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required columns: {0}")]
    MissingColumns(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl GtopError {
    /// Build a `MissingColumns` error naming every absent column at once.
    pub fn missing_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = names
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        GtopError::MissingColumns(joined)
    }
}

pub type Result<T> = std::result::Result<T, GtopError>;
