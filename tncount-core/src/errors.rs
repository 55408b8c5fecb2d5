use thiserror::Error;

/// Reasons a raw feature record is rejected during ingestion.
///
/// These are recovered locally: the record is dropped and index construction carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedFeatureRecord {
    #[error("Feature {0} has no chromosome")]
    MissingChromosome(String),

    #[error("Feature {0} has no start coordinate")]
    MissingStart(String),

    #[error("Feature {0} has no stop coordinate")]
    MissingStop(String),

    #[error("Feature {name} has a non-numeric start coordinate: {value}")]
    InvalidStart { name: String, value: String },

    #[error("Feature {name} has a non-numeric stop coordinate: {value}")]
    InvalidStop { name: String, value: String },
}

/// A retained feature whose span is empty or inverted (`start >= stop`).
///
/// This is fatal: no index, and therefore no count table, is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Data integrity violation: feature {name} on {chr} has start {start} >= stop {stop}")]
pub struct DataIntegrityError {
    pub name: String,
    pub chr: String,
    pub start: u32,
    pub stop: u32,
}
