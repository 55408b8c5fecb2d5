use std::io;
use thiserror::Error;

/// Problems found while decoding a WIG track. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WigError {
    #[error("line {line}: data line found before any variableStep/fixedStep declaration")]
    DataBeforeDeclaration { line: usize },

    #[error("line {line}: step declaration has no chrom= field")]
    MissingChromosome { line: usize },

    #[error("line {line}: fixedStep declaration has no start= field")]
    MissingStart { line: usize },

    #[error("line {line}: invalid {key}= value in declaration: {value}")]
    InvalidDeclaration {
        line: usize,
        key: String,
        value: String,
    },

    #[error("line {line}: invalid position: {value}")]
    InvalidPosition { line: usize, value: String },
}

/// Error type for tncount-io operations.
#[derive(Error, Debug)]
pub enum TncountIoError {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be opened.
    #[error(transparent)]
    Open(#[from] anyhow::Error),

    /// The WIG track is malformed.
    #[error("Malformed WIG track: {0}")]
    Wig(#[from] WigError),
}

/// Result type alias for tncount-io operations.
pub type Result<T> = std::result::Result<T, TncountIoError>;
