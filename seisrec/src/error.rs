//! Error types for record construction and redistribution

use crate::validate::Report;
use seisrec_core::CoreError;

/// Why a sample series was rejected by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesDefect {
    /// x and y sequences have different lengths
    LengthMismatch { x: usize, y: usize },
    /// The series has no samples
    EmptySeries,
}

impl std::fmt::Display for SeriesDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesDefect::LengthMismatch { x, y } => {
                write!(f, "x has {x} samples but y has {y}")
            }
            SeriesDefect::EmptySeries => write!(f, "series has no samples"),
        }
    }
}

/// Errors that can occur during record operations
#[derive(Debug, Clone, PartialEq)]
pub enum SeisError {
    /// Sample arrays were not supplied as matched x/y pairs
    MismatchedInput,
    /// A supplied x/y pair is not a usable sample series
    InvalidSeries { pair: usize, reason: SeriesDefect },
    /// Column ownership or per-record argument lengths disagree with the
    /// record collection
    OwnershipMismatch(String),
    /// Matrix dimensions disagree with the supplied data length
    MatrixShape { rows: usize, cols: usize, len: usize },
    /// Structural validation found a defect
    Validation(Report),
    /// Core format error
    Core(CoreError),
}

impl std::fmt::Display for SeisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeisError::MismatchedInput => {
                write!(f, "Sample arrays must be supplied as matched x/y pairs")
            }
            SeisError::InvalidSeries { pair, reason } => {
                write!(f, "Invalid sample series in pair {pair}: {reason}")
            }
            SeisError::OwnershipMismatch(msg) => write!(f, "Ownership mismatch: {msg}"),
            SeisError::MatrixShape { rows, cols, len } => {
                write!(f, "{rows}x{cols} matrix cannot hold {len} values")
            }
            SeisError::Validation(report) => match report.defect() {
                Some(defect) => write!(f, "Validation failed: {defect}"),
                None => write!(f, "Validation failed"),
            },
            SeisError::Core(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SeisError {}

impl From<CoreError> for SeisError {
    fn from(err: CoreError) -> Self {
        SeisError::Core(err)
    }
}

/// Result type for record operations
pub type Result<T> = std::result::Result<T, SeisError>;
