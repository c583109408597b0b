//! SEISREC - Seismic Time-Series Record Model
//!
//! This library provides the in-memory record model for a classic
//! seismological exchange format: header construction from sample arrays,
//! structural validation of record collections, and redistribution of
//! matrix-shaped sample data back into records.
//!
//! ## Architecture
//!
//! SEISREC follows a specification/implementation separation:
//!
//! - **seisrec-core**: Pure header layout tables, sentinels, and storage
//!   classes (no I/O, no_std)
//! - **seisrec**: The record model, builder, validator, and matrix
//!   redistribution
//!
//! ## Quick Start
//!
//! ```rust
//! use seisrec::{build_records, validate, RequiredField};
//!
//! fn example() -> Result<(), seisrec::SeisError> {
//!     let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.5).collect();
//!     let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
//!
//!     let mut records = build_records(&[x, y])?;
//!     records[0].name = "example.sac".into();
//!
//!     validate(&records, &[RequiredField::Dep]).into_result()?;
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! File reading/writing, plotting, and scientific analysis are external
//! collaborators; they consume validated records and never participate in
//! the layout or validation logic.

// Re-export core format definitions
pub use seisrec_core::{
    blank, head_bytes, is_undefined_numeric, read_numeric, read_string, valid_versions,
    version_is_valid, write_numeric, write_string, ByteOrder, CoreError, DataVector, FieldClass,
    FieldGroup, FieldSpec, Filetype, HeaderLayout, SampleElement, StorageClass, PREFERRED_VERSION,
    UNDEF_NUMERIC, UNDEF_STRING,
};

pub mod builder;
pub mod error;
pub mod matrix;
pub mod record;
pub mod scatter;
pub mod validate;

pub use builder::{build_pair, build_records, EVEN_TOLERANCE};
pub use error::{SeisError, SeriesDefect};
pub use matrix::DenseMatrix;
pub use record::Record;
pub use scatter::scatter;
pub use validate::{
    checking_enabled, validate, validate_value, Advisory, CheckGuard, Defect, Report,
    RequiredField,
};
