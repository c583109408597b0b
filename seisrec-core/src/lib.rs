#![no_std]

//! SEISREC Core - Seismic Record Header Format Definitions
//!
//! This crate provides the core format definitions for seismic time-series
//! records: per-version header layout tables, undefined-value sentinels,
//! blank-buffer initialization, and storage-class abstractions

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod blank;
pub mod element;
pub mod error;
pub mod layout;

pub use blank::*;
pub use element::*;
pub use error::*;
pub use layout::*;
