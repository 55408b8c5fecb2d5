//! Core models for tncount.
//!
//! This crate holds the types every other tncount crate speaks: annotated [`Feature`]s and the
//! unvalidated [`RawFeatureRecord`]s they are built from, observed [`Hit`]s, the half-open
//! [`Interval`] used by the overlap backends, and the [`HitCountTable`] produced by counting.
//!
//! ```rust
//! use tncount_core::models::Feature;
//!
//! let feature = Feature::new("YAL001C", "chrI", 100, 200).unwrap();
//! assert_eq!(feature.to_string(), "YAL001C\tchrI\t100\t200");
//! assert!(Feature::new("YAL002W", "chrI", 300, 250).is_err());
//! ```
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::*;
