//! Hit counting over annotated features.
//!
//! Build a [`FeatureIndex`] once, then hand it a stream of hits:
//!
//! ```rust
//! use tncount_core::models::{Hit, RawFeatureRecord};
//! use tncount_overlaprs::OverlapperType;
//! use tncount_scoring::{FeatureIndex, count_hits};
//!
//! let records = vec![
//!     RawFeatureRecord::new("A", Some("chr1"), Some("10"), Some("20")),
//!     RawFeatureRecord::new("B", Some("chr1"), Some("15"), Some("25")),
//! ];
//! let index = FeatureIndex::from_records(records, OverlapperType::Bits).unwrap();
//!
//! let hits = vec![Hit::new("chr1", 12), Hit::new("chr1", 18), Hit::new("chr2", 5)];
//! let table = count_hits(&index, &hits);
//!
//! assert_eq!(table.get("A"), Some(2));
//! assert_eq!(table.get("B"), Some(1));
//! ```
pub mod feature_index;
pub mod hit_scoring;

// re-exports
pub use feature_index::*;
pub use hit_scoring::*;
