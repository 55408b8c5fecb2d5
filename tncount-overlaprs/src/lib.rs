//! Interval containment backends for tncount.
//!
//! Every backend implements [`Overlapper`] over half-open [`Interval`]s, so callers can swap
//! the data structure without touching the code that queries it.
//!
//! ```rust
//! use tncount_overlaprs::{Bits, Overlapper, Interval};
//!
//! let genes = vec![
//!     Interval { start: 10u32, end: 21, val: "A" },
//!     Interval { start: 15, end: 26, val: "B" },
//! ];
//!
//! let bits = Bits::build(genes);
//! let hit: Vec<&str> = bits.find_iter(18, 19).map(|iv| iv.val).collect();
//! assert_eq!(hit.len(), 2);
//! ```
use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Binary Interval Search implementation.
///
/// See [`Bits`] for details.
pub mod bits;

/// Naive full-scan implementation.
pub mod linear;

/// Core traits for overlap operations.
pub mod traits;

// re-exports
pub use self::bits::Bits;
pub use self::linear::LinearScan;
pub use self::traits::{Interval, Overlapper};

/// Which overlap structure backs a per-chromosome index.
///
/// * `Bits` - sorted intervals with a binary-searched entry point, O(log n + k) per query.
/// * `Linear` - full scan, O(n) per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapperType {
    #[default]
    Bits,
    Linear,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid backend type: {0}. Valid options are 'bits' or 'linear'")]
pub struct UnknownOverlapperType(pub String);

impl FromStr for OverlapperType {
    type Err = UnknownOverlapperType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bits" => Ok(OverlapperType::Bits),
            "linear" => Ok(OverlapperType::Linear),
            _ => Err(UnknownOverlapperType(s.to_string())),
        }
    }
}

impl Display for OverlapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapperType::Bits => write!(f, "bits"),
            OverlapperType::Linear => write!(f, "linear"),
        }
    }
}
