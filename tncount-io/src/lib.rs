//! # Input/Output for tncount.
//!
//! Readers for the two inputs of a counting run (tab-separated feature annotation tables and
//! WIG insertion tracks) and a writer for the resulting per-feature hit table.
//!
pub mod error;
pub mod features;
pub mod table;
pub mod wig;

// re-expose core functions
pub use error::*;
pub use features::*;
pub use table::*;
pub use wig::*;
