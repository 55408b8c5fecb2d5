pub mod feature;
pub mod hit;
pub mod hit_table;
pub mod interval;

// re-export for cleaner imports
pub use self::feature::{Feature, RawFeatureRecord};
pub use self::hit::Hit;
pub use self::hit_table::HitCountTable;
pub use self::interval::Interval;
