use std::borrow::Borrow;

use log::info;
use rayon::prelude::*;

use tncount_core::models::{Feature, Hit, HitCountTable};

use crate::feature_index::FeatureIndex;

/// A table with one zeroed row per feature of `index`, in supply order.
pub fn zeroed_table(index: &FeatureIndex) -> HitCountTable {
    HitCountTable::zeroed(index.features().iter().map(Feature::name))
}

#[inline]
fn tally(table: &mut HitCountTable, index: &FeatureIndex, hit: &Hit) -> usize {
    let features = index.find_containing(&hit.chr, hit.position);
    for feature in &features {
        table.increment(feature.name());
    }
    features.len()
}

///
/// Count how many hits land in each feature of `index`.
///
/// Every feature starts at zero. Each hit adds exactly one to every feature containing it,
/// so a hit inside two overlapping features counts for both, and a hit on a chromosome with
/// no features counts for nothing.
///
/// # Arguments
/// - index: the features to count over
/// - hits: observed insertions, consumed one at a time
///
pub fn count_hits<H, I>(index: &FeatureIndex, hits: I) -> HitCountTable
where
    H: Borrow<Hit>,
    I: IntoIterator<Item = H>,
{
    let mut table = zeroed_table(index);

    let mut processed: u64 = 0;
    let mut unmatched: u64 = 0;
    for hit in hits {
        if tally(&mut table, index, hit.borrow()) == 0 {
            unmatched += 1;
        }
        processed += 1;
    }

    info!(
        "Counted {} hits over {} features ({} hits outside every feature)",
        processed,
        table.len(),
        unmatched
    );

    table
}

///
/// Parallel [`count_hits`].
///
/// Hits are split across the rayon pool; each worker fills its own zeroed table and the
/// partial tables are summed. The result is identical to [`count_hits`].
///
pub fn count_hits_par(index: &FeatureIndex, hits: &[Hit]) -> HitCountTable {
    let table = hits
        .par_iter()
        .fold(
            || zeroed_table(index),
            |mut partial, hit| {
                tally(&mut partial, index, hit);
                partial
            },
        )
        .reduce(
            || zeroed_table(index),
            |mut acc, partial| {
                acc.merge(&partial);
                acc
            },
        );

    info!(
        "Counted {} hits over {} features on {} threads",
        hits.len(),
        table.len(),
        rayon::current_num_threads()
    );

    table
}
