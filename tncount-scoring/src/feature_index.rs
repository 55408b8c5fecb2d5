use fxhash::FxHashMap as HashMap;
use log::{debug, info};

use tncount_core::errors::DataIntegrityError;
use tncount_core::models::{Feature, RawFeatureRecord};
use tncount_overlaprs::{Bits, Interval, LinearScan, Overlapper, OverlapperType};

type ChromIndex = Box<dyn Overlapper<u64, usize>>;

///
/// Owns every valid feature and answers "which features contain position P on chromosome C?".
///
/// Features are grouped per chromosome into an [`Overlapper`]; the interval payload is the
/// feature's position in supply order. The index is read-only once built and can be shared
/// across threads.
///
pub struct FeatureIndex {
    features: Vec<Feature>,
    index_maps: HashMap<String, ChromIndex>,
    overlapper_type: OverlapperType,
    dropped: usize,
}

impl FeatureIndex {
    ///
    /// Build an index over features that have already been validated.
    ///
    /// # Arguments
    /// - features: the features, in the order they should be reported
    /// - overlapper_type: which structure backs each chromosome
    ///
    pub fn new(features: Vec<Feature>, overlapper_type: OverlapperType) -> Self {
        let mut intervals_by_chr: HashMap<String, Vec<Interval<u64, usize>>> = HashMap::default();

        for (id, feature) in features.iter().enumerate() {
            // a u32 stop widened to u64 always leaves room for the half-open end
            let Some(interval) =
                Interval::from_closed(u64::from(feature.start()), u64::from(feature.stop()), id)
            else {
                continue;
            };
            intervals_by_chr
                .entry(feature.chr().to_string())
                .or_default()
                .push(interval);
        }

        let mut index_maps: HashMap<String, ChromIndex> = HashMap::default();
        index_maps.reserve(intervals_by_chr.len());

        for (chr, chr_intervals) in intervals_by_chr {
            let overlapper: ChromIndex = match overlapper_type {
                OverlapperType::Bits => Box::new(Bits::build(chr_intervals)),
                OverlapperType::Linear => Box::new(LinearScan::build(chr_intervals)),
            };
            index_maps.insert(chr, overlapper);
        }

        FeatureIndex {
            features,
            index_maps,
            overlapper_type,
            dropped: 0,
        }
    }

    ///
    /// Build an index from raw annotation records.
    ///
    /// Records missing a chromosome or coordinate, or with non-numeric coordinates, are
    /// dropped. A retained record with `start >= stop` aborts construction.
    ///
    /// # Arguments
    /// - records: raw feature rows, in supply order
    /// - overlapper_type: which structure backs each chromosome
    ///
    pub fn from_records<R>(records: R, overlapper_type: OverlapperType) -> Result<Self, DataIntegrityError>
    where
        R: IntoIterator<Item = RawFeatureRecord>,
    {
        let mut features = Vec::new();
        let mut dropped = 0;

        for record in records {
            match record.validate() {
                Ok((name, chr, start, stop)) => {
                    features.push(Feature::new(name, chr, start, stop)?);
                }
                Err(reason) => {
                    debug!("Dropping feature record: {}", reason);
                    dropped += 1;
                }
            }
        }

        let mut index = FeatureIndex::new(features, overlapper_type);
        index.dropped = dropped;

        info!(
            "Indexed {} features on {} chromosomes ({} malformed records dropped, backend: {})",
            index.len(),
            index.index_maps.len(),
            dropped,
            overlapper_type
        );

        Ok(index)
    }

    ///
    /// Every feature on `chr` whose span includes `position`, both ends inclusive.
    ///
    /// Chromosome names are compared exactly. Results come back in supply order whatever the
    /// backend, and an unknown chromosome simply yields nothing.
    ///
    pub fn find_containing(&self, chr: &str, position: u32) -> Vec<&Feature> {
        let Some(overlapper) = self.index_maps.get(chr) else {
            return Vec::new();
        };

        let pos = u64::from(position);
        let mut ids: Vec<usize> = overlapper
            .find_iter(pos, pos + 1)
            .map(|iv| iv.val)
            .collect();
        ids.sort_unstable();

        ids.into_iter().map(|id| &self.features[id]).collect()
    }

    /// All retained features, in supply order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of malformed records skipped by [`FeatureIndex::from_records`].
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn overlapper_type(&self) -> OverlapperType {
        self.overlapper_type
    }

    /// Chromosomes that carry at least one feature, in no particular order.
    pub fn chromosomes(&self) -> impl Iterator<Item = &str> + '_ {
        self.index_maps.keys().map(String::as_str)
    }
}
