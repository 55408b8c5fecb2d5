use rstest::*;

use tncount_io::{FeatureTableLayout, HitTableWrite, read_feature_records, read_wig_hits};
use tncount_overlaprs::OverlapperType;
use tncount_scoring::{FeatureIndex, count_hits, count_hits_par};

#[fixture]
fn path_to_features() -> &'static str {
    "tests/data/features.tab"
}

#[fixture]
fn path_to_inverted_features() -> &'static str {
    "tests/data/features_inverted.tab"
}

#[fixture]
fn path_to_wig() -> &'static str {
    "tests/data/hits.wig"
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn build_index(path: &str, backend: OverlapperType) -> FeatureIndex {
        let records = read_feature_records(path, &FeatureTableLayout::default()).unwrap();
        FeatureIndex::from_records(records, backend).unwrap()
    }

    #[rstest]
    fn test_index_from_sgd_table(path_to_features: &str) {
        let index = build_index(path_to_features, OverlapperType::Bits);
        assert_eq!(index.len(), 4);
        assert_eq!(index.dropped(), 2);
    }

    #[rstest]
    fn test_count_pipeline(
        path_to_features: &str,
        path_to_wig: &str,
        #[values(OverlapperType::Bits, OverlapperType::Linear)] backend: OverlapperType,
    ) {
        let index = build_index(path_to_features, backend);
        let hits = read_wig_hits(path_to_wig, false).unwrap();
        assert_eq!(hits.len(), 8);

        let table = count_hits(&index, &hits);

        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![
                ("S000000001", 3),
                ("S000000002", 2),
                ("S000000003", 1),
                ("S000000004", 1),
            ]
        );
        assert_eq!(count_hits_par(&index, &hits), table);
    }

    #[rstest]
    fn test_count_pipeline_skipping_zero_values(path_to_features: &str, path_to_wig: &str) {
        let index = build_index(path_to_features, OverlapperType::Bits);
        let hits = read_wig_hits(path_to_wig, true).unwrap();

        let table = count_hits(&index, &hits);

        assert_eq!(table.get("S000000001"), Some(2));
        assert_eq!(table.get("S000000002"), Some(1));
        assert_eq!(table.total(), 5);
    }

    #[rstest]
    fn test_inverted_feature_aborts(path_to_inverted_features: &str) {
        let records =
            read_feature_records(path_to_inverted_features, &FeatureTableLayout::default()).unwrap();
        let err = FeatureIndex::from_records(records, OverlapperType::Bits)
            .err()
            .unwrap();

        assert_eq!(err.name, "S000000009");
        assert_eq!(err.chr, "chrI");
        assert_eq!((err.start, err.stop), (500, 400));
    }

    #[rstest]
    fn test_table_written_as_csv(path_to_features: &str, path_to_wig: &str) {
        let index = build_index(path_to_features, OverlapperType::Bits);
        let hits = read_wig_hits(path_to_wig, false).unwrap();
        let table = count_hits(&index, &hits);

        let mut out = Vec::new();
        table.write_table(&mut out, b',').unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Feature,Hits\nS000000001,3\nS000000002,2\nS000000003,1\nS000000004,1\n"
        );
    }
}
