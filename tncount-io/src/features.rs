use std::io::BufRead;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use tncount_core::models::RawFeatureRecord;
use tncount_core::utils::get_dynamic_reader;

use crate::error::Result;

///
/// Which columns of a tab-separated annotation table hold the fields a feature needs.
///
/// Column indices are 0-based. The default matches SGD's `SGD_features.tab`
/// (see <https://downloads.yeastgenome.org/curation/chromosomal_feature/SGD_features.README>):
/// feature identifier in column 0, chromosome in 8, start in 9, stop in 10, no header row.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureTableLayout {
    pub name_col: usize,
    pub chr_col: usize,
    pub start_col: usize,
    pub stop_col: usize,
    pub has_header: bool,
}

impl Default for FeatureTableLayout {
    fn default() -> Self {
        FeatureTableLayout {
            name_col: 0,
            chr_col: 8,
            start_col: 9,
            stop_col: 10,
            has_header: false,
        }
    }
}

///
/// Split one annotation line into a raw record.
///
/// Missing columns come back as absent fields; deciding whether the record is usable is left
/// to validation.
///
pub fn parse_feature_line(line: &str, layout: &FeatureTableLayout) -> RawFeatureRecord {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
    let field = |col: usize| fields.get(col).copied();

    RawFeatureRecord::new(
        field(layout.name_col).unwrap_or_default().trim(),
        field(layout.chr_col),
        field(layout.start_col),
        field(layout.stop_col),
    )
}

///
/// Read every record of a tab-separated annotation table.
///
/// Blank lines and `#` comments are skipped, as is the first line when the layout says the
/// table has a header. Gzipped tables are detected by their `.gz` extension.
///
/// # Arguments
/// - path: path to the annotation table
/// - layout: where the needed columns live
///
pub fn read_feature_records<P: AsRef<Path>>(
    path: P,
    layout: &FeatureTableLayout,
) -> Result<Vec<RawFeatureRecord>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;

    let mut records = Vec::new();
    let mut lines = reader.lines();

    if layout.has_header {
        lines.next().transpose()?;
    }

    for line in lines {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(parse_feature_line(&line, layout));
    }

    info!("Read {} feature records from {:?}", records.len(), path);

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const SGD_LINE: &str = "S000002143\tORF\tVerified\tYAL001C\tTFC3\tFUN24\tchromosome 1\tS000002143\t1\t151006\t147594\tW\t\t2011-02-03\t1996-07-31\tLargest of six subunits";

    #[rstest]
    fn test_parse_sgd_line() {
        let record = parse_feature_line(SGD_LINE, &FeatureTableLayout::default());
        assert_eq!(
            record,
            RawFeatureRecord::new("S000002143", Some("1"), Some("151006"), Some("147594"))
        );
    }

    #[rstest]
    fn test_parse_short_line_leaves_fields_absent() {
        let record = parse_feature_line("S000028594\tARS\tchromosome 1", &FeatureTableLayout::default());
        assert_eq!(record.chr, None);
        assert_eq!(record.start, None);
        assert_eq!(record.stop, None);
    }

    #[rstest]
    fn test_parse_custom_layout() {
        let layout = FeatureTableLayout {
            name_col: 3,
            chr_col: 0,
            start_col: 1,
            stop_col: 2,
            has_header: true,
        };
        let record = parse_feature_line("chrI\t335\t649\tYAL069W\r", &layout);
        assert_eq!(
            record,
            RawFeatureRecord::new("YAL069W", Some("chrI"), Some("335"), Some("649"))
        );
    }

    #[rstest]
    fn test_read_feature_records_skips_header_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.tsv");
        std::fs::write(
            &path,
            "chr\tstart\tstop\tname\n# comment\nchrI\t335\t649\tYAL069W\n\nchrI\t538\t792\tYAL068W-A\n",
        )
        .unwrap();

        let layout = FeatureTableLayout {
            name_col: 3,
            chr_col: 0,
            start_col: 1,
            stop_col: 2,
            has_header: true,
        };
        let records = read_feature_records(&path, &layout).unwrap();

        assert_eq!(
            records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["YAL069W", "YAL068W-A"]
        );
    }

    #[rstest]
    fn test_read_feature_records_missing_file() {
        assert!(read_feature_records("nope/features.tab", &FeatureTableLayout::default()).is_err());
    }
}
