use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use tncount_io::{FeatureTableLayout, read_feature_records};
use tncount_overlaprs::OverlapperType;
use tncount_scoring::FeatureIndex;

pub fn run_query(matches: &ArgMatches) -> Result<()> {
    let stdout = io::stdout();
    query_to(matches, stdout.lock())
}

fn query_to<W: Write>(matches: &ArgMatches, writer: W) -> Result<()> {
    let features = matches
        .get_one::<String>("features")
        .context("A path to a feature table is required.")?;
    let chrom = matches
        .get_one::<String>("chrom")
        .context("A chromosome is required.")?;
    let position = *matches
        .get_one::<u32>("position")
        .context("A position is required.")?;

    let backend = match matches.get_one::<String>("backend") {
        Some(backend) => backend.parse::<OverlapperType>()?,
        None => OverlapperType::default(),
    };

    let layout = FeatureTableLayout {
        has_header: matches.get_flag("header"),
        ..FeatureTableLayout::default()
    };

    let records = read_feature_records(features, &layout)?;
    let index = FeatureIndex::from_records(records, backend)?;

    let mut writer = BufWriter::new(writer);
    for feature in index.find_containing(chrom, position) {
        writeln!(writer, "{}", feature)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::query::cli::create_query_cli;

    fn query(args: &[&str]) -> String {
        let matches = create_query_cli().try_get_matches_from(args).unwrap();
        let mut out = Vec::new();
        query_to(&matches, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case("150", "S000000001\tchrI\t100\t200\nS000000002\tchrI\t150\t250\n")]
    #[case("250", "S000000002\tchrI\t150\t250\n")]
    #[case("251", "")]
    fn test_query(#[case] position: &str, #[case] expected: &str) {
        let out = query(&[
            "query",
            "-f",
            "../tncount-scoring/tests/data/features.tab",
            "-c",
            "chrI",
            "-p",
            position,
        ]);
        assert_eq!(out, expected);
    }
}
