use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use log::info;

use tncount_io::{read_feature_records, read_wig_hits, write_hit_table};
use tncount_overlaprs::OverlapperType;
use tncount_scoring::{FeatureIndex, count_hits, count_hits_par};

use crate::config::CountConfig;
use crate::consts;

pub fn run_count(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let features = matches
        .get_one::<String>("features")
        .context("A path to a feature table is required.")?;

    let wig = matches
        .get_one::<String>("wig")
        .context("A path to a WIG track is required.")?;

    let config = match matches.get_one::<String>("config") {
        Some(path) => CountConfig::try_from(Path::new(path))?,
        None => CountConfig::default(),
    };

    let mut layout = config.features.clone();
    if matches.get_flag("header") {
        layout.has_header = true;
    }

    let backend = match matches.get_one::<String>("backend").or(config.backend.as_ref()) {
        Some(backend) => backend.parse::<OverlapperType>()?,
        None => OverlapperType::default(),
    };

    let output = matches
        .get_one::<String>("output")
        .or(config.output.as_ref())
        .map(String::as_str)
        .unwrap_or(consts::DEFAULT_OUT);

    let threads = matches
        .get_one::<usize>("threads")
        .copied()
        .or(config.threads)
        .unwrap_or(1);

    let skip_zero = matches.get_flag("skip-zero") || config.skip_zero.unwrap_or(false);

    // phase 1: build the index; an integrity violation stops the run before any output
    let records = read_feature_records(features, &layout)?;
    let index = FeatureIndex::from_records(records, backend)
        .with_context(|| format!("Refusing to count hits over {}", features))?;

    // phase 2: count
    let hits = read_wig_hits(wig, skip_zero)?;

    let table = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build the counting thread pool")?;
        pool.install(|| count_hits_par(&index, &hits))
    } else {
        let progress = ProgressBar::new(hits.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed}] {bar:40.cyan/blue} {pos}/{len} hits ({per_sec})")?
                .tick_strings(&["-", "\\", "|", "/"]),
        );
        let table = count_hits(&index, hits.iter().progress_with(progress.clone()));
        progress.finish_and_clear();
        table
    };

    write_hit_table(&table, output)
        .with_context(|| format!("Failed to write hit table to {}", output))?;

    info!(
        "Wrote {} features ({} hits assigned) to {}",
        table.len(),
        table.total(),
        output
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::count::cli::create_count_cli;

    #[fixture]
    fn path_to_features() -> &'static str {
        "../tncount-scoring/tests/data/features.tab"
    }

    #[fixture]
    fn path_to_inverted_features() -> &'static str {
        "../tncount-scoring/tests/data/features_inverted.tab"
    }

    #[fixture]
    fn path_to_wig() -> &'static str {
        "../tncount-scoring/tests/data/hits.wig"
    }

    fn run(args: &[&str]) -> Result<()> {
        let matches = create_count_cli().try_get_matches_from(args)?;
        run_count(&matches)
    }

    #[rstest]
    #[case("1")]
    #[case("3")]
    fn test_count_writes_table(path_to_features: &str, path_to_wig: &str, #[case] threads: &str) {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("feature_hit_table.csv");

        run(&[
            "count",
            "-f",
            path_to_features,
            "-w",
            path_to_wig,
            "-o",
            out.to_str().unwrap(),
            "-t",
            threads,
        ])
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "Feature,Hits\nS000000001,3\nS000000002,2\nS000000003,1\nS000000004,1\n"
        );
    }

    #[rstest]
    fn test_config_supplies_settings(path_to_features: &str, path_to_wig: &str) {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("from_config.csv");
        let config = dir.path().join("tncount.toml");
        std::fs::write(
            &config,
            format!(
                "output = {:?}\nbackend = \"linear\"\nskip_zero = true\n",
                out.to_str().unwrap()
            ),
        )
        .unwrap();

        run(&[
            "count",
            "-f",
            path_to_features,
            "-w",
            path_to_wig,
            "-c",
            config.to_str().unwrap(),
        ])
        .unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("S000000001,2\n"));
        assert!(written.contains("S000000002,1\n"));
    }

    #[rstest]
    fn test_integrity_failure_writes_nothing(path_to_inverted_features: &str, path_to_wig: &str) {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("never.csv");

        let err = run(&[
            "count",
            "-f",
            path_to_inverted_features,
            "-w",
            path_to_wig,
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap_err();

        assert!(format!("{:#}", err).contains("S000000009"));
        assert!(!out.exists());
    }

    #[rstest]
    fn test_unknown_backend(path_to_features: &str, path_to_wig: &str) {
        let err = run(&["count", "-f", path_to_features, "-w", path_to_wig, "-e", "ailist"])
            .unwrap_err();
        assert!(err.to_string().contains("ailist"));
    }
}
