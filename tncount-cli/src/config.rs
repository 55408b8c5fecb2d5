use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tncount_io::FeatureTableLayout;

///
/// Settings for a counting run, read from a `.toml` file.
///
/// Every field is optional; command line flags win over values found here.
///
/// ```toml
/// output = "counts/feature_hit_table.csv.gz"
/// backend = "bits"
/// threads = 4
/// skip_zero = false
///
/// [features]
/// name_col = 0
/// chr_col = 8
/// start_col = 9
/// stop_col = 10
/// has_header = false
/// ```
#[derive(Deserialize, Serialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CountConfig {
    pub output: Option<String>,
    pub backend: Option<String>,
    pub threads: Option<usize>,
    pub skip_zero: Option<bool>,
    #[serde(default)]
    pub features: FeatureTableLayout,
}

impl CountConfig {
    ///
    /// Load a config file.
    ///
    /// # Arguments
    /// - path: Path to the config file (a .toml) file.
    pub fn try_from(path: &Path) -> Result<CountConfig> {
        let toml_str = read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: CountConfig = toml::from_str(&toml_str)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
