use std::fmt::{self, Display};

use crate::errors::{DataIntegrityError, MalformedFeatureRecord};

///
/// An annotated genomic feature (gene, ORF, ...) with an inclusive, 1-based span.
///
/// A `Feature` can only be built through [`Feature::new`], which enforces `start < stop`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Feature {
    name: String,
    chr: String,
    start: u32,
    stop: u32,
}

impl Feature {
    ///
    /// Create a new feature, rejecting empty or inverted spans.
    ///
    /// # Arguments
    /// - name: feature identifier
    /// - chr: chromosome the feature lives on
    /// - start: first base of the feature (1-based, inclusive)
    /// - stop: last base of the feature (1-based, inclusive)
    ///
    pub fn new(
        name: impl Into<String>,
        chr: impl Into<String>,
        start: u32,
        stop: u32,
    ) -> Result<Self, DataIntegrityError> {
        let name = name.into();
        let chr = chr.into();

        if start >= stop {
            return Err(DataIntegrityError {
                name,
                chr,
                start,
                stop,
            });
        }

        Ok(Feature {
            name,
            chr,
            start,
            stop,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chr(&self) -> &str {
        &self.chr
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn stop(&self) -> u32 {
        self.stop
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.name, self.chr, self.start, self.stop)
    }
}

///
/// A feature row as it comes out of an annotation table, before any validation.
///
/// Coordinates are kept as text so that ingestion can decide what counts as numeric.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFeatureRecord {
    pub name: String,
    pub chr: Option<String>,
    pub start: Option<String>,
    pub stop: Option<String>,
}

impl RawFeatureRecord {
    pub fn new(
        name: impl Into<String>,
        chr: Option<&str>,
        start: Option<&str>,
        stop: Option<&str>,
    ) -> Self {
        RawFeatureRecord {
            name: name.into(),
            chr: chr.map(str::to_owned),
            start: start.map(str::to_owned),
            stop: stop.map(str::to_owned),
        }
    }

    ///
    /// Check that the chromosome and both coordinates are present and numeric.
    ///
    /// Returns `(name, chr, start, stop)` on success. The `start < stop` invariant is not
    /// checked here; that is [`Feature::new`]'s job and its failure is fatal, unlike this one.
    ///
    pub fn validate(self) -> Result<(String, String, u32, u32), MalformedFeatureRecord> {
        let RawFeatureRecord {
            name,
            chr,
            start,
            stop,
        } = self;

        let chr = match present(chr) {
            Some(chr) => chr,
            None => return Err(MalformedFeatureRecord::MissingChromosome(name)),
        };
        let start = match present(start) {
            Some(start) => start,
            None => return Err(MalformedFeatureRecord::MissingStart(name)),
        };
        let stop = match present(stop) {
            Some(stop) => stop,
            None => return Err(MalformedFeatureRecord::MissingStop(name)),
        };

        let Some(start_pos) = parse_coordinate(&start) else {
            return Err(MalformedFeatureRecord::InvalidStart { name, value: start });
        };
        let Some(stop_pos) = parse_coordinate(&stop) else {
            return Err(MalformedFeatureRecord::InvalidStop { name, value: stop });
        };

        Ok((name, chr, start_pos, stop_pos))
    }
}

/// Blank fields count as absent. The value itself is kept verbatim.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

///
/// Parse a 1-based coordinate.
///
/// Accepts plain integers and integral decimals (`"1234.0"`), which is how annotation
/// tables exported through a dataframe store integer columns that contain gaps.
/// Zero, negatives, fractions and values past `u32::MAX` are rejected.
///
pub fn parse_coordinate(value: &str) -> Option<u32> {
    let value = value.trim();
    let digits = match value.split_once('.') {
        Some((whole, zeros)) if !zeros.is_empty() && zeros.bytes().all(|b| b == b'0') => whole,
        Some(_) => return None,
        None => value,
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<u32>().ok().filter(|&pos| pos > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_new_rejects_inverted_span() {
        let err = Feature::new("C", "chr1", 100, 99).unwrap_err();
        assert_eq!(
            err,
            DataIntegrityError {
                name: "C".to_string(),
                chr: "chr1".to_string(),
                start: 100,
                stop: 99,
            }
        );
    }

    #[rstest]
    fn test_new_rejects_single_base_span() {
        assert!(Feature::new("D", "chr1", 50, 50).is_err());
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case(" 42 ", Some(42))]
    #[case("42.0", Some(42))]
    #[case("42.5", None)]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("abc", None)]
    #[case("nan", None)]
    #[case("1e3", None)]
    #[case("1E2", None)]
    #[case("+5", None)]
    #[case("42.", None)]
    #[case(".0", None)]
    #[case("42.000", Some(42))]
    #[case("4294967296", None)]
    fn test_parse_coordinate(#[case] value: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_coordinate(value), expected);
    }

    #[rstest]
    fn test_validate_ok() {
        let record = RawFeatureRecord::new("A", Some("chr1"), Some("10"), Some("20.0"));
        assert_eq!(
            record.validate().unwrap(),
            ("A".to_string(), "chr1".to_string(), 10, 20)
        );
    }

    #[rstest]
    fn test_validate_keeps_chromosome_verbatim() {
        let record = RawFeatureRecord::new("A", Some(" chrI "), Some("10"), Some("20"));
        let (_, chr, _, _) = record.validate().unwrap();
        assert_eq!(chr, " chrI ");
    }

    #[rstest]
    #[case(RawFeatureRecord::new("A", None, Some("1"), Some("2")), MalformedFeatureRecord::MissingChromosome("A".into()))]
    #[case(RawFeatureRecord::new("A", Some("  "), Some("1"), Some("2")), MalformedFeatureRecord::MissingChromosome("A".into()))]
    #[case(RawFeatureRecord::new("A", Some("chr1"), None, Some("2")), MalformedFeatureRecord::MissingStart("A".into()))]
    #[case(RawFeatureRecord::new("A", Some("chr1"), Some("1"), Some("")), MalformedFeatureRecord::MissingStop("A".into()))]
    #[case(
        RawFeatureRecord::new("A", Some("chr1"), Some("x"), Some("2")),
        MalformedFeatureRecord::InvalidStart { name: "A".into(), value: "x".into() }
    )]
    #[case(
        RawFeatureRecord::new("A", Some("chr1"), Some("1"), Some("2.5")),
        MalformedFeatureRecord::InvalidStop { name: "A".into(), value: "2.5".into() }
    )]
    fn test_validate_rejects(#[case] record: RawFeatureRecord, #[case] expected: MalformedFeatureRecord) {
        assert_eq!(record.validate().unwrap_err(), expected);
    }
}
