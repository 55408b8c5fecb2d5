use std::io::{BufRead, Lines};

use log::info;

use tncount_core::models::Hit;
use tncount_core::utils::get_dynamic_reader_w_stdin;

use crate::error::{Result, WigError};

const VARIABLE_STEP: &str = "variableStep";
const FIXED_STEP: &str = "fixedStep";

#[derive(Debug, Clone)]
enum StepBlock {
    Variable { chr: String },
    Fixed { chr: String, next: u64, step: u64 },
}

///
/// Streaming decoder for WIG tracks.
///
/// Yields one [`Hit`] per data line. `variableStep` lines carry their own position;
/// `fixedStep` lines are placed at `start`, `start + step`, ... in order. `track`, `browser`,
/// `#` and blank lines are skipped.
///
/// A `fixedStep` block lists a value for every step, so its zero-valued lines are never hits.
/// In `variableStep` blocks the value column is ignored unless zero-valued lines are asked to
/// be skipped.
///
/// ```rust
/// use std::io::Cursor;
/// use tncount_io::WigReader;
///
/// let wig = "track type=wiggle_0\nvariableStep chrom=chrI\n12 3\n80 1\n";
/// let hits: Vec<_> = WigReader::new(Cursor::new(wig))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(hits.len(), 2);
/// assert_eq!(hits[1].position, 80);
/// ```
pub struct WigReader<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
    block: Option<StepBlock>,
    skip_zero: bool,
}

impl<R: BufRead> WigReader<R> {
    pub fn new(reader: R) -> Self {
        WigReader {
            lines: reader.lines(),
            line_no: 0,
            block: None,
            skip_zero: false,
        }
    }

    /// Also drop `variableStep` lines whose value column is present and equal to zero.
    pub fn skip_zero_values(mut self, skip: bool) -> Self {
        self.skip_zero = skip;
        self
    }

    fn declare(&mut self, line: &str) -> std::result::Result<(), WigError> {
        let line_no = self.line_no;
        let mut fields = line.split_whitespace();
        let kind = fields.next().unwrap_or_default();

        let mut chr = None;
        let mut start = None;
        let mut step = None;
        for field in fields {
            let Some((key, value)) = field.split_once('=') else {
                continue;
            };
            match key {
                "chrom" => chr = Some(value.to_string()),
                "start" => start = Some(parse_declared(line_no, key, value)?),
                "step" => step = Some(parse_declared(line_no, key, value)?),
                _ => {}
            }
        }

        let chr = chr
            .filter(|c| !c.is_empty())
            .ok_or(WigError::MissingChromosome { line: line_no })?;

        self.block = Some(if kind == FIXED_STEP {
            StepBlock::Fixed {
                chr,
                next: start.ok_or(WigError::MissingStart { line: line_no })?,
                step: step.unwrap_or(1),
            }
        } else {
            StepBlock::Variable { chr }
        });

        Ok(())
    }

    fn decode(&mut self, line: &str) -> std::result::Result<Option<Hit>, WigError> {
        let line_no = self.line_no;
        let skip_zero = self.skip_zero;
        let mut fields = line.split_whitespace();

        let (chr, position, value) = match self.block.as_mut() {
            None => return Err(WigError::DataBeforeDeclaration { line: line_no }),
            Some(StepBlock::Variable { chr }) => {
                let raw = fields.next().unwrap_or_default();
                let position = raw
                    .parse::<u32>()
                    .ok()
                    .filter(|&p| p > 0)
                    .ok_or_else(|| WigError::InvalidPosition {
                        line: line_no,
                        value: raw.to_string(),
                    })?;
                (chr.as_str(), position, fields.next().filter(|_| skip_zero))
            }
            Some(StepBlock::Fixed { chr, next, step }) => {
                let current = *next;
                // start and step fit in u32, so this only saturates after ~2^32 lines
                *next = current.saturating_add(*step);
                let position = u32::try_from(current)
                    .ok()
                    .filter(|&p| p > 0)
                    .ok_or_else(|| WigError::InvalidPosition {
                        line: line_no,
                        value: current.to_string(),
                    })?;
                (chr.as_str(), position, fields.next())
            }
        };

        if value.and_then(|v| v.parse::<f64>().ok()) == Some(0.0) {
            return Ok(None);
        }

        Ok(Some(Hit::new(chr, position)))
    }
}

/// Declared `start`/`step` values must fit a 32-bit coordinate.
fn parse_declared(line: usize, key: &str, value: &str) -> std::result::Result<u64, WigError> {
    value
        .parse::<u32>()
        .map(u64::from)
        .map_err(|_| WigError::InvalidDeclaration {
            line,
            key: key.to_string(),
            value: value.to_string(),
        })
}

impl<R: BufRead> Iterator for WigReader<R> {
    type Item = Result<Hit>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            let line = line.trim();
            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with("track")
                || line.starts_with("browser")
            {
                continue;
            }

            if line.starts_with(VARIABLE_STEP) || line.starts_with(FIXED_STEP) {
                if let Err(e) = self.declare(line) {
                    return Some(Err(e.into()));
                }
                continue;
            }

            match self.decode(line) {
                Ok(Some(hit)) => return Some(Ok(hit)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

///
/// Read every hit of a WIG track into memory.
///
/// # Arguments
/// - path: path to the track (gzipped if it ends in `.gz`), or `-` for stdin
/// - skip_zero: also drop `variableStep` lines whose value is zero
///
pub fn read_wig_hits(path: &str, skip_zero: bool) -> Result<Vec<Hit>> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    let hits = WigReader::new(reader)
        .skip_zero_values(skip_zero)
        .collect::<Result<Vec<Hit>>>()?;

    info!("Read {} hits from {}", hits.len(), path);

    Ok(hits)
}
