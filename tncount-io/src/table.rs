use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;

use tncount_core::models::HitCountTable;

pub const FEATURE_COLUMN: &str = "Feature";
pub const HITS_COLUMN: &str = "Hits";

pub trait HitTableWrite {
    ///
    /// Write the table as delimited text: a `Feature<delim>Hits` header, then one row per
    /// feature in table order.
    ///
    /// # Arguments
    /// - writer: where to write
    /// - delimiter: column separator byte
    fn write_table<W: Write>(&self, writer: W, delimiter: u8) -> std::io::Result<()>;

    ///
    /// Write the table to disk as a csv file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write the table to disk as a csv.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

fn create_parent_dirs(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

impl HitTableWrite for HitCountTable {
    fn write_table<W: Write>(&self, writer: W, delimiter: u8) -> std::io::Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        writer.write_record([FEATURE_COLUMN, HITS_COLUMN])?;
        for (name, hits) in self.iter() {
            writer.serialize((name, hits))?;
        }
        writer.flush()
    }

    fn write_csv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let file = File::create(path)?;
        self.write_table(BufWriter::new(file), b',')
    }

    fn write_csv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        self.write_table(&mut encoder, b',')?;
        encoder.finish()?;
        Ok(())
    }
}

///
/// Write a hit table as csv, gzip-compressed when the path ends in `.gz`.
///
pub fn write_hit_table<T: AsRef<Path>>(table: &HitCountTable, path: T) -> std::io::Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => table.write_csv_gz(path),
        _ => table.write_csv(path),
    }
}
