//! Delimited-file output.
//!
//! Files start with a UTF-8 byte-order mark so spreadsheet tools detect the
//! encoding. The header row is always written, even for an empty batch.

use std::fs::File;
use std::io::{BufWriter, Read, Write};

use camino::Utf8Path;

use crate::error::AnalysisResult;
use crate::row::{AnalysisRow, COLUMNS};

/// UTF-8 byte-order mark.
pub const BOM: &str = "\u{feff}";

/// Write `rows` as BOM-prefixed CSV with the fixed header.
pub fn write_csv<W: Write>(rows: &[AnalysisRow], mut writer: W) -> AnalysisResult<()> {
    writer.write_all(BOM.as_bytes())?;

    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(COLUMNS)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write `rows` to a CSV file at `path`, replacing any existing file.
#[tracing::instrument(skip(rows), fields(rows = rows.len()))]
pub fn write_csv_file(rows: &[AnalysisRow], path: &Utf8Path) -> AnalysisResult<()> {
    let file = File::create(path)?;
    write_csv(rows, BufWriter::new(file))?;
    tracing::info!(%path, "results written");
    Ok(())
}

/// Read rows back from CSV produced by [`write_csv`]. A leading BOM is optional.
pub fn read_csv<R: Read>(mut reader: R) -> AnalysisResult<Vec<AnalysisRow>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    let body = contents.strip_prefix(BOM).unwrap_or(&contents);

    let mut csv = csv::Reader::from_reader(body.as_bytes());
    let rows = csv.deserialize().collect::<Result<Vec<AnalysisRow>, _>>()?;
    Ok(rows)
}
