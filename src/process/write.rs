// src/process/write.rs

use crate::error::VaryError;
use arrow::{csv::WriterBuilder, error::ArrowError, record_batch::RecordBatch};
use parquet::{
    arrow::ArrowWriter,
    basic::{Compression, ZstdLevel},
    errors::ParquetError,
    file::properties::WriterProperties,
};
use std::{fs, path::Path};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    /// `.parquet` (any case) means Parquet; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => OutputFormat::Parquet,
            _ => OutputFormat::Csv,
        }
    }
}

/// Header row plus one line per row, no index column.
fn render_csv(batch: &RecordBatch) -> Result<Vec<u8>, ArrowError> {
    let mut writer = WriterBuilder::new().with_header(true).build(Vec::new());
    writer.write(batch)?;
    Ok(writer.into_inner())
}

fn render_parquet(batch: &RecordBatch) -> Result<Vec<u8>, ParquetError> {
    let props = WriterProperties::builder()
        .set_compression(Compression::ZSTD(ZstdLevel::default()))
        .build();
    let mut writer = ArrowWriter::try_new(Vec::new(), batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.into_inner()
}

/// Encode `batch` in memory and write it to `path` in one go.
///
/// Returns the number of bytes written.
pub fn write_table(
    batch: &RecordBatch,
    path: &Path,
    format: OutputFormat,
) -> Result<u64, VaryError> {
    let bytes = match format {
        OutputFormat::Csv => render_csv(batch).map_err(|e| VaryError::write(path, e))?,
        OutputFormat::Parquet => render_parquet(batch).map_err(|e| VaryError::write(path, e))?,
    };
    fs::write(path, &bytes).map_err(|e| VaryError::write(path, e))?;

    info!(
        path = %path.display(),
        format = ?format,
        rows = batch.num_rows(),
        bytes = bytes.len(),
        "wrote table"
    );
    Ok(bytes.len() as u64)
}
