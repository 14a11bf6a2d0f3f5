// src/process/load.rs

use crate::error::VaryError;
use arrow::{
    compute::concat_batches,
    csv::ReaderBuilder,
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::{fs::File, path::Path, sync::Arc};
use tracing::debug;

/// Rows per Arrow batch while parsing; batches are concatenated afterwards.
const BATCH_SIZE: usize = 8192;

/// Column names from the header row, in file order.
fn read_headers(path: &Path) -> Result<Vec<String>, VaryError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| VaryError::load(path, e))?;
    let headers = rdr.headers().map_err(|e| VaryError::load(path, e))?;
    Ok(headers.iter().map(str::to_string).collect())
}

/// Load a comma-delimited file with a header row into a single batch.
///
/// Every column comes back as nullable `Utf8`; empty fields may load as nulls
/// and are written back as empty fields either way. Typing
/// happens later, and only for the columns that need it, so text columns are
/// written back exactly as they were read.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.display()))]
pub fn load_table(path: &Path) -> Result<RecordBatch, VaryError> {
    let headers = read_headers(path)?;
    if headers.is_empty() {
        return Err(VaryError::load(path, "no header row"));
    }

    let fields: Vec<Field> = headers
        .iter()
        .map(|n| Field::new(n, DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let file = File::open(path).map_err(|e| VaryError::load(path, e))?;
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .with_delimiter(b',')
        .with_quote(b'"')
        .build(file)
        .map_err(|e| VaryError::load(path, e))?;

    let batches = reader
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| VaryError::load(path, e))?;
    let table = concat_batches(&schema, &batches).map_err(|e| VaryError::load(path, e))?;

    debug!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        batches = batches.len(),
        "loaded table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use arrow::array::{Array, AsArray};
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn csv_file(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        Ok(tmp)
    }

    #[test]
    fn test_load_keeps_order_and_text() -> Result<()> {
        let tmp = csv_file("NAME,JANUARY,CODE\nAlice,10,007\n\"Smith, Bob\",3.5,\n")?;
        let table = load_table(tmp.path())?;

        let schema = table.schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, vec!["NAME", "JANUARY", "CODE"]);
        assert_eq!(table.num_rows(), 2);

        let name = table.column(0).as_string::<i32>();
        assert_eq!(name.value(0), "Alice");
        assert_eq!(name.value(1), "Smith, Bob");

        let code = table.column(2).as_string::<i32>();
        assert_eq!(code.value(0), "007");
        assert!(code.is_null(1) || code.value(1).is_empty());
        Ok(())
    }

    #[test]
    fn test_header_only_is_zero_rows() -> Result<()> {
        let tmp = csv_file("NAME,JANUARY\n")?;
        let table = load_table(tmp.path())?;
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.num_columns(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_load_error() -> Result<()> {
        let dir = tempdir()?;
        let err = load_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, VaryError::Load { .. }), "{err}");
        Ok(())
    }

    #[test]
    fn test_empty_file_is_load_error() -> Result<()> {
        let tmp = csv_file("")?;
        let err = load_table(tmp.path()).unwrap_err();
        assert!(matches!(err, VaryError::Load { .. }), "{err}");
        Ok(())
    }

    #[test]
    fn test_ragged_row_is_load_error() -> Result<()> {
        let tmp = csv_file("A,B\n1,2\n3,4,5\n")?;
        let err = load_table(tmp.path()).unwrap_err();
        assert!(matches!(err, VaryError::Load { .. }), "{err}");
        Ok(())
    }
}
