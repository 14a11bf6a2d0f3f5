// src/process/mod.rs
pub mod convert;
pub mod load;
pub mod noise;
pub mod select;
pub mod utils;
pub mod write;

use crate::error::VaryError;
use arrow::record_batch::RecordBatch;
use rand::Rng;
use std::path::Path;
use tracing::info;

pub use convert::declare_numeric;
pub use load::load_table;
pub use noise::perturb_columns;
pub use select::select_monthly_columns;
pub use write::{write_table, OutputFormat};

/// What a run did, for logging by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarySummary {
    pub rows: usize,
    pub columns: usize,
    pub monthly_columns: Vec<String>,
    pub bytes_written: u64,
}

/// The line printed on stdout after a successful run.
///
/// Names the file actually written, so with no `--output` flag it always reads
/// `Variations created and saved to modified_data3.csv`.
pub fn confirmation_line(output: &Path) -> String {
    format!("Variations created and saved to {}", output.display())
}

/// Select, declare, and perturb the monthly columns of an in-memory table.
///
/// Returns the new table and the names of the perturbed columns.
pub fn vary_table<R: Rng + ?Sized>(
    table: &RecordBatch,
    rng: &mut R,
) -> Result<(RecordBatch, Vec<String>), VaryError> {
    let schema = table.schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    let monthly = select_monthly_columns(&names);
    info!(count = monthly.len(), columns = ?monthly, "monthly columns");

    let declared = declare_numeric(table, &monthly)?;
    let varied = perturb_columns(&declared, &monthly, rng)?;
    Ok((varied, monthly))
}

/// Load `input`, perturb its monthly columns, and write the result to `output`.
pub fn vary_file<R: Rng + ?Sized>(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    rng: &mut R,
) -> Result<VarySummary, VaryError> {
    let table = load_table(input)?;
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "loaded {}",
        input.display()
    );

    let (varied, monthly_columns) = vary_table(&table, rng)?;
    let bytes_written = write_table(&varied, output, format)?;

    Ok(VarySummary {
        rows: varied.num_rows(),
        columns: varied.num_columns(),
        monthly_columns,
        bytes_written,
    })
}
