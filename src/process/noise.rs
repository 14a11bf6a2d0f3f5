// src/process/noise.rs

use crate::error::VaryError;
use arrow::{
    array::{ArrayRef, Float64Array, Int64Array},
    datatypes::{DataType, Field, Schema},
    error::ArrowError,
    record_batch::RecordBatch,
};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::sync::Arc;
use tracing::debug;

pub const NOISE_MEAN: f64 = 0.0;
pub const NOISE_STD_DEV: f64 = 2.0;

/// Apply an already-drawn noise sample: add, truncate toward zero, floor at 0.
///
/// Out-of-range results saturate to `i64::MAX`.
pub fn perturb_value(value: f64, noise: f64) -> i64 {
    let truncated = (value + noise).trunc();
    (truncated as i64).max(0)
}

/// One draw from N(`NOISE_MEAN`, `NOISE_STD_DEV`).
pub fn sample_noise<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    NOISE_MEAN + NOISE_STD_DEV * z
}

pub fn vary_value<R: Rng + ?Sized>(value: f64, rng: &mut R) -> i64 {
    perturb_value(value, sample_noise(rng))
}

/// Replace every cell of the `columns` named here with a perturbed `Int64`.
///
/// The columns must already be declared `Float64` by `declare_numeric`; any
/// other type is rejected as an assembly error.
pub fn perturb_columns<R: Rng + ?Sized>(
    batch: &RecordBatch,
    columns: &[String],
    rng: &mut R,
) -> Result<RecordBatch, VaryError> {
    let schema = batch.schema();
    let mut fields = Vec::with_capacity(batch.num_columns());
    let mut out = Vec::with_capacity(batch.num_columns());

    for (fld, arr) in schema.fields().iter().zip(batch.columns()) {
        if !columns.iter().any(|c| c == fld.name()) {
            fields.push(fld.as_ref().clone());
            out.push(arr.clone());
            continue;
        }

        let values = arr
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or_else(|| {
                ArrowError::InvalidArgumentError(format!(
                    "column '{}' is {}, not a declared Float64 column",
                    fld.name(),
                    arr.data_type()
                ))
            })?;
        let varied =
            Int64Array::from_iter_values(values.values().iter().map(|&v| vary_value(v, rng)));
        debug!(column = %fld.name(), rows = varied.len(), "perturbed column");

        fields.push(Field::new(fld.name(), DataType::Int64, false));
        out.push(Arc::new(varied) as ArrayRef);
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), out).map_err(Into::into)
}
