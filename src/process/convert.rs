use crate::error::VaryError;
use crate::process::utils::parse_number;
use arrow::{
    array::{Array, ArrayRef, AsArray, Float64Array, Float64Builder},
    compute::cast,
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Convert one column to finite `f64` values.
///
/// Non-string columns are rendered to text first so every input goes through
/// the same parser. The first null, empty, or non-numeric cell is an error.
pub fn column_to_f64(name: &str, arr: &ArrayRef) -> Result<Float64Array, VaryError> {
    // already declared
    if let Some(values) = arr.as_any().downcast_ref::<Float64Array>() {
        if values.null_count() == 0 && values.values().iter().all(|v| v.is_finite()) {
            return Ok(values.clone());
        }
    }

    let text = match arr.data_type() {
        DataType::Utf8 => arr.clone(),
        _ => cast(arr, &DataType::Utf8)?,
    };
    let strings = text.as_string::<i32>();

    let mut b = Float64Builder::with_capacity(strings.len());
    for (i, opt) in strings.iter().enumerate() {
        let raw = opt.unwrap_or_default();
        match parse_number(raw) {
            Some(v) => b.append_value(v),
            None => {
                return Err(VaryError::Conversion {
                    column: name.to_string(),
                    row: i + 1,
                    value: raw.to_string(),
                })
            }
        }
    }
    Ok(b.finish())
}

/// Declare `numeric` columns as `Float64`, leaving the rest untouched.
///
/// Runs over the whole table before any value is changed, so a bad cell
/// anywhere aborts the run with nothing perturbed.
pub fn declare_numeric(batch: &RecordBatch, numeric: &[String]) -> Result<RecordBatch, VaryError> {
    let schema = batch.schema();
    let mut fields = Vec::with_capacity(batch.num_columns());
    let mut out = Vec::with_capacity(batch.num_columns());

    for (fld, arr) in schema.fields().iter().zip(batch.columns()) {
        if numeric.iter().any(|n| n == fld.name()) {
            let values = column_to_f64(fld.name(), arr)?;
            fields.push(Field::new(fld.name(), DataType::Float64, false));
            out.push(Arc::new(values) as ArrayRef);
        } else {
            fields.push(fld.as_ref().clone());
            out.push(arr.clone());
        }
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), out).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int64Array, StringArray};

    fn batch(cols: Vec<(&str, ArrayRef)>) -> RecordBatch {
        RecordBatch::try_from_iter(cols).unwrap()
    }

    #[test]
    fn test_declares_only_named_columns() {
        let b = batch(vec![
            ("NAME", Arc::new(StringArray::from(vec!["a", "b"])) as ArrayRef),
            ("MAY", Arc::new(StringArray::from(vec!["1", " 2.5 "])) as ArrayRef),
        ]);
        let out = declare_numeric(&b, &["MAY".to_string()]).unwrap();

        assert_eq!(out.schema().field(0).data_type(), &DataType::Utf8);
        assert_eq!(out.schema().field(1).data_type(), &DataType::Float64);
        let may = out.column(1).as_primitive::<arrow::datatypes::Float64Type>();
        assert_eq!(may.values().to_vec(), vec![1.0, 2.5]);
    }

    #[test]
    fn test_non_numeric_cell_names_column_and_row() {
        let b = batch(vec![(
            "JUNE",
            Arc::new(StringArray::from(vec!["4", "5", "n/a"])) as ArrayRef,
        )]);
        let err = declare_numeric(&b, &["JUNE".to_string()]).unwrap_err();
        match err {
            VaryError::Conversion { column, row, value } => {
                assert_eq!(column, "JUNE");
                assert_eq!(row, 3);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_cell_is_conversion_error() {
        let b = batch(vec![(
            "JULY",
            Arc::new(StringArray::from(vec![Some("1"), None])) as ArrayRef,
        )]);
        let err = declare_numeric(&b, &["JULY".to_string()]).unwrap_err();
        assert!(matches!(err, VaryError::Conversion { row: 2, .. }), "{err}");
    }

    #[test]
    fn test_integer_column_is_accepted() {
        let arr: ArrayRef = Arc::new(Int64Array::from(vec![3, -1]));
        let values = column_to_f64("APRIL", &arr).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.value(0), 3.0);
        assert_eq!(values.value(1), -1.0);
    }
}
