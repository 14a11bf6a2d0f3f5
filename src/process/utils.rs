/// Parse a cell as a finite `f64`.
///
/// Only surrounding whitespace is ignored. CSV quoting is already gone by the
/// time a cell gets here, so a `"` that is left over is part of the value and
/// makes it non-numeric. `NaN` and infinities are rejected since they have no
/// integer value.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
