// src/process/select.rs

use tracing::debug;

/// Column-name prefixes that mark a column as monthly. Case-sensitive.
pub const MONTH_PREFIXES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

pub fn is_monthly(name: &str) -> bool {
    MONTH_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Names of all monthly columns, in table order.
pub fn select_monthly_columns<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let selected: Vec<String> = names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| is_monthly(n))
        .map(str::to_string)
        .collect();
    if selected.is_empty() {
        debug!(columns = names.len(), "no monthly columns found");
    }
    selected
}
