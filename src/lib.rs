pub mod error;
pub mod process;

pub use error::VaryError;
pub use process::{confirmation_line, vary_file, vary_table, write::OutputFormat, VarySummary};
