/// Formatter adapters for the generated script and the documentation table
mod build_script_formatter;
mod status_table_formatter;

pub use build_script_formatter::BuildScriptFormatter;
pub use status_table_formatter::StatusTableFormatter;
