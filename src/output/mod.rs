mod entry;
mod formatter;

pub use entry::JsonEntry;
pub use formatter::{format_time, JsonOutput, OutputFormatter};
