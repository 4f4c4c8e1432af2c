//! File adapters: the identifier list in, the result table out

mod input;
mod sink;

pub use input::{default_output_path, parse_identifiers, read_identifiers};
pub use sink::{CSV_HEADER, CsvSink};
