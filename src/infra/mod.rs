mod csv_writer;
mod jsonl_reader;

pub use csv_writer::*;
pub use jsonl_reader::*;
