//! CSV reading and writing over the `csv` crate.

mod reader;
mod writer;

pub use reader::{read_csv, read_csv_path};
pub use writer::{write_csv, write_csv_path};
