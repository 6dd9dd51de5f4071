//! Dataset management: records, schema-checked collections and text loading.

pub mod dataset;
pub mod loader;
pub mod record;

pub use dataset::Dataset;
pub use loader::{load_from_path, load_from_reader, load_from_stdin, load_from_str, parse_record};
pub use record::Record;
