//! CSV ingestion, cleaning and persistence for panel data.

mod clean;
mod csv_source;
mod writer;

pub use clean::{clean_records, CleanReport};
pub use csv_source::{CsvPanelSource, RawRecord};
pub use writer::{write_features, write_panel};
