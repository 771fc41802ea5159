pub mod dataset;
pub mod loader;
pub mod record;

pub use dataset::{Dataset, max_attribute_value};
pub use loader::{DEFAULT_DATA_URL, read_records, read_records_from_path};
pub use record::{Attribute, WorldCupRecord, coerce_stat, format_stat};

#[cfg(feature = "remote-data")]
pub use loader::fetch_records;
