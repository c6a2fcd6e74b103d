pub mod dataset;
pub mod loader;
pub mod record;

pub use dataset::Dataset;
pub use loader::{load_csv, load_from_reader, parse_amount, parse_date};
pub use record::{split_investors, DataError, FundingRecord};
