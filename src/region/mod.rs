pub mod filter;
pub mod source;
pub mod types;

pub use filter::{filter_by_name, select_regions};
pub use source::{partition_valid, validate_record, FileRegionSource, RegionSource};
pub use types::{ConnectivityMetrics, RegionFile, RegionMetrics, RegionRecord};
