mod search;
mod status_filter;

pub use search::{parse_search_input, search_vehicle};
pub use status_filter::{apply_filter, FilterSummary, StatusFilter};
