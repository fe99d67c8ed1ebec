// Core pipeline exports
pub mod debounce;
pub mod facets;
pub mod filters;
pub mod pagination;
pub mod sorting;

pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use facets::Facets;
pub use filters::{apply_filters, matches_criteria};
pub use pagination::{VisibleCursor, PAGE_SIZE};
pub use sorting::sort_records;
