// Model exports
pub mod domain;
pub mod inquiry;

pub use domain::{ProfileRecord, Review, FilterCriteria, CriteriaChange, SortMode};
pub use inquiry::{InquiryRequest, InquiryError, InquiryReceipt};
