//! Lenscout - client-side browsing core for the Lenscout photographer directory
//!
//! This library provides the state and algorithms behind the directory UI:
//! a filter/sort/pagination pipeline over photographer records, a debounced
//! search input, facet extraction, and per-screen view state.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use crate::core::{apply_filters, sort_records, Debouncer, Facets, VisibleCursor};
pub use crate::models::{CriteriaChange, FilterCriteria, InquiryRequest, ProfileRecord, SortMode};
pub use crate::views::{ListingView, Navigator, ProfileView, Screen};
