//! # vox-query
//!
//! Pure query functions over the Vox catalogs: a record list plus a sparse
//! set of optional filters in, a filtered, ordered, size-limited list of
//! record copies out. Zero matches is a normal result, not an error.

pub mod engine;
pub mod filter;

pub use engine::{
    SortOrder, best_value_deals, budget_deals, deals_by_ids, luxury_deals, query_deals,
    search_deals, search_events, similar_deals, urgent_deals,
};
pub use filter::{DealFilter, EventFilter};
