//! Filtering of display rows
//!
//! Filters narrow an in-memory row list without mutating it.

pub mod generic;

pub use generic::{Filter, IncludeAllFilter, NameFilter, filter_rows};
