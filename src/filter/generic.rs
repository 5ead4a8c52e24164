//! Generic filtering framework
//!
//! A trait-based approach to filtering in-memory values. The listing view
//! uses it to narrow display rows by a search query.

use std::fmt::Debug;

use crate::models::DisplayRow;

/// A predicate over values of type `T`
pub trait Filter<T>: Debug {
    /// Whether the value passes the filter
    fn matches(&self, input: &T) -> bool;
}

/// Apply a filter to a slice, keeping order and borrowing the kept rows
pub fn filter_rows<'a, T, F>(rows: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: Filter<T> + ?Sized,
{
    rows.iter().filter(|row| filter.matches(row)).collect()
}

/// A filter that always includes all elements
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAllFilter;

impl<T> Filter<T> for IncludeAllFilter {
    fn matches(&self, _input: &T) -> bool {
        true
    }
}

/// Case-insensitive substring match on the row's name.
///
/// Rows without a name only pass an empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    /// Create a filter for the given query
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether the filter lets every row through
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl Filter<DisplayRow> for NameFilter {
    fn matches(&self, input: &DisplayRow) -> bool {
        self.is_empty()
            || input
                .raw_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&self.needle))
    }
}
