//! Listing view over all registered persons
//!
//! The view fetches the full record list once, formats every record and
//! keeps the rows in memory. Search, sorting and pagination all operate on
//! that snapshot without touching the network again.

pub mod table;

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::api::PersonApi;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;
use crate::export::{self, ExportScope, write_csv};
use crate::filter::{IncludeAllFilter, NameFilter, filter_rows};
use crate::models::{DisplayRow, format_records};
use crate::utils::logging::log_warning;

pub use table::{Column, Page, SortOrder, SortSpec, paginate, render_page, sort_rows};

/// Lifecycle of the fetched row list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    /// The initial fetch is outstanding
    Loading,
    /// Rows fetched and formatted
    Loaded(Vec<DisplayRow>),
    /// The fetch failed; the message is shown in place of the table
    Failed(String),
}

/// State of the listing screen
#[derive(Debug, Clone)]
pub struct ListingView {
    state: ListingState,
    search: String,
    sort: Option<SortSpec>,
    page_size: usize,
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListingView {
    /// Create a view that has not fetched yet
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            state: ListingState::Loading,
            search: String::new(),
            sort: None,
            page_size: page_size.max(1),
        }
    }

    /// Create a view from already formatted rows
    #[must_use]
    pub fn with_rows(rows: Vec<DisplayRow>, page_size: usize) -> Self {
        Self {
            state: ListingState::Loaded(rows),
            ..Self::new(page_size)
        }
    }

    /// Fetch and format every record.
    ///
    /// Failures are captured in [`ListingState::Failed`] rather than
    /// returned, so the view always ends in a renderable state.
    pub async fn load<A>(&mut self, api: &A) -> &ListingState
    where
        A: PersonApi + ?Sized,
    {
        self.state = ListingState::Loading;
        let start = Instant::now();

        self.state = match api.list_persons().await {
            Ok(records) => {
                let rows = format_records(&records);
                info!("Formatted {} rows in {:?}", rows.len(), start.elapsed());
                ListingState::Loaded(rows)
            }
            Err(e) => {
                log_warning(&format!("Failed to load person records: {e}"), None);
                ListingState::Failed(format!("Could not load users: {e}"))
            }
        };
        &self.state
    }

    #[must_use]
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Whether the progress indicator should be shown
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListingState::Loading)
    }

    /// Every fetched row; empty unless loaded
    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        match &self.state {
            ListingState::Loaded(rows) => rows,
            ListingState::Loading | ListingState::Failed(_) => &[],
        }
    }

    /// Replace the search query
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the sort column and direction
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rows matching the current search, in fetch order
    #[must_use]
    pub fn filtered_rows(&self) -> Vec<&DisplayRow> {
        filter_rows(self.rows(), &NameFilter::new(&self.search))
    }

    /// Rows matching the current search, sorted by the current sort
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&DisplayRow> {
        let mut rows = self.filtered_rows();
        if let Some(spec) = self.sort {
            sort_rows(&mut rows, spec);
        }
        rows
    }

    /// One page of the visible rows (1-based)
    #[must_use]
    pub fn page(&self, number: usize) -> Page<'_> {
        paginate(&self.visible_rows(), self.page_size, number)
    }

    /// Rows an export of the given scope contains.
    ///
    /// [`ExportScope::All`] is every fetched row regardless of the active
    /// search; [`ExportScope::Filtered`] is the visible rows.
    #[must_use]
    pub fn export_rows(&self, scope: ExportScope) -> Vec<&DisplayRow> {
        match scope {
            ExportScope::All => filter_rows(self.rows(), &IncludeAllFilter),
            ExportScope::Filtered => self.visible_rows(),
        }
    }

    /// Write rows as CSV, returning the number of rows written
    pub fn export<W: Write>(&self, writer: W, scope: ExportScope) -> Result<usize> {
        write_csv(writer, self.export_rows(scope))
    }

    /// Write rows as CSV to a file, returning the number of rows written
    pub fn export_to_path(&self, path: &Path, scope: ExportScope) -> Result<usize> {
        export::export_to_path(path, self.export_rows(scope))
    }
}
