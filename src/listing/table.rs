//! Table layout of display rows
//!
//! Columns, client-side sorting, pagination and fixed-width rendering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::models::{DisplayRow, ParseEnumError};

/// Table columns, in display and export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    AgeSex,
    Mobile,
    Address,
    GovtIdType,
    GovtId,
    Guardian,
    Nationality,
}

impl Column {
    pub const ALL: [Self; 9] = [
        Self::Id,
        Self::Name,
        Self::AgeSex,
        Self::Mobile,
        Self::Address,
        Self::GovtIdType,
        Self::GovtId,
        Self::Guardian,
        Self::Nationality,
    ];

    /// Header text
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::AgeSex => "Age/sex",
            Self::Mobile => "Mobile",
            Self::Address => "Address",
            Self::GovtIdType => "Govt Id Type",
            Self::GovtId => "Govt Id",
            Self::Guardian => "Guardian",
            Self::Nationality => "Nationality",
        }
    }

    /// Fixed width in characters
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Id => 6,
            Self::Name => 20,
            Self::AgeSex => 8,
            Self::Mobile => 12,
            Self::Address => 40,
            Self::GovtIdType => 12,
            Self::GovtId => 14,
            Self::Guardian => 24,
            Self::Nationality => 11,
        }
    }

    /// Cell value of a row
    #[must_use]
    pub fn value(self, row: &DisplayRow) -> &str {
        match self {
            Self::Id => &row.id,
            Self::Name => &row.name,
            Self::AgeSex => &row.age_sex,
            Self::Mobile => &row.mobile,
            Self::Address => &row.address,
            Self::GovtIdType => &row.govt_id_type,
            Self::GovtId => &row.govt_id,
            Self::Guardian => &row.guardian,
            Self::Nationality => &row.nationality,
        }
    }

    /// Compare two rows on this column.
    ///
    /// All-digit cells sort numerically and before every other cell; the rest
    /// compare case-insensitively.
    #[must_use]
    pub fn compare(self, a: &DisplayRow, b: &DisplayRow) -> Ordering {
        let (a, b) = (self.value(a), self.value(b));
        match (numeric(a), numeric(b)) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

fn numeric(cell: &str) -> Option<u128> {
    if cell.is_empty() || !cell.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    cell.parse().ok()
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|column| {
                let header: String = column
                    .header()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect();
                header.to_lowercase() == wanted
            })
            .ok_or_else(|| ParseEnumError::new("column", s))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Column and direction to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Column,
    pub order: SortOrder,
}

impl SortSpec {
    #[must_use]
    pub const fn new(column: Column, order: SortOrder) -> Self {
        Self { column, order }
    }
}

/// Sort borrowed rows in place; the sort is stable
pub fn sort_rows(rows: &mut [&DisplayRow], spec: SortSpec) {
    rows.sort_by(|a, b| {
        let ordering = spec.column.compare(a, b);
        match spec.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

/// One page of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub rows: Vec<&'a DisplayRow>,
    /// 1-based page number
    pub number: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

impl Page<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cut a page out of a row list.
///
/// Page numbers are 1-based and clamped to the available range; an empty
/// list yields a single empty page.
#[must_use]
pub fn paginate<'a>(rows: &[&'a DisplayRow], page_size: usize, number: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(page_size).max(1);
    let number = number.clamp(1, total_pages);

    let page_rows = rows
        .iter()
        .skip((number - 1) * page_size)
        .take(page_size)
        .copied()
        .collect();

    Page {
        rows: page_rows,
        number,
        total_pages,
        total_rows,
    }
}

/// Fit a cell into a fixed width, truncating with an ellipsis
fn fit(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width {
        format!("{value:<width$}")
    } else {
        let kept: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Render a page as a fixed-width text table
#[must_use]
pub fn render_page(page: &Page<'_>) -> String {
    let header = Column::ALL
        .iter()
        .map(|c| fit(c.header(), c.width()))
        .join(" | ");
    let rule = Column::ALL
        .iter()
        .map(|c| "-".repeat(c.width()))
        .join("-+-");

    let body = page.rows.iter().map(|row| {
        Column::ALL
            .iter()
            .map(|c| fit(c.value(row), c.width()))
            .join(" | ")
    });

    std::iter::once(header)
        .chain(std::iter::once(rule))
        .chain(body)
        .map(|line| line.trim_end().to_string())
        .join("\n")
}
