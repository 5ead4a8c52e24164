//! Delimited export of display rows
//!
//! Writes rows as comma-separated values with the table's headers, quoting
//! cells that contain a delimiter, quote or line break.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use itertools::Itertools;

use crate::error::Result;
use crate::listing::table::Column;
use crate::models::DisplayRow;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Field delimiter
pub const DELIMITER: char = ',';

/// Which rows an export contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    /// Every fetched row, ignoring the active search
    #[default]
    All,
    /// Only rows matching the active search, in display order
    Filtered,
}

fn escape(cell: &str) -> Cow<'_, str> {
    if cell.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

fn write_line<'a, W, I>(writer: &mut W, cells: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    let line = cells.into_iter().map(escape).join(&DELIMITER.to_string());
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\r\n")
}

/// Write a header line and one line per row, returning the number of rows
pub fn write_csv<'a, W, I>(writer: W, rows: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a DisplayRow>,
{
    let mut writer = BufWriter::new(writer);
    write_line(&mut writer, Column::ALL.iter().map(|c| c.header()))?;

    let mut count = 0;
    for row in rows {
        write_line(&mut writer, Column::ALL.iter().map(|c| c.value(row)))?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

/// Write rows to a file, creating or truncating it
pub fn export_to_path<'a, I>(path: &Path, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a DisplayRow>,
{
    let target = path.display().to_string();
    log_operation_start("Exporting rows to", &target);
    let count = write_csv(File::create(path)?, rows)?;
    log_operation_complete("exported", &target, count, None);
    Ok(count)
}

/// Default file name for an export taken at `now`
#[must_use]
pub fn default_file_name(now: NaiveDateTime) -> String {
    format!("users-{}.csv", now.format("%Y%m%d-%H%M%S"))
}
