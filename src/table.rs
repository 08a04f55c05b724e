// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tabular issue exports and date-range filtering.
//!
//! A [`Table`] is an ordered list of rows, each row mapping column names to
//! JSON values. Tables are read from JSON arrays of objects, which is how
//! tracker exports are usually saved.

use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{self, Error};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Single row of a [`Table`].
pub type Row = Map<String, Value,>;

/// Ordered collection of rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize,)]
#[serde(transparent)]
pub struct Table
{
    /// Rows in their original order.
    pub rows: Vec<Row,>,
}

impl Table
{
    /// Wraps the provided rows.
    pub fn new(rows: Vec<Row,>,) -> Self
    {
        Self {
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self,) -> usize
    {
        self.rows.len()
    }

    /// Returns `true` when the table has no rows.
    pub fn is_empty(&self,) -> bool
    {
        self.rows.is_empty()
    }
}

/// Parses a table from a JSON array of objects.
///
/// # Errors
///
/// Returns [`Error::Json`] when the document is not an array of objects.
pub fn parse_table(contents: &str,) -> Result<Table, Error,>
{
    Ok(serde_json::from_str(contents,)?,)
}

/// Reads and parses a table stored as JSON on disk.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Json`]
/// when it does not hold an array of objects.
pub fn load_table(path: &Path,) -> Result<Table, Error,>
{
    debug!("Reading table from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_table(&contents,)
}

/// Keeps the rows whose `column` value lies within `[start, end]`.
///
/// Both bounds must be valid calendar dates in `YYYY-MM-DD` form. Row values
/// are compared with the bounds as strings, which orders zero-padded ISO
/// dates chronologically. Rows lacking the column, or holding a non-string
/// value in it, are dropped. A range whose start lies after its end selects
/// nothing.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] naming the first bound that fails to parse.
///
/// # Examples
///
/// ```
/// use issue_miner::{filter_by_date_range, parse_table};
///
/// let table = parse_table(r#"[{"created": "2022-12-31"}, {"created": "2023-06-01"}]"#,)?;
/// let filtered = filter_by_date_range(&table, "created", "2023-01-01", "2023-12-31",)?;
/// assert_eq!(filtered.len(), 1);
/// # Ok::<(), issue_miner::Error>(())
/// ```
pub fn filter_by_date_range(
    table: &Table,
    column: &str,
    start: &str,
    end: &str,
) -> Result<Table, Error,>
{
    validate_date("start", start,)?;
    validate_date("end", end,)?;

    let rows: Vec<Row,> = table
        .rows
        .iter()
        .filter(|row| {
            row.get(column,)
                .and_then(Value::as_str,)
                .is_some_and(|value| start <= value && value <= end,)
        },)
        .cloned()
        .collect();

    info!(
        "Selected {} of {} rows with {} between {} and {}",
        rows.len(),
        table.len(),
        column,
        start,
        end
    );

    Ok(Table::new(rows,),)
}

fn validate_date(bound: &'static str, value: &str,) -> Result<NaiveDate, Error,>
{
    let invalid = || Error::InvalidDate {
        bound,
        value: value.to_owned(),
    };

    // chrono accepts signs and padding spaces in numeric fields, which would
    // then compare below '0' as strings.
    let bytes = value.as_bytes();
    let fixed_width = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte,)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        },);
    if !fixed_width {
        return Err(invalid(),);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT,).map_err(|_| invalid(),)
}
