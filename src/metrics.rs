// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Time metrics derived from issue records.

use serde_json::{Map, Value};

use crate::{config::MiningConfig, error::Error};

/// Issue record as exported by the tracker: field name to JSON value.
pub type IssueRecord = Map<String, Value,>;

/// Converts the seconds stored under `key` into eight-hour working days.
///
/// # Errors
///
/// Returns [`Error::MissingKey`] when `key` is absent and
/// [`Error::Validation`] when the value is not a number.
///
/// # Examples
///
/// ```
/// use issue_miner::{IssueRecord, elapsed_days};
/// use serde_json::json;
///
/// let mut record = IssueRecord::new();
/// record.insert("time_spent_seconds".to_owned(), json!(28_800),);
/// assert_eq!(elapsed_days(&record, "time_spent_seconds",)?, 1.0);
/// # Ok::<(), issue_miner::Error>(())
/// ```
pub fn elapsed_days(record: &IssueRecord, key: &str,) -> Result<f64, Error,>
{
    elapsed_days_with(record, key, &MiningConfig::default(),)
}

/// Converts the seconds stored under `key` into working days of
/// [`MiningConfig::hours_per_workday`] hours.
pub fn elapsed_days_with(
    record: &IssueRecord,
    key: &str,
    config: &MiningConfig,
) -> Result<f64, Error,>
{
    let value = record.get(key,).ok_or_else(|| Error::missing_key(key,),)?;
    let seconds = value.as_f64().ok_or_else(|| {
        Error::validation(format!("value of '{key}' must be a number of seconds, got {value}"),)
    },)?;

    Ok(seconds / config.seconds_per_workday(),)
}
