//! Helpers for mining issue-tracker data from version control history.
//!
//! The library extracts issue identifiers referenced from commit messages,
//! derives metrics from exported issue records (working days spent, values
//! encoded in prefixed labels) and provides the sequence, text and date-range
//! utilities those computations rely on. Every helper is a synchronous,
//! stateless transformation of its inputs; only the loaders and the git
//! reader touch the filesystem.

mod config;
mod error;
mod git;
mod issue_ids;
mod labels;
mod metrics;
mod sequence;
mod table;
mod text;

pub use config::{MiningConfig, load_config, parse_config};
pub use error::{Error, io_error};
pub use git::commit_messages;
pub use issue_ids::{extract_issue_ids, extract_issue_ids_with};
pub use labels::{LabelInput, extract_label_value};
pub use metrics::{IssueRecord, elapsed_days, elapsed_days_with};
pub use sequence::{deduplicate, flatten};
pub use table::{Row, Table, filter_by_date_range, load_table, parse_table};
pub use text::{remove_characters, strip_non_numeric};
