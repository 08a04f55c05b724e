// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mining configuration document.
//!
//! Every field is optional in YAML and falls back to the conventions used by
//! the mining helpers: `ISSUE_` prefixed tokens, quote cleanup for messages
//! that were stringified before export, and an eight-hour working day.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

const DEFAULT_ISSUE_PREFIX: &str = "ISSUE_";
const DEFAULT_QUOTE_CHARACTERS: [char; 2] = ['\'', '"'];
const DEFAULT_HOURS_PER_WORKDAY: f64 = 8.0;
const DEFAULT_SECONDS_KEY: &str = "time_spent_seconds";

/// Settings consumed by issue extraction, elapsed-time conversion and the CLI.
///
/// # Examples
///
/// ```
/// use issue_miner::parse_config;
///
/// let config = parse_config("issue_prefix: JIRA-\nhours_per_workday: 7.5\n",)?;
/// assert_eq!(config.issue_prefix, "JIRA-");
/// assert_eq!(config.hours_per_workday, 7.5);
/// assert_eq!(config.quote_characters, vec!['\'', '"']);
/// # Ok::<(), issue_miner::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(default, deny_unknown_fields)]
pub struct MiningConfig
{
    /// Literal prefix marking an issue reference inside a commit token.
    #[serde(alias = "prefix")]
    pub issue_prefix:      String,
    /// Characters stripped from tokens before prefix matching.
    pub quote_characters:  Vec<char,>,
    /// Length of a working day used to convert seconds into days.
    pub hours_per_workday: f64,
    /// Issue record key holding elapsed seconds, used by the CLI.
    pub seconds_key:       String,
    /// Label prefix used by the CLI when none is given on the command line.
    pub label_prefix:      Option<String,>,
}

impl Default for MiningConfig
{
    fn default() -> Self
    {
        Self {
            issue_prefix:      DEFAULT_ISSUE_PREFIX.to_owned(),
            quote_characters:  DEFAULT_QUOTE_CHARACTERS.to_vec(),
            hours_per_workday: DEFAULT_HOURS_PER_WORKDAY,
            seconds_key:       DEFAULT_SECONDS_KEY.to_owned(),
            label_prefix:      None,
        }
    }
}

impl MiningConfig
{
    /// Number of seconds in one working day.
    pub fn seconds_per_workday(&self,) -> f64
    {
        self.hours_per_workday * 3600.0
    }

    /// Checks the invariants the mining helpers rely on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the issue prefix is blank or the
    /// working day length is not a positive finite number.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        if self.issue_prefix.trim().is_empty() {
            return Err(Error::validation("issue_prefix cannot be empty",),);
        }
        if self.issue_prefix.chars().any(char::is_whitespace,) {
            return Err(Error::validation("issue_prefix cannot contain whitespace",),);
        }
        if !self.hours_per_workday.is_finite() || self.hours_per_workday <= 0.0 {
            return Err(Error::validation(format!(
                "hours_per_workday must be a positive number, got {}",
                self.hours_per_workday
            ),),);
        }
        if self.seconds_key.trim().is_empty() {
            return Err(Error::validation("seconds_key cannot be empty",),);
        }
        Ok((),)
    }
}

/// Loads and validates a configuration document from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Parse`] for
/// malformed YAML and [`Error::Validation`] for invariant violations.
pub fn load_config(path: &Path,) -> Result<MiningConfig, Error,>
{
    debug!("Reading mining config from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses and validates a configuration document from a YAML string.
///
/// An empty document yields [`MiningConfig::default`].
pub fn parse_config(contents: &str,) -> Result<MiningConfig, Error,>
{
    let config: MiningConfig = if contents.trim().is_empty() {
        MiningConfig::default()
    } else {
        serde_yaml::from_str(contents,)?
    };
    config.validate()?;
    Ok(config,)
}
