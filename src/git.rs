// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Reading commit messages from a local repository.
//!
//! Messages are taken from `git log` with full bodies so multi-line commits
//! keep issue references made below the subject line.

use std::{path::Path, process::Command};

use tracing::{debug, info};

use crate::error::Error;

const RECORD_SEPARATOR: char = '\0';

/// Returns the commit messages of `repository`, newest first.
///
/// # Arguments
///
/// * `repository` - Path to the working tree or bare repository
/// * `revision_range` - Optional revision range such as `v1.0..HEAD`; the
///   full history of `HEAD` is read when omitted
///
/// # Errors
///
/// Returns [`Error::Git`] when `git` cannot be spawned or exits with a
/// failure status.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use issue_miner::{commit_messages, extract_issue_ids};
///
/// # fn example() -> Result<(), issue_miner::Error> {
/// let messages = commit_messages(Path::new("."), Some("v1.0..HEAD"),)?;
/// let ids = extract_issue_ids(&messages,);
/// println!("{} issues referenced", ids.len());
/// # Ok(())
/// # }
/// ```
pub fn commit_messages(
    repository: &Path,
    revision_range: Option<&str,>,
) -> Result<Vec<String,>, Error,>
{
    let mut args = vec!["log", "--format=%B%x00"];
    if let Some(range,) = revision_range {
        args.push(range,);
    }

    if !has_head(repository,)? {
        debug!("{} has no commits yet", repository.display());
        return Ok(Vec::new(),);
    }

    debug!("Running git {} in {}", args.join(" "), repository.display());
    let stdout = run_git(repository, &args,)?;
    let messages = split_messages(&stdout,);

    info!("Read {} commit messages from {}", messages.len(), repository.display());
    Ok(messages,)
}

/// Distinguishes an unborn `HEAD` from a path that is not a repository.
fn has_head(repository: &Path,) -> Result<bool, Error,>
{
    let resolved = Command::new("git",)
        .arg("-C",)
        .arg(repository,)
        .args(["rev-parse", "--verify", "--quiet", "HEAD"],)
        .output()
        .map_err(|e| Error::git(format!("git rev-parse failed: {e}"),),)?;

    if resolved.status.success() {
        return Ok(true,);
    }

    run_git(repository, &["rev-parse", "--git-dir"],)?;
    Ok(false,)
}

fn split_messages(output: &str,) -> Vec<String,>
{
    output
        .split(RECORD_SEPARATOR,)
        .map(str::trim,)
        .filter(|message| !message.is_empty(),)
        .map(str::to_owned,)
        .collect()
}

fn run_git(repository: &Path, args: &[&str],) -> Result<String, Error,>
{
    let output = Command::new("git",)
        .arg("-C",)
        .arg(repository,)
        .args(args,)
        .output()
        .map_err(|e| Error::git(format!("git command failed: {e}"),),)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr,);
        return Err(Error::git(format!("git {} failed: {}", args.join(" "), stderr.trim()),),);
    }

    Ok(String::from_utf8_lossy(&output.stdout,).into_owned(),)
}
