#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the issue-miner crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for this module.

use std::path::{Path, PathBuf};

/// Unified error type returned by the mining helpers and the CLI.
///
/// Only operations with a genuine failure mode return it. Label extraction
/// degrades to an empty string instead of failing and therefore never
/// produces an [`Error`].
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading input documents.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the file being read.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors raised while loading configuration.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps JSON decoding and encoding errors for records and tables.
    #[error("invalid JSON document: {source}")]
    Json {
        /// Underlying serde_json error.
        source: serde_json::Error
    },
    /// Returned when an issue record lacks the requested key.
    #[error("issue record has no key '{key}'")]
    MissingKey {
        /// Key that was looked up.
        key: String
    },
    /// Returned when a date-range bound is not a valid `YYYY-MM-DD` date.
    #[error("invalid {bound} date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// Which bound failed, `start` or `end`.
        bound: &'static str,
        /// Raw value supplied by the caller.
        value: String
    },
    /// Returned when input violates an invariant.
    #[error("validation failed: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Failures while invoking `git` to read commit messages.
    #[error("git error: {message}")]
    Git {
        /// Human readable message describing the git failure.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a git error from the provided displayable value.
    pub fn git<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Git {
            message: message.into()
        }
    }

    /// Constructs a missing-key lookup error.
    pub fn missing_key<K>(key: K) -> Self
    where
        K: Into<String>
    {
        Self::MissingKey {
            key: key.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// Intended for CLI contexts; the returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn validation_constructor_populates_message() {
        let error = Error::validation("something went wrong");
        match error {
            Error::Validation {
                ref message
            } => {
                assert_eq!(message, "something went wrong");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::validation("display me");
        assert_eq!(error.to_string(), error.to_display_string());
    }

    #[test]
    fn io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/table.json");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::io_error(path, io_error);

        match error {
            Error::Io {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}")
        }
    }

    #[test]
    fn serde_yaml_conversion_maps_to_parse_variant() {
        let error = serde_yaml::from_str::<usize>("not-a-number").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Parse { .. }));
    }

    #[test]
    fn serde_json_conversion_maps_to_json_variant() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let mapped: Error = invalid.into();
        assert!(matches!(mapped, Error::Json { .. }));
    }

    #[test]
    fn missing_key_names_the_key() {
        let error = Error::missing_key("time_spent_seconds");
        assert_eq!(error.to_string(), "issue record has no key 'time_spent_seconds'");
    }

    #[test]
    fn invalid_date_names_the_bound() {
        let error = Error::InvalidDate {
            bound: "start",
            value: "2023-13-01".to_owned()
        };
        assert_eq!(error.to_string(), "invalid start date '2023-13-01': expected YYYY-MM-DD");
    }
}
