// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Extraction of values encoded in prefixed issue labels such as
//! `priority:high`.
//!
//! Issue exports store labels either as a list of strings or, for issues
//! without labels, as a scalar or null. [`LabelInput`] captures both shapes so
//! extraction can degrade to an empty value instead of failing.

use serde::{Deserialize, de::IgnoredAny};
use serde_json::Value;

/// Label field of an issue record.
///
/// Deserializes from any JSON shape: arrays become [`LabelInput::Sequence`]
/// keeping their string elements, everything else becomes
/// [`LabelInput::Absent`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
#[serde(from = "RawLabels")]
pub enum LabelInput
{
    /// A list of label strings.
    Sequence(Vec<String,>,),
    /// Any non-list value: a bare string, null, a number or an object.
    Absent,
}

impl LabelInput
{
    /// Label field with no list present.
    pub const fn absent() -> Self
    {
        Self::Absent
    }
}

#[derive(Deserialize,)]
#[serde(untagged)]
enum RawLabels
{
    Sequence(Vec<Value,>,),
    Other(IgnoredAny,),
}

impl From<RawLabels,> for LabelInput
{
    fn from(raw: RawLabels,) -> Self
    {
        match raw {
            RawLabels::Sequence(items,) => Self::Sequence(string_items(&items,),),
            RawLabels::Other(_,) => Self::Absent,
        }
    }
}

fn string_items(items: &[Value],) -> Vec<String,>
{
    items.iter().filter_map(Value::as_str,).map(str::to_owned,).collect()
}

impl From<Vec<String,>,> for LabelInput
{
    fn from(labels: Vec<String,>,) -> Self
    {
        Self::Sequence(labels,)
    }
}

impl From<Option<Vec<String,>,>,> for LabelInput
{
    fn from(labels: Option<Vec<String,>,>,) -> Self
    {
        labels.map_or_else(Self::absent, Self::Sequence,)
    }
}

impl From<&Value,> for LabelInput
{
    /// Arrays become [`LabelInput::Sequence`] keeping only their string
    /// elements; every other value is [`LabelInput::Absent`].
    fn from(value: &Value,) -> Self
    {
        match value {
            Value::Array(items,) => Self::Sequence(string_items(items,),),
            _ => Self::Absent,
        }
    }
}

/// Returns the payload of the first label starting with `prefix`.
///
/// Labels are matched in order and the prefix is anchored at the start of
/// the label. Only that leading occurrence is removed, so later repeats of
/// the prefix stay in the payload. Returns an empty string when `labels` is not a list or when no
/// label matches.
///
/// # Examples
///
/// ```
/// use issue_miner::{LabelInput, extract_label_value};
///
/// let labels = LabelInput::from(vec!["priority:high".to_owned(), "type:bug".to_owned()],);
/// assert_eq!(extract_label_value(&labels, "priority:",), "high");
/// assert_eq!(extract_label_value(&LabelInput::absent(), "priority:",), "");
/// ```
pub fn extract_label_value(labels: &LabelInput, prefix: &str,) -> String
{
    let LabelInput::Sequence(labels,) = labels else {
        return String::new();
    };

    labels
        .iter()
        .find_map(|label| label.strip_prefix(prefix,),)
        .map(str::to_owned,)
        .unwrap_or_default()
}
