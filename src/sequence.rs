// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic sequence helpers used by the mining pipeline.

use std::{collections::HashSet, hash::Hash};

/// Concatenates nested sequences into one, preserving the order of both the
/// outer and inner sequences.
///
/// # Examples
///
/// ```
/// use issue_miner::flatten;
///
/// let flat = flatten(vec![vec![1, 2], vec![3], vec![]],);
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
pub fn flatten<I, T,>(nested: I,) -> Vec<T,>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T,>,
{
    nested.into_iter().flatten().collect()
}

/// Collapses equal elements into one.
///
/// The result is backed by a [`HashSet`], so element order is unspecified
/// and must not be relied upon.
pub fn deduplicate<I, T,>(values: I,) -> Vec<T,>
where
    I: IntoIterator<Item = T,>,
    T: Eq + Hash,
{
    values.into_iter().collect::<HashSet<T,>>().into_iter().collect()
}
