// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Extraction of issue identifiers referenced from commit messages.
//!
//! A commit references an issue through a whitespace-delimited token made of
//! the issue prefix followed by the identifier, for example `ISSUE_42`. The
//! pipeline tokenizes every message, deduplicates the tokens, removes stray
//! quotes, keeps prefixed tokens and reduces each one to its digits.

use tracing::debug;

use crate::{
    config::MiningConfig,
    sequence::{deduplicate, flatten},
    text::{remove_characters, strip_non_numeric},
};

/// Extracts issue identifiers using the default `ISSUE_` convention.
///
/// Each distinct identifier appears once in the output. The order is
/// unspecified because deduplication is set based.
///
/// # Examples
///
/// ```
/// use issue_miner::extract_issue_ids;
///
/// let ids = extract_issue_ids(&["fix ISSUE_42 bug", "ISSUE_42 dup", "no ref here"],);
/// assert_eq!(ids, vec!["42".to_owned()]);
/// ```
pub fn extract_issue_ids<S,>(messages: &[S],) -> Vec<String,>
where
    S: AsRef<str,>,
{
    extract_issue_ids_with(messages, &MiningConfig::default(),)
}

/// Extracts issue identifiers using the prefix and quote set from `config`.
///
/// Candidates left empty after non-digit stripping (a bare `ISSUE_` token)
/// are discarded, and candidates that collapse to the same digits are
/// reported once.
pub fn extract_issue_ids_with<S,>(messages: &[S], config: &MiningConfig,) -> Vec<String,>
where
    S: AsRef<str,>,
{
    let tokens = deduplicate(flatten(
        messages.iter().map(|message| message.as_ref().split_whitespace(),),
    ),);
    let tokens = remove_characters(&tokens, &config.quote_characters,);

    let candidates: Vec<&str,> = tokens
        .iter()
        .filter_map(|token| token.strip_prefix(config.issue_prefix.as_str(),),)
        .collect();

    let ids = deduplicate(
        strip_non_numeric(&candidates,).into_iter().filter(|candidate| !candidate.is_empty(),),
    );

    debug!("Extracted {} issue ids from {} commit messages", ids.len(), messages.len());
    ids
}

#[cfg(test)]
mod tests
{
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn as_set(ids: Vec<String,>,) -> HashSet<String,>
    {
        ids.into_iter().collect()
    }

    #[test]
    fn collapses_repeated_references()
    {
        let ids = extract_issue_ids(&["fix ISSUE_42 bug", "ISSUE_42 dup", "no ref here"],);
        assert_eq!(as_set(ids), HashSet::from(["42".to_owned()]));
    }

    #[test]
    fn empty_input_yields_nothing()
    {
        let messages: [&str; 0] = [];
        assert!(extract_issue_ids(&messages,).is_empty());
    }

    #[test]
    fn empty_and_unrelated_messages_contribute_nothing()
    {
        assert!(extract_issue_ids(&["", "   ", "refactor parser"],).is_empty());
    }

    #[test]
    fn collects_multiple_ids_across_messages()
    {
        let ids = extract_issue_ids(&[
            "ISSUE_1 ISSUE_2 initial work",
            "follow-up for ISSUE_3\nand ISSUE_1",
        ],);
        assert_eq!(
            as_set(ids),
            HashSet::from(["1".to_owned(), "2".to_owned(), "3".to_owned()])
        );
    }

    #[test]
    fn strips_quotes_left_by_stringified_messages()
    {
        let ids = extract_issue_ids(&["'ISSUE_7' 'merge'", "\"ISSUE_8\""],);
        assert_eq!(as_set(ids), HashSet::from(["7".to_owned(), "8".to_owned()]));
    }

    #[test]
    fn prefix_must_start_the_token()
    {
        assert!(extract_issue_ids(&["see-ISSUE_9", "issue_10"],).is_empty());
    }

    #[test]
    fn trailing_punctuation_collapses_to_same_id()
    {
        let ids = extract_issue_ids(&["closes ISSUE_12,", "ISSUE_12."],);
        assert_eq!(ids, vec!["12".to_owned()]);
    }

    #[test]
    fn bare_prefix_is_discarded()
    {
        assert!(extract_issue_ids(&["ISSUE_ ISSUE_abc"],).is_empty());
    }

    #[test]
    fn honours_configured_prefix()
    {
        let config = MiningConfig {
            issue_prefix: "GH-".to_owned(), ..MiningConfig::default()
        };
        let ids = extract_issue_ids_with(&["GH-5 and ISSUE_6"], &config,);
        assert_eq!(ids, vec!["5".to_owned()]);
    }

    proptest! {
        #[test]
        fn every_output_is_a_non_empty_digit_string(messages in proptest::collection::vec("[A-Z_0-9 ,']{0,40}", 0..8)) {
            for id in extract_issue_ids(&messages) {
                prop_assert!(!id.is_empty());
                prop_assert!(id.chars().all(|ch| ch.is_ascii_digit()));
            }
        }

        #[test]
        fn finds_every_referenced_number(numbers in proptest::collection::vec(0u32..100_000, 1..8)) {
            let messages: Vec<String> = numbers.iter().map(|number| format!("work on ISSUE_{number}")).collect();
            let expected: HashSet<String> = numbers.iter().map(u32::to_string).collect();
            prop_assert_eq!(as_set(extract_issue_ids(&messages)), expected);
        }
    }
}
