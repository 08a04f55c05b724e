// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Character-level cleanup applied to commit tokens and issue candidates.

use regex::Regex;

/// Removes every occurrence of each listed character from every string.
///
/// The removal set is compiled into a single character class. Each character
/// is escaped with [`regex::escape`] so pattern metacharacters such as `.`,
/// `]` or `-` are matched literally. The output has the same length and order
/// as the input.
///
/// # Examples
///
/// ```
/// use issue_miner::remove_characters;
///
/// let cleaned = remove_characters(&["a.b,c"], &['.', ','],);
/// assert_eq!(cleaned, vec!["abc".to_owned()]);
/// ```
pub fn remove_characters<S,>(values: &[S], characters: &[char],) -> Vec<String,>
where
    S: AsRef<str,>,
{
    let Some(pattern,) = character_class(characters,) else {
        return values.iter().map(|value| value.as_ref().to_owned(),).collect();
    };

    values.iter().map(|value| pattern.replace_all(value.as_ref(), "",).into_owned(),).collect()
}

/// Removes every character that is not an ASCII decimal digit.
///
/// Strings that already consist solely of digits are returned unchanged.
pub fn strip_non_numeric<S,>(values: &[S],) -> Vec<String,>
where
    S: AsRef<str,>,
{
    values
        .iter()
        .map(|value| value.as_ref().chars().filter(char::is_ascii_digit,).collect(),)
        .collect()
}

fn character_class(characters: &[char],) -> Option<Regex,>
{
    if characters.is_empty() {
        return None;
    }

    let escaped: String = characters
        .iter()
        .map(|character| regex::escape(character.encode_utf8(&mut [0; 4],),),)
        .collect();

    // Every member is escaped, so the class always compiles.
    Regex::new(&format!("[{escaped}]"),).ok()
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{remove_characters, strip_non_numeric};

    #[test]
    fn removes_every_listed_character()
    {
        assert_eq!(remove_characters(&["a.b,c"], &['.', ','],), vec!["abc"]);
    }

    #[test]
    fn removes_all_occurrences_not_just_first()
    {
        assert_eq!(remove_characters(&["'a'b'"], &['\''],), vec!["ab"]);
    }

    #[test]
    fn treats_metacharacters_literally()
    {
        let cleaned = remove_characters(&["a]b^c-d\\e*f", "x.y"], &[']', '^', '-', '\\', '*'],);
        assert_eq!(cleaned, vec!["abcdef", "x.y"]);
    }

    #[test]
    fn empty_removal_set_is_identity()
    {
        assert_eq!(remove_characters(&["keep me"], &[],), vec!["keep me"]);
    }

    #[test]
    fn keeps_input_length()
    {
        let cleaned = remove_characters(&["", "..", "x"], &['.'],);
        assert_eq!(cleaned, vec!["", "", "x"]);
    }

    #[test]
    fn strips_everything_but_digits()
    {
        assert_eq!(strip_non_numeric(&["42,", "a1_b2", "#7)", "none"],), vec!["42", "12", "7", ""]);
    }

    #[test]
    fn strip_non_numeric_drops_non_ascii_digits()
    {
        assert_eq!(strip_non_numeric(&["٣4"],), vec!["4"]);
    }

    proptest! {
        #[test]
        fn strip_non_numeric_is_identity_on_digits(input in "[0-9]{0,32}") {
            prop_assert_eq!(strip_non_numeric(&[input.as_str()]), vec![input.clone()]);
        }

        #[test]
        fn strip_non_numeric_outputs_only_digits(input in ".{0,32}") {
            let stripped = strip_non_numeric(&[input]);
            prop_assert!(stripped[0].chars().all(|ch| ch.is_ascii_digit()));
        }
    }
}
