//! Splitting loosely formatted text into values.
//!
//! Ignored characters are dropped before delimiters are looked at, so
//! `"[1, 2, 3]"` splits on `,` into `"1"`, `"2"`, `"3"`.

use std::collections::BTreeMap;

/// Ignored by default when extracting a list: spaces, newlines, tabs and brackets.
pub const LIST_IGNORED: &str = " \n\t[](){}";

/// Ignored by default when extracting a map. Newlines separate entries.
pub const MAP_IGNORED: &str = " \t[](){}";

/// Removes leading and trailing spaces, and only spaces.
#[must_use]
pub fn trim_spaces(source: &str) -> &str {
    source.trim_matches(' ')
}

/// Splits `input` on `delimiter` after dropping every character in `ignored`.
///
/// Empty values between two delimiters are kept; a trailing empty value is
/// not.
///
/// ```
/// # use textutil::{extract_vector, LIST_IGNORED};
/// assert_eq!(extract_vector("[1, 2, , 4,]", ',', LIST_IGNORED), ["1", "2", "", "4"]);
/// ```
#[must_use]
pub fn extract_vector(input: &str, delimiter: char, ignored: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    for c in input.chars().filter(|c| !ignored.contains(*c)) {
        if c == delimiter {
            values.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        values.push(current);
    }
    values
}

/// Splits `input` into entries on `entry_delimiter`, then each entry into a
/// key and a value at the first `key_delimiter`.
///
/// Entries without a key delimiter map to an empty value, empty entries are
/// skipped, and a repeated key keeps its last value.
///
/// ```
/// # use textutil::{extract_map, MAP_IGNORED};
/// let map = extract_map("width = 640\nheight = 480\n", '=', '\n', MAP_IGNORED);
/// assert_eq!(map["width"], "640");
/// assert_eq!(map["height"], "480");
/// ```
#[must_use]
pub fn extract_map(
    input: &str,
    key_delimiter: char,
    entry_delimiter: char,
    ignored: &str,
) -> BTreeMap<String, String> {
    extract_vector(input, entry_delimiter, ignored)
        .into_iter()
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (key, value) = entry.split_once(key_delimiter).unwrap_or((&entry, ""));
            (key.to_string(), value.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_characters_win_over_delimiter() {
        assert_eq!(extract_vector("a b,c", ' ', ""), ["a", "b,c"]);
        assert_eq!(extract_vector("a b,c", ' ', " "), ["ab,c"]);
    }

    #[test]
    fn test_trim_keeps_other_whitespace() {
        assert_eq!(trim_spaces("  \tx \n  "), "\tx \n");
        assert_eq!(trim_spaces("    "), "");
    }
}
