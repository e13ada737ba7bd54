//! Slug generation

use deunicode::deunicode;

/// Render `text` as a lower-case, hyphenated ASCII slug.
///
/// Non-ASCII characters are transliterated first (`é` becomes `e`), then every
/// run of characters that are not ASCII alphanumeric collapses into a single
/// `-`. Leading and trailing hyphens are dropped, so input made only of
/// punctuation yields an empty string.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(slugify("John Doe"), "john-doe");
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(slugify("  hello,   world!! "), "hello-world");
        assert_eq!(slugify("a--b__c..d"), "a-b-c-d");
        assert_eq!(slugify("user_name.42"), "user-name-42");
    }

    #[test]
    fn diacritics_are_normalized() {
        assert_eq!(slugify("Ünïcödé -- Name!"), "unicode-name");
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn only_punctuation_is_empty() {
        assert_eq!(slugify("___"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn already_slug_is_unchanged() {
        assert_eq!(slugify("john-doe"), "john-doe");
        assert_eq!(slugify(&slugify("Mixed CASE value")), "mixed-case-value");
    }
}
