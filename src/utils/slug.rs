/// Normalize a human-readable name into a URL-safe token: lowercase ASCII
/// alphanumerics, with every other run of characters collapsed to a single
/// hyphen. Non-ASCII characters are dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(slugify("Fresh Apples"), "fresh-apples");
        assert_eq!(slugify("Electronics"), "electronics");
    }

    #[test]
    fn test_collapses_punctuation_runs() {
        assert_eq!(slugify("TV  &  Audio!!"), "tv-audio");
        assert_eq!(slugify("--Home, Garden--"), "home-garden");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(slugify("iPhone 15 Pro"), "iphone-15-pro");
    }

    #[test]
    fn test_drops_non_ascii() {
        assert_eq!(slugify("Choy çoy"), "choy-oy");
        assert_eq!(slugify("日本語"), "");
    }
}
