//! Small text helpers used when phrasing descriptions

/// Prefix `word` with "a" or "an".
///
/// Only the first character is inspected: words starting with `a`, `e`, `i`
/// or `o` take "an", everything else (including `u`) takes "a". An empty word
/// yields an empty string.
pub fn add_article(word: &str) -> String {
    match word.chars().next() {
        None => String::new(),
        Some('a' | 'e' | 'i' | 'o') => format!("an {}", word),
        Some(_) => format!("a {}", word),
    }
}

/// The type name of `T` with every module path stripped.
///
/// `my_crate::model::Person` becomes `Person`, and
/// `alloc::vec::Vec<my_crate::Id>` becomes `Vec<Id>`.
pub fn short_type_name<T: ?Sized>() -> String {
    strip_paths(std::any::type_name::<T>())
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_article_empty() {
        assert_eq!(add_article(""), "");
    }

    #[test]
    fn test_add_article_vowel() {
        assert_eq!(add_article("attitude"), "an attitude");
        assert_eq!(add_article("ear"), "an ear");
        assert_eq!(add_article("igloo"), "an igloo");
        assert_eq!(add_article("oar"), "an oar");
    }

    #[test]
    fn test_add_article_consonant() {
        assert_eq!(add_article("tower"), "a tower");
        assert_eq!(add_article("sibling"), "a sibling");
        assert_eq!(add_article("rotary dish"), "a rotary dish");
        assert_eq!(add_article("user"), "a user");
    }

    #[test]
    fn test_strip_paths() {
        assert_eq!(strip_paths("my_crate::model::Person"), "Person");
        assert_eq!(strip_paths("alloc::vec::Vec<my_crate::Id>"), "Vec<Id>");
        assert_eq!(
            strip_paths("core::result::Result<i32, alloc::string::String>"),
            "Result<i32, String>"
        );
        assert_eq!(strip_paths("&str"), "&str");
    }

    #[test]
    fn test_short_type_name() {
        struct Local;
        assert_eq!(short_type_name::<Local>(), "Local");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
    }
}
