//! String utilities for the domain layer.

/// Keep at most `max_chars` characters of `s`.
///
/// Counts Unicode scalar values, not bytes, so excerpts of model output
/// never split a character.
pub fn head_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_chars_ascii() {
        assert_eq!(head_chars("hello world", 5), "hello");
        assert_eq!(head_chars("hi", 10), "hi");
        assert_eq!(head_chars("", 3), "");
    }

    #[test]
    fn test_head_chars_multibyte() {
        assert_eq!(head_chars("あのね", 2), "あの");
        assert_eq!(head_chars("👋🌍🎉", 1), "👋");
        assert_eq!(head_chars("あのね", 3), "あのね");
    }
}
