// Character-class checks for raw input lines. ASCII only: anything outside
// the ASCII range fails has_only_allowed_characters before the per-side
// checks ever run.

pub fn has_whitespace(s: &str) -> bool {
    // Vertical tab counts as whitespace too; is_ascii_whitespace omits it.
    s.chars().any(|c| c.is_ascii_whitespace() || c == '\x0B')
}

pub fn has_only_allowed_characters(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '*' | '/' | '%'))
}

pub fn is_all_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
