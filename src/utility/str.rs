// トークン境界とする空白は ASCII のみ（全角空白は含めない）
pub fn is_token_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

// text[start..end] の前後の空白を除いた範囲
pub fn trim_token_space(text: &str, start: usize, end: usize) -> (usize, usize) {
    let span = &text[start..end];
    let leading = span.len() - span.trim_start_matches(is_token_space).len();
    let trimmed = span.trim_matches(is_token_space);
    (start + leading, start + leading + trimmed.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_token_space() {
        assert!(is_token_space(' '));
        assert!(is_token_space('\t'));
        assert!(is_token_space('\x0B'));
        assert!(!is_token_space('\u{3000}'));
        assert!(!is_token_space('一'));
    }

    #[test]
    fn test_trim_token_space() {
        let text = "a  一二三 \t b";
        assert_eq!(trim_token_space(text, 1, text.len() - 1), (3, 12));
        assert_eq!(&text[3..12], "一二三");
        assert_eq!(trim_token_space("五", 0, 3), (0, 3));
    }
}
