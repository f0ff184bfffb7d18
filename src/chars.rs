/// Characters that separate words outside of quotes.
pub const SEPARATORS: [char; 3] = [' ', '\n', '\t'];

pub const SINGLE_QUOTE: char = '\'';
pub const DOUBLE_QUOTE: char = '"';
pub const ESCAPE: char = '\\';

/// The only characters a backslash escapes inside double quotes.
pub const DOUBLE_ESCAPABLE: [char; 5] = ['$', '`', '"', '\n', '\\'];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

pub fn is_double_escapable(c: char) -> bool {
    DOUBLE_ESCAPABLE.contains(&c)
}

/// Characters that end an unquoted run: separators, quotes and the escape.
pub fn is_raw_special(c: char) -> bool {
    matches!(c, SINGLE_QUOTE | DOUBLE_QUOTE | ESCAPE) || is_separator(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert!(is_separator(' '));
        assert!(is_separator('\t'));
        assert!(is_separator('\n'));
        assert!(!is_separator('\r'));
        // non-breaking space is not a separator for sh
        assert!(!is_separator('\u{a0}'));
    }

    #[test]
    fn test_double_escapable() {
        for c in ['$', '`', '"', '\n', '\\'] {
            assert!(is_double_escapable(c));
        }
        for c in ['d', '\'', ' ', 'n', 'é'] {
            assert!(!is_double_escapable(c));
        }
    }

    #[test]
    fn test_raw_special() {
        assert!(is_raw_special('\''));
        assert!(is_raw_special('"'));
        assert!(is_raw_special('\\'));
        assert!(is_raw_special(' '));
        assert!(!is_raw_special('$'));
        assert!(!is_raw_special('*'));
    }
}
