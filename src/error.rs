/// Ways a line can fail to split. Each one ends the split; nothing after
/// the failing word is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SplitError {
    #[error("Unterminated single-quoted string")]
    UnterminatedSingleQuote,
    #[error("Unterminated double-quoted string")]
    UnterminatedDoubleQuote,
    #[error("Unterminated backslash-escape")]
    UnterminatedEscape,
}

#[cfg(test)]
mod tests {
    use super::SplitError;

    #[test]
    fn test_messages() {
        assert_eq!(
            SplitError::UnterminatedSingleQuote.to_string(),
            "Unterminated single-quoted string"
        );
        assert_eq!(
            SplitError::UnterminatedDoubleQuote.to_string(),
            "Unterminated double-quoted string"
        );
        assert_eq!(
            SplitError::UnterminatedEscape.to_string(),
            "Unterminated backslash-escape"
        );
    }

    #[test]
    fn test_into_anyhow() {
        let err: anyhow::Error = SplitError::UnterminatedEscape.into();
        assert_eq!(
            err.downcast_ref::<SplitError>(),
            Some(&SplitError::UnterminatedEscape)
        );
    }
}
