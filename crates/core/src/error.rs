use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown locale `{0}` (expected `tw` or `default`)")]
    UnknownLocale(String),
    #[error("severity level must be between 1 and 3, got {0}")]
    SeverityOutOfRange(u8),
}
