use thiserror::Error;

/// Failures when parsing names injected from the command line or the
/// settings store. The drawing core itself never sees these: callers
/// validate and fall back to defaults before injection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNameError {
    #[error("unknown tool name {0:?}")]
    UnknownTool(String),
    #[error("unknown scroll mode name {0:?}")]
    UnknownScrollMode(String),
}
