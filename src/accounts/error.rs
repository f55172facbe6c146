//! Errors raised while resolving account names.

/// Caller input errors from the named-account resolver.
///
/// None of these are transient: the invoking command aborts and the message
/// is shown to the operator verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("bad account name: [{0}] see general help")]
    UnknownAccountName(String),

    #[error("account [{0}] is thread-scoped but no thread id is available here")]
    MissingThreadContext(String),

    #[error("account [{0}] does not carry a valid 32-byte private key")]
    InvalidKeyFormat(String),

    #[error("cannot derive fixed-role account at index {index}: {reason}")]
    Derivation { index: u32, reason: String },
}
