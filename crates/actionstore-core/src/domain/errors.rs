//! Errors - エラー型と分類
//!
//! - 解決の失敗（LookupError）と、実行された Action 自身の失敗（ActionError）は
//!   常に区別できること。
//! - ActionStore が返すのは LookupError / RegistryError のみ。ActionError を
//!   変換・握りつぶしすることはない。

use std::error::Error as StdError;

use thiserror::Error;

use super::code::ActionCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("action code must not be empty")]
    Empty,
}

/// Resolution failure: no action is registered under the requested code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown action code: {code}")]
    UnknownCode { code: String },
}

impl LookupError {
    pub fn unknown(code: impl Into<String>) -> Self {
        Self::UnknownCode { code: code.into() }
    }

    /// The code that failed to resolve.
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownCode { code } => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("action code '{0}' is already registered")]
    DuplicateCode(ActionCode),

    #[error(transparent)]
    InvalidCode(#[from] CodeError),
}

/// Failure raised by a concrete action while it runs.
///
/// Each action decides which of these it reports; the registry never produces
/// one.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("missing argument at position {index}")]
    MissingArgument { index: usize },

    #[error("invalid argument at position {index}: {reason}")]
    InvalidArgument { index: usize, reason: String },

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("rejected: {0}")]
    Rejected(String),

    #[error("{0}")]
    Other(#[source] Box<dyn StdError + Send + Sync>),
}

impl ActionError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    pub fn other(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}

/// Result of resolving and invoking one code.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The code is unknown to the store (bad or unsupported command).
    #[error(transparent)]
    UnknownAction(#[from] LookupError),

    /// The action ran and reported a failure of its own.
    #[error("action '{code}' failed: {source}")]
    ActionFailed {
        code: String,
        #[source]
        source: ActionError,
    },
}

impl DispatchError {
    pub fn is_unknown_action(&self) -> bool {
        matches!(self, Self::UnknownAction(_))
    }

    pub fn code(&self) -> &str {
        match self {
            Self::UnknownAction(err) => err.code(),
            Self::ActionFailed { code, .. } => code,
        }
    }
}
