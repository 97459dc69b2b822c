//! Action trait - コードで識別される実行単位
//!
//! ActionStore はこの trait だけに依存し、具体的な Action の型は知らない。

use std::fmt;

use crate::domain::{ActionArgs, ActionCode, ActionError};

/// A named, invocable unit of behavior.
///
/// `code()` must return the same value for the whole lifetime of the object.
/// `invoke` reports success with `Ok(())` only; anything an action wants to
/// hand back goes through state the action owns or shares with its caller.
///
/// # Example
/// ```ignore
/// struct Ping { code: ActionCode }
///
/// impl Action for Ping {
///     fn code(&self) -> &ActionCode {
///         &self.code
///     }
///
///     fn invoke(&self, _args: &ActionArgs) -> Result<(), ActionError> {
///         println!("pong");
///         Ok(())
///     }
/// }
/// ```
pub trait Action: Send + Sync {
    fn code(&self) -> &ActionCode;

    fn invoke(&self, args: &ActionArgs) -> Result<(), ActionError>;
}

impl fmt::Debug for dyn Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("code", self.code()).finish()
    }
}

/// An action backed by a closure.
pub struct FnAction<F> {
    code: ActionCode,
    f: F,
}

impl<F> FnAction<F>
where
    F: Fn(&ActionArgs) -> Result<(), ActionError> + Send + Sync,
{
    pub fn new(code: ActionCode, f: F) -> Self {
        Self { code, f }
    }
}

impl<F> Action for FnAction<F>
where
    F: Fn(&ActionArgs) -> Result<(), ActionError> + Send + Sync,
{
    fn code(&self) -> &ActionCode {
        &self.code
    }

    fn invoke(&self, args: &ActionArgs) -> Result<(), ActionError> {
        (self.f)(args)
    }
}

impl<F> fmt::Debug for FnAction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAction").field("code", &self.code).finish()
    }
}
