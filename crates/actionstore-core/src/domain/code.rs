//! ActionCode - アクションを識別するコード文字列
//!
//! サーバー⇔クライアント間はこのコードを通じてやり取りを行う。
//! 空文字列のみを拒否し、命名規約（`game.start` のようなドット区切りなど）は
//! 利用側に任せる。

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::CodeError;

/// A non-empty action code.
///
/// The value never changes after construction and is the identity of an
/// action inside a store. `Borrow<str>` lets the store be queried with a plain
/// `&str` taken straight off an inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionCode(String);

impl ActionCode {
    pub fn new(value: impl Into<String>) -> Result<Self, CodeError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ActionCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ActionCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ActionCode {
    type Error = CodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActionCode> for String {
    fn from(code: ActionCode) -> Self {
        code.0
    }
}
