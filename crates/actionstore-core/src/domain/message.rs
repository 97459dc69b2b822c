//! ActionMessage - 受信したメッセージのデコード済み表現
//!
//! 転送やデシリアライズは外部の責務。ここでは「コード + 位置引数」という
//! 形だけを定義する。

use serde::{Deserialize, Serialize};

use super::args::ActionArgs;

/// One inbound request: the code to resolve and the arguments to pass on.
///
/// The code stays a raw string so that an empty or unknown code still reaches
/// the store and is reported as a lookup failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionMessage {
    pub code: String,

    #[serde(default, skip_serializing_if = "ActionArgs::is_empty")]
    pub args: ActionArgs,
}

impl ActionMessage {
    pub fn new(code: impl Into<String>, args: ActionArgs) -> Self {
        Self {
            code: code.into(),
            args,
        }
    }
}
