//! ActionStore - アクションの登録と解決
//!
//! # 設計
//! - 初期化時に構築（mutable）し、実行時は `Arc<ActionStore>` で共有（immutable）。
//!   登録と解決が時間的に重ならないので、ロックは持たない。
//! - 同じコードの再登録は上書き（後勝ち）。厳格にしたい場合は `try_register`
//!   または `DuplicatePolicy::Reject` を使う。
//! - 未登録コードの解決は必ず `LookupError` になる。代替やデフォルトの
//!   Action は存在しない。

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::action::Action;
use crate::domain::{ActionCode, LookupError, RegistryError};
use crate::policy::DuplicatePolicy;

/// Registry of actions (code -> action).
#[derive(Default)]
pub struct ActionStore {
    actions: HashMap<ActionCode, Arc<dyn Action>>,
}

impl ActionStore {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register an action under its own code.
    ///
    /// An existing entry for the same code is replaced.
    pub fn register(&mut self, action: Arc<dyn Action>) {
        let code = action.code().clone();
        match self.actions.insert(code.clone(), action) {
            Some(_) => debug!(%code, "replaced registered action"),
            None => debug!(%code, "registered action"),
        }
    }

    /// Register an action, failing if its code is already taken.
    ///
    /// On failure the existing entry is left untouched.
    pub fn try_register(&mut self, action: Arc<dyn Action>) -> Result<(), RegistryError> {
        let code = action.code();
        if self.actions.contains_key(code) {
            return Err(RegistryError::DuplicateCode(code.clone()));
        }
        self.register(action);
        Ok(())
    }

    pub fn register_with(
        &mut self,
        action: Arc<dyn Action>,
        policy: DuplicatePolicy,
    ) -> Result<(), RegistryError> {
        match policy {
            DuplicatePolicy::Overwrite => {
                self.register(action);
                Ok(())
            }
            DuplicatePolicy::Reject => self.try_register(action),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.actions.contains_key(code)
    }

    /// Resolve `code` to the action registered under it.
    pub fn get_action(&self, code: &str) -> Result<Arc<dyn Action>, LookupError> {
        match self.actions.get(code) {
            Some(action) => Ok(Arc::clone(action)),
            None => {
                debug!(code, "lookup of unregistered action code");
                Err(LookupError::unknown(code))
            }
        }
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<&ActionCode> {
        let mut codes: Vec<&ActionCode> = self.actions.keys().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Debug for ActionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionStore")
            .field("codes", &self.codes())
            .finish()
    }
}
