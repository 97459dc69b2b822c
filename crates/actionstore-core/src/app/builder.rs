//! ActionStoreBuilder - 起動時の構築と検証
//!
//! # Fail-fast 設計
//! - expect_codes() で期待されるコードを登録
//! - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
//! - 不足があれば BuildError を返す

use std::sync::Arc;

use tracing::info;

use super::config::RegistryConfig;
use crate::action::Action;
use crate::domain::RegistryError;
use crate::policy::DuplicatePolicy;
use crate::store::ActionStore;
use crate::typed::{Typed, TypedAction};

/// ```ignore
/// let store = ActionStoreBuilder::new()
///     .register_typed(StartGame::new(table.clone()))?
///     .expect_codes(&["game.start"])
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ActionStoreBuilder {
    store: ActionStore,
    policy: DuplicatePolicy,
    expected_codes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing action codes: {0:?}. These codes were expected but not registered.")]
    MissingCodes(Vec<String>),
}

impl ActionStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            store: ActionStore::new(),
            policy: config.duplicate_policy,
            expected_codes: config.expected_codes.clone(),
        }
    }

    /// Policy for later `register` calls.
    pub fn policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn register(mut self, action: Arc<dyn Action>) -> Result<Self, RegistryError> {
        self.store.register_with(action, self.policy)?;
        Ok(self)
    }

    pub fn register_typed<A: TypedAction>(self, action: A) -> Result<Self, RegistryError> {
        let action = Typed::new(action)?;
        self.register(Arc::new(action))
    }

    /// Adds to the set of codes `build` requires.
    pub fn expect_codes(mut self, codes: &[&str]) -> Self {
        self.expected_codes
            .extend(codes.iter().map(|code| code.to_string()));
        self
    }

    pub fn build(self) -> Result<ActionStore, BuildError> {
        let mut missing: Vec<String> = self
            .expected_codes
            .into_iter()
            .filter(|code| !self.store.contains(code))
            .collect();
        if !missing.is_empty() {
            missing.sort();
            missing.dedup();
            return Err(BuildError::MissingCodes(missing));
        }

        info!(actions = self.store.len(), "action store built");
        Ok(self.store)
    }
}
