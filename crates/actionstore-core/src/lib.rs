//! actionstore-core
//!
//! アクションコード（例: `game.start`, `game.take-card`）と、それを処理する
//! Action を対応付けるレジストリ。
//!
//! # モジュール構成
//! - **domain**: ActionCode, ActionArgs, ActionMessage, エラー型
//! - **action**: Action trait（object-safe）と FnAction
//! - **typed**: 型付き引数を受け取る TypedAction と、その Action へのアダプタ
//! - **store**: ActionStore（登録・存在確認・解決）
//! - **policy**: 重複登録時のポリシー
//! - **app**: 起動時の構築（builder）、設定（config）、解決して実行する dispatcher

pub mod action;
pub mod app;
pub mod domain;
pub mod policy;
pub mod store;
pub mod typed;

pub use self::action::{Action, FnAction};
pub use self::app::{ActionStoreBuilder, BuildError, ConfigError, Dispatcher, RegistryConfig, load_config};
pub use self::domain::{
    ActionArgs, ActionCode, ActionError, ActionMessage, CodeError, DispatchError, LookupError,
    RegistryError,
};
pub use self::policy::DuplicatePolicy;
pub use self::store::ActionStore;
pub use self::typed::{Typed, TypedAction};
