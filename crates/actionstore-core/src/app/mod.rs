//! App - 起動時の構築と実行時の解決
//!
//! - builder: 起動時に ActionStore を組み立て、期待するコードの登録漏れを検出
//! - config: レジストリ設定（JSON）の読み込み
//! - dispatch: コードを解決して Action を実行

pub mod builder;
pub mod config;
pub mod dispatch;

pub use self::builder::{ActionStoreBuilder, BuildError};
pub use self::config::{ConfigError, RegistryConfig, load_config};
pub use self::dispatch::Dispatcher;
