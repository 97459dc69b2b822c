use serde::{Deserialize, Serialize};

/// What a store does when a code is registered twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The most recent registration replaces the previous one.
    #[default]
    Overwrite,

    /// A second registration fails and the first one stays.
    Reject,
}
