//! ActionArgs - 位置引数のリスト
//!
//! 引数の型・個数は Action ごとに決まる。レジストリはここを一切参照せず、
//! デコードと検証は各 Action が行う。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ActionError;

/// Already-decoded positional arguments for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionArgs(Vec<Value>);

impl ActionArgs {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// Decode the argument at `index`.
    pub fn arg<T: DeserializeOwned>(&self, index: usize) -> Result<T, ActionError> {
        let value = self
            .get(index)
            .ok_or(ActionError::MissingArgument { index })?;
        T::deserialize(value).map_err(|e| ActionError::InvalidArgument {
            index,
            reason: e.to_string(),
        })
    }

    /// Decode the whole list as one value.
    ///
    /// Tuples and tuple structs read from the positional list directly. An
    /// empty list that does not fit `T` as an array is retried as `null`, so
    /// it also decodes as `()`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ActionError> {
        let list = Value::Array(self.0.clone());
        match serde_json::from_value(list) {
            Ok(value) => Ok(value),
            Err(err) if self.is_empty() => T::deserialize(&Value::Null)
                .map_err(|_| ActionError::InvalidArguments(err.to_string())),
            Err(err) => Err(ActionError::InvalidArguments(err.to_string())),
        }
    }
}

impl From<Vec<Value>> for ActionArgs {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for ActionArgs {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
