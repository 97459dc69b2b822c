use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::domain::{ActionArgs, ActionMessage, DispatchError};
use crate::store::ActionStore;

/// Dispatcher resolves a code against a store and invokes the action.
///
/// The store is frozen behind an `Arc` once setup is done, so any number of
/// dispatchers (or threads) can read it without locking.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Arc<ActionStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<ActionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ActionStore {
        &self.store
    }

    /// Resolve `code` and invoke the action with `args`.
    ///
    /// An unknown code and a failing action come back as different variants.
    pub fn dispatch(&self, code: &str, args: &ActionArgs) -> Result<(), DispatchError> {
        let span = debug_span!("dispatch", code, argc = args.len());
        let _enter = span.enter();

        let action = self.store.get_action(code)?;
        action
            .invoke(args)
            .map_err(|source| DispatchError::ActionFailed {
                code: code.to_string(),
                source,
            })?;

        debug!("action completed");
        Ok(())
    }

    pub fn dispatch_message(&self, message: &ActionMessage) -> Result<(), DispatchError> {
        self.dispatch(&message.code, &message.args)
    }
}

impl From<ActionStore> for Dispatcher {
    fn from(store: ActionStore) -> Self {
        Self::new(Arc::new(store))
    }
}
