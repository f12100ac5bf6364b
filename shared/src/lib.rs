pub mod dispatch;
pub mod dynamo;
pub mod request;
pub mod response;
pub mod store;
pub mod types;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

use crate::store::UserStore;
use std::sync::Arc;

/// Shared application state: the injected store handle, built once at
/// process start and shared across invocations.
pub struct AppState {
    pub store: Box<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static) -> Arc<Self> {
        Arc::new(Self {
            store: Box::new(store),
        })
    }
}
