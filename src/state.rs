//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::dispatch::Dispatcher;

/// State shared across requests.
///
/// Holds only the dispatcher; the store pool and upstream HTTP client live
/// behind the handlers registered in it.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}
