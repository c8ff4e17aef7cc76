use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::preferences::PreferenceStore;
use crate::provider::DataProvider;
use crate::session::{InactivityHandle, SessionStore};
use crate::view::portal::PortalView;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single portal view. Lock only around state transitions, never
    /// across provider calls.
    pub view: Arc<Mutex<PortalView>>,
    pub preferences: Arc<dyn PreferenceStore>,
    /// Pluggable data provider. Default: MockDataProvider.
    pub provider: Arc<dyn DataProvider>,
    pub session: SessionStore,
    pub inactivity: InactivityHandle,
}
