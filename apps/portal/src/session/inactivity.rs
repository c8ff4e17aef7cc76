//! Inactivity logout.
//!
//! Every tracked activity restarts the countdown. The countdown only runs while
//! a user is logged in. On expiry the user is warned, and after a short grace
//! period the session is ended.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::time::Instant;
use tracing::{error, info};

use crate::session::SessionStore;
use crate::view::portal::{NotificationKind, PortalView};

pub const EXPIRY_MESSAGE: &str = "Session expired due to inactivity";

/// Sender side: call [`InactivityHandle::touch`] on user activity.
#[derive(Clone)]
pub struct InactivityHandle {
    activity: Arc<watch::Sender<()>>,
}

impl InactivityHandle {
    pub fn touch(&self) {
        self.activity.send_replace(());
    }
}

pub struct InactivityMonitor {
    pub timeout: Duration,
    pub grace: Duration,
    pub session: SessionStore,
    pub view: Arc<Mutex<PortalView>>,
}

impl InactivityMonitor {
    /// Starts the monitor task and returns the activity handle.
    pub fn spawn(self) -> InactivityHandle {
        let (tx, rx) = watch::channel(());
        info!(
            timeout_secs = self.timeout.as_secs(),
            "inactivity monitor started"
        );
        tokio::spawn(self.run(rx));
        InactivityHandle {
            activity: Arc::new(tx),
        }
    }

    async fn run(self, mut activity: watch::Receiver<()>) {
        loop {
            if self.armed().await {
                let mut deadline = Instant::now() + self.timeout;
                loop {
                    tokio::select! {
                        changed = activity.changed() => {
                            if changed.is_err() {
                                return;
                            }
                            if !self.armed().await {
                                break;
                            }
                            deadline = Instant::now() + self.timeout;
                        }
                        () = tokio::time::sleep_until(deadline) => {
                            self.expire().await;
                            break;
                        }
                    }
                }
            }
            if activity.changed().await.is_err() {
                return;
            }
        }
    }

    async fn armed(&self) -> bool {
        match self.session.is_logged_in().await {
            Ok(logged_in) => logged_in,
            Err(e) => {
                error!("could not read session state: {e}");
                false
            }
        }
    }

    async fn expire(&self) {
        info!("{EXPIRY_MESSAGE}");
        self.view
            .lock()
            .await
            .notify(EXPIRY_MESSAGE, NotificationKind::Warning);
        tokio::time::sleep(self.grace).await;
        if let Err(e) = self.session.logout().await {
            error!("forced logout failed: {e}");
        }
    }
}
