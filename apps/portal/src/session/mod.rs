pub mod handlers;
pub mod inactivity;

use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::preferences::{get_json, keys, set_json, PreferenceStore};
use crate::provider::UserAccount;

pub use inactivity::{InactivityHandle, InactivityMonitor};

/// Session flags kept in the preference store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn PreferenceStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub async fn set_user(&self, user: &UserAccount) -> Result<(), AppError> {
        set_json(self.store.as_ref(), keys::CURRENT_USER, user).await?;
        set_json(self.store.as_ref(), keys::IS_LOGGED_IN, &true).await?;
        self.store.set(keys::USER_ROLE, &user.role).await?;
        info!(user_id = user.id, role = %user.role, "session started");
        Ok(())
    }

    pub async fn user(&self) -> Result<Option<UserAccount>, AppError> {
        get_json(self.store.as_ref(), keys::CURRENT_USER).await
    }

    pub async fn is_logged_in(&self) -> Result<bool, AppError> {
        Ok(get_json::<bool>(self.store.as_ref(), keys::IS_LOGGED_IN)
            .await?
            .unwrap_or(false))
    }

    /// Drops the session keys. The theme survives a logout.
    pub async fn logout(&self) -> Result<(), AppError> {
        for key in [keys::CURRENT_USER, keys::USER_ROLE, keys::IS_LOGGED_IN] {
            self.store.remove(key).await?;
        }
        info!("session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferenceStore;

    fn user() -> UserAccount {
        UserAccount {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "applicant".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let prefs: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::default());
        let session = SessionStore::new(prefs.clone());
        assert!(!session.is_logged_in().await.unwrap());

        session.set_user(&user()).await.unwrap();
        assert!(session.is_logged_in().await.unwrap());
        assert_eq!(session.user().await.unwrap(), Some(user()));
        assert_eq!(
            prefs.get(keys::IS_LOGGED_IN).await.unwrap().as_deref(),
            Some("true")
        );

        session.logout().await.unwrap();
        assert!(!session.is_logged_in().await.unwrap());
        assert_eq!(session.user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_keeps_theme() {
        let prefs: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::default());
        prefs.set(keys::THEME, "dark").await.unwrap();
        let session = SessionStore::new(prefs.clone());
        session.set_user(&user()).await.unwrap();
        session.logout().await.unwrap();
        assert_eq!(prefs.get(keys::THEME).await.unwrap().as_deref(), Some("dark"));
    }
}
