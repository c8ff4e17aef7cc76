use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::preferences::{keys, PreferenceStore};
use crate::view::page::{ids, Page, CONTENT_SECTION_CLASS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(AppError::Validation(format!(
                "theme must be 'light' or 'dark' (got '{other}')"
            ))),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Switches the root class pair and the toggle checkbox.
pub fn apply_theme(page: &mut Page, mode: ThemePreference) {
    match mode {
        ThemePreference::Dark => {
            page.edit(ids::BODY, |el| {
                el.add_classes(&["dark-mode", "bg-gray-900"]);
                el.remove_classes(&["bg-gray-50"]);
            });
            page.edit_by_class(CONTENT_SECTION_CLASS, |el| {
                el.remove_classes(&["bg-white", "bg-gray-50"]);
            });
        }
        ThemePreference::Light => {
            page.edit(ids::BODY, |el| {
                el.remove_classes(&["dark-mode", "bg-gray-900"]);
                el.add_classes(&["bg-gray-50"]);
            });
        }
    }
    page.edit(ids::THEME_TOGGLE, |el| {
        el.checked = Some(mode == ThemePreference::Dark)
    });
    debug!(theme = %mode, "theme applied");
}

/// Reads the stored theme. Anything other than a stored `dark` is light.
pub async fn load_theme(store: &dyn PreferenceStore) -> Result<ThemePreference, AppError> {
    let stored = store.get(keys::THEME).await?;
    Ok(match stored.as_deref() {
        Some("dark") => ThemePreference::Dark,
        Some("light") | None => ThemePreference::Light,
        Some(other) => {
            warn!("ignoring unrecognised stored theme '{other}'");
            ThemePreference::Light
        }
    })
}

/// Persists `mode`, then applies it to the page. A failed write leaves the
/// page untouched.
pub async fn set_theme(
    store: &dyn PreferenceStore,
    page: &mut Page,
    mode: ThemePreference,
) -> Result<(), AppError> {
    store.set(keys::THEME, mode.as_str()).await?;
    apply_theme(page, mode);
    Ok(())
}
