//! Runtime configuration captured once at startup.
//!
//! The root component reads the browser location into a [`PageConfig`] and hands
//! it down as a property, so pages never touch `window` themselves and can be
//! driven from tests with any URL.

use common::model::character::CharacterId;

use crate::route::{self, CHARACTER_PATH};

/// Prefix of the characters API used when no build-time override is given.
pub const DEFAULT_API_ROOT: &str = "/api/v1/characters";

/// Where the character API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Collection URL, without trailing slash. Individual characters live at
    /// `{root}/{id}`.
    pub root: String,
}

impl ApiConfig {
    /// Uses `CHARGEN_API_ROOT` from the build environment when set.
    pub fn from_build_env() -> Self {
        let root = option_env!("CHARGEN_API_ROOT").unwrap_or(DEFAULT_API_ROOT);
        Self {
            root: root.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> String {
        self.root.clone()
    }

    pub fn character_url(&self, id: &CharacterId) -> String {
        format!("{}/{}", self.root, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_API_ROOT.to_string(),
        }
    }
}

/// The page location the application was opened at.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Scheme, host and port, e.g. `https://example.org`.
    pub origin: String,
    /// Path component, e.g. `/character/`.
    pub path: String,
}

impl PageConfig {
    pub fn new(origin: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            path: path.into(),
        }
    }

    /// Reads the current browser location. Returns `None` outside a browser
    /// window (workers, tests).
    pub fn from_window() -> Option<Self> {
        let location = web_sys::window()?.location();
        let origin = location.origin().ok()?;
        let path = location.pathname().ok()?;
        Some(Self { origin, path })
    }

    /// Current page URL with exactly one trailing slash. Share links for newly
    /// saved characters are built by appending the id to it.
    pub fn base_url(&self) -> String {
        format!("{}{}/", self.origin, self.path.trim_end_matches('/'))
    }

    /// Current page URL without a trailing slash.
    pub fn current_url(&self) -> String {
        format!("{}{}", self.origin, self.path.trim_end_matches('/'))
    }

    pub fn share_url(&self, id: &CharacterId) -> String {
        format!("{}{}", self.base_url(), id)
    }

    /// Path of the landing page under the deployment prefix.
    pub fn home_path(&self) -> String {
        format!("{}/", route::app_prefix(&self.path))
    }

    /// Path of the character page that generates a fresh character.
    pub fn new_character_path(&self) -> String {
        format!("{}{CHARACTER_PATH}", route::app_prefix(&self.path))
    }

    /// Path of the character page that loads `id`.
    pub fn character_path(&self, id: &CharacterId) -> String {
        format!("{}{id}", self.new_character_path())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new("", "/")
    }
}
