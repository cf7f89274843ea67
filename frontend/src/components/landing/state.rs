use crate::config::PageConfig;

#[cfg(feature = "title-glitch")]
use super::glitch::GlitchCycle;

pub const TITLE: &str = "Delta Green Character Generator";

/// The id-entry dialog on the landing page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandingDialog {
    pub input: String,
    /// Set when the user tried to go to an id that is not 24 characters.
    pub invalid_id: bool,
}

pub struct LandingPage {
    pub page: PageConfig,
    pub title: &'static str,
    /// `Some` while the load dialog is open.
    pub dialog: Option<LandingDialog>,
    #[cfg(feature = "title-glitch")]
    pub glitch: GlitchCycle,
    pub initialized: bool,
}

impl LandingPage {
    pub fn new(page: PageConfig) -> Self {
        Self {
            page,
            title: TITLE,
            dialog: None,
            #[cfg(feature = "title-glitch")]
            glitch: GlitchCycle::new(),
            initialized: false,
        }
    }
}
