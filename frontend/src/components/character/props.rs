//! Properties handed to the character page by the root component.

use yew::prelude::*;

use crate::config::{ApiConfig, PageConfig};

#[derive(Properties, PartialEq, Clone)]
pub struct CharacterPageProps {
    /// Location the page was opened at. Drives both the initial route
    /// (generate or load) and the share links built after saving.
    pub page: PageConfig,

    /// Where the characters API is reachable.
    #[prop_or_default]
    pub api: ApiConfig,
}
