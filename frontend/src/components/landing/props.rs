use yew::prelude::*;

use crate::config::PageConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct LandingPageProps {
    /// Location the page was opened at; links keep its deployment prefix.
    #[prop_or_default]
    pub page: PageConfig,
}
