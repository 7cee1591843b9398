use bcbites_router::{DEFAULT_REDIRECT_LIMIT, Fallback};
use serde::{Deserialize, Serialize};

use crate::{error::Error, pages::Page};

/// What the site shows for an address that matches no page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Show the home page and leave the address bar as it is.
    #[default]
    ShowHome,
    /// Show nothing below the shell.
    Blank,
    /// Move the address bar to `#/`.
    RedirectHome,
}

impl FallbackPolicy {
    pub fn to_fallback(self) -> Fallback<Page> {
        match self {
            FallbackPolicy::ShowHome => Fallback::View(Page::Home),
            FallbackPolicy::Blank => Fallback::Blank,
            FallbackPolicy::RedirectHome => Fallback::Redirect(Page::Home.route()),
        }
    }
}

/// Site settings. Every field is optional in the JSON form.
///
/// ```rust
/// use bcbites::{FallbackPolicy, SiteConfig};
///
/// let config = SiteConfig::from_json(r#"{ "fallback": "redirect-home" }"#).unwrap();
/// assert_eq!(config.fallback, FallbackPolicy::RedirectHome);
/// assert_eq!(config.mount_id, "root");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    pub fallback: FallbackPolicy,
    /// Navigations allowed from inside change callbacks before a redirect chain is cut off.
    pub redirect_limit: u32,
    /// Id of the element the site is mounted into.
    pub mount_id: String,
    /// Set `document.title` from the page on every mount.
    pub update_title: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::default(),
            redirect_limit: DEFAULT_REDIRECT_LIMIT,
            mount_id: "root".to_string(),
            update_title: true,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn redirect_limit(mut self, limit: u32) -> Self {
        self.redirect_limit = limit;
        self
    }

    pub fn mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    pub fn update_title(mut self, update_title: bool) -> Self {
        self.update_title = update_title;
        self
    }
}
