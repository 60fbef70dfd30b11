use crate::domain::errors::{DomainError, DomainResult};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiteSetupId(pub i64);

impl From<SiteSetupId> for i64 {
    fn from(value: SiteSetupId) -> Self {
        value.0
    }
}

/// Site-wide chrome: title, description, favicon and the navigation menu.
#[derive(Debug, Clone)]
pub struct SiteSetup {
    pub id: SiteSetupId,
    pub title: String,
    pub description: String,
    /// Stored path of a PNG image.
    pub favicon: Option<String>,
    /// In insertion order.
    pub menu_links: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub text: String,
    pub url: String,
    pub new_tab: bool,
}

#[derive(Debug, Clone)]
pub struct NewMenuLink {
    pub text: String,
    pub url: String,
    pub new_tab: bool,
}

impl NewMenuLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>, new_tab: bool) -> DomainResult<Self> {
        let text = text.into();
        let url = url.into();
        if text.trim().is_empty() || text.chars().count() > 50 {
            return Err(DomainError::Validation(
                "menu link text must be 1-50 characters".into(),
            ));
        }
        if url.trim().is_empty() || url.chars().count() > 2048 {
            return Err(DomainError::Validation(
                "menu link url must be 1-2048 characters".into(),
            ));
        }
        Ok(Self { text, url, new_tab })
    }
}

#[derive(Debug, Clone)]
pub struct NewSiteSetup {
    pub title: String,
    pub description: String,
    pub favicon: Option<String>,
    pub menu_links: Vec<NewMenuLink>,
}

impl NewSiteSetup {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        menu_links: Vec<NewMenuLink>,
    ) -> DomainResult<Self> {
        let title = title.into();
        let description = description.into();
        if title.trim().is_empty() || title.chars().count() > 65 {
            return Err(DomainError::Validation(
                "site title must be 1-65 characters".into(),
            ));
        }
        if description.chars().count() > 255 {
            return Err(DomainError::Validation(
                "site description cannot exceed 255 characters".into(),
            ));
        }
        Ok(Self {
            title,
            description,
            favicon: None,
            menu_links,
        })
    }

    /// Blank paths clear the favicon; anything else must name a `.png` file.
    pub fn with_favicon(mut self, favicon: Option<String>) -> DomainResult<Self> {
        let favicon = favicon.filter(|path| !path.trim().is_empty());
        if let Some(path) = &favicon {
            let is_png = Path::new(path)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if !is_png {
                return Err(DomainError::Validation(
                    "favicon must be a PNG image".into(),
                ));
            }
        }
        self.favicon = favicon;
        Ok(self)
    }
}
