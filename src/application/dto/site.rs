use crate::domain::site::{MenuLink, SiteSetup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuLinkDto {
    pub text: String,
    pub url: String,
    pub new_tab: bool,
}

impl From<MenuLink> for MenuLinkDto {
    fn from(link: MenuLink) -> Self {
        Self {
            text: link.text,
            url: link.url,
            new_tab: link.new_tab,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteSetupDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub favicon: Option<String>,
    pub menu_links: Vec<MenuLinkDto>,
}

impl From<SiteSetup> for SiteSetupDto {
    fn from(setup: SiteSetup) -> Self {
        Self {
            id: setup.id.into(),
            title: setup.title,
            description: setup.description,
            favicon: setup.favicon,
            menu_links: setup.menu_links.into_iter().map(Into::into).collect(),
        }
    }
}
