use std::sync::Arc;

use crate::{
    application::{
        dto::SiteSetupDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::site::{NewMenuLink, NewSiteSetup, SiteSetupRepository},
};

pub struct MenuLinkInput {
    pub text: String,
    pub url: String,
    pub new_tab: bool,
}

pub struct CreateSiteSetupCommand {
    pub title: String,
    pub description: String,
    pub favicon: Option<String>,
    pub menu_links: Vec<MenuLinkInput>,
}

pub struct SiteCommandService {
    repo: Arc<dyn SiteSetupRepository>,
}

impl SiteCommandService {
    pub fn new(repo: Arc<dyn SiteSetupRepository>) -> Self {
        Self { repo }
    }

    /// A site has a single setup; once one exists further creation conflicts.
    pub async fn create_site_setup(
        &self,
        command: CreateSiteSetupCommand,
    ) -> ApplicationResult<SiteSetupDto> {
        let menu_links = command
            .menu_links
            .into_iter()
            .map(|link| NewMenuLink::new(link.text, link.url, link.new_tab))
            .collect::<Result<Vec<_>, _>>()?;
        let setup = NewSiteSetup::new(command.title, command.description, menu_links)?
            .with_favicon(command.favicon)?;

        if self.repo.exists().await? {
            return Err(ApplicationError::conflict("site setup already exists"));
        }

        let created = self.repo.insert(setup).await?;
        tracing::info!(site_setup_id = created.id.0, "site setup created");
        Ok(created.into())
    }
}
