use super::ContentCommandService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::{
        page::{NewPage, PageId, PageUpdate},
        post::{PostContent, PostTitle},
        slug::Slug,
    },
};

pub struct CreatePageCommand {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub is_published: bool,
}

pub struct UpdatePageCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_published: Option<bool>,
}

impl ContentCommandService {
    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let supplied = Slug::parse_optional(command.slug)?;
        let slug = self.slug_assigner.resolve(supplied, title.as_str())?;

        let page = self
            .page_write
            .insert(NewPage {
                title,
                slug,
                is_published: command.is_published,
                content,
            })
            .await?;
        tracing::info!(page_id = page.id.0, slug = %page.slug, "page created");
        Ok(page.into())
    }

    pub async fn update_page(&self, command: UpdatePageCommand) -> ApplicationResult<PageDto> {
        let mut update = PageUpdate::new(PageId::new(command.id)?);
        if let Some(title) = command.title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(is_published) = command.is_published {
            update = update.with_published(is_published);
        }

        let page = self.page_write.update(update).await?;
        tracing::info!(page_id = page.id.0, "page updated");
        Ok(page.into())
    }
}
