// src/application/commands/content/posts.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountId,
        post::{NewPost, PostContent, PostExcerpt, PostId, PostTitle, PostUpdate},
        slug::Slug,
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub is_published: bool,
    pub cover: Option<String>,
    pub cover_in_post_content: bool,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

pub struct CreatePostCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    is_published: bool,
    cover: Option<String>,
    cover_in_post_content: bool,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
}

impl Default for CreatePostCommandBuilder {
    fn default() -> Self {
        Self {
            title: None,
            slug: None,
            excerpt: None,
            content: None,
            is_published: false,
            cover: None,
            cover_in_post_content: true,
            category_id: None,
            tag_ids: Vec::new(),
        }
    }
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn cover(mut self, cover: impl Into<String>, in_post_content: bool) -> Self {
        self.cover = Some(cover.into());
        self.cover_in_post_content = in_post_content;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tag(mut self, tag_id: i64) -> Self {
        self.tag_ids.push(tag_id);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            excerpt: self.excerpt.ok_or("excerpt is required")?,
            content: self.content.ok_or("content is required")?,
            is_published: self.is_published,
            cover: self.cover,
            cover_in_post_content: self.cover_in_post_content,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
        })
    }
}

/// Fields left as `None` keep their stored value. `category_id: Some(None)`
/// clears the category.
#[derive(Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub is_published: Option<bool>,
    pub cover: Option<Option<String>>,
    pub cover_in_post_content: Option<bool>,
    pub category_id: Option<Option<i64>>,
    pub tag_ids: Option<Vec<i64>>,
}

impl ContentCommandService {
    pub async fn create_post(
        &self,
        actor: Option<AccountId>,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let excerpt = PostExcerpt::new(command.excerpt)?;
        let content = PostContent::new(command.content)?;
        let supplied = Slug::parse_optional(command.slug)?;
        let category_id = self.resolve_category(command.category_id).await?;
        let tag_ids = self.resolve_tags(&command.tag_ids).await?;

        let slug = self.slug_assigner.resolve(supplied, title.as_str())?;
        let now = self.clock.now();

        let new_post = NewPost {
            title,
            slug,
            excerpt,
            content,
            is_published: command.is_published,
            cover: command.cover.filter(|cover| !cover.trim().is_empty()),
            cover_in_post_content: command.cover_in_post_content,
            category_id,
            tag_ids,
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        let created = self.post_write.insert(new_post).await?;
        tracing::info!(post_id = created.id.0, slug = %created.slug, "post created");
        Ok(created.into())
    }

    /// Refreshes `updated_at` and records the editor. The slug never changes.
    pub async fn update_post(
        &self,
        actor: Option<AccountId>,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        self.post_read
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let mut update = PostUpdate::new(id, self.clock.now()).with_updated_by(actor);

        if let Some(title) = command.title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(excerpt) = command.excerpt {
            update = update.with_excerpt(PostExcerpt::new(excerpt)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(is_published) = command.is_published {
            update = update.with_published(is_published);
        }
        if let Some(cover) = command.cover {
            update = update.with_cover(cover.filter(|cover| !cover.trim().is_empty()));
        }
        if let Some(value) = command.cover_in_post_content {
            update = update.with_cover_in_post_content(value);
        }
        if let Some(category_id) = command.category_id {
            update = update.with_category(self.resolve_category(category_id).await?);
        }
        if let Some(tag_ids) = command.tag_ids {
            update = update.with_tags(self.resolve_tags(&tag_ids).await?);
        }

        let updated = self.post_write.update(update).await?;
        tracing::info!(post_id = updated.id.0, "post updated");
        Ok(updated.into())
    }
}
