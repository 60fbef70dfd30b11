use super::ContentCommandService;
use crate::{
    application::{
        dto::{CategoryDto, TagDto},
        error::ApplicationResult,
    },
    domain::{
        slug::Slug,
        taxonomy::{NewCategory, NewTag, TermName},
    },
};

pub struct CreateTagCommand {
    pub name: String,
    pub slug: Option<String>,
}

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
}

impl ContentCommandService {
    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        let name = TermName::new(command.name)?;
        let supplied = Slug::parse_optional(command.slug)?;
        let slug = self.slug_assigner.resolve(supplied, name.as_str())?;

        let tag = self.tags.insert(NewTag { name, slug }).await?;
        tracing::info!(tag_id = tag.id.0, slug = %tag.slug, "tag created");
        Ok(tag.into())
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = TermName::new(command.name)?;
        let supplied = Slug::parse_optional(command.slug)?;
        let slug = self.slug_assigner.resolve(supplied, name.as_str())?;

        let category = self.categories.insert(NewCategory { name, slug }).await?;
        tracing::info!(category_id = category.id.0, slug = %category.slug, "category created");
        Ok(category.into())
    }
}
