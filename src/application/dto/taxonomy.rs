use crate::domain::taxonomy::{Category, Tag};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into_inner(),
            slug: tag.slug.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
        }
    }
}
