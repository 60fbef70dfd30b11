use crate::domain::slug::Slug;
use crate::domain::taxonomy::value_objects::{CategoryId, TagId, TermName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TermName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TermName,
    pub slug: Slug,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: TermName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: TermName,
    pub slug: Slug,
}
