use crate::domain::account::AccountId;
use crate::domain::post::entity::Post;

/// Narrowing applied on top of the published-only base predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    All,
    Author(AccountId),
    CategorySlug(String),
    TagSlug(String),
    /// Case-insensitive substring over title, excerpt and content.
    Search(String),
}

impl PostFilter {
    /// In-memory form of the predicate, published flag included.
    pub fn matches(&self, post: &Post) -> bool {
        if !post.is_published {
            return false;
        }

        match self {
            Self::All => true,
            Self::Author(id) => post.created_by == Some(*id),
            Self::CategorySlug(slug) => post
                .category
                .as_ref()
                .is_some_and(|category| category.slug.as_str() == slug),
            Self::TagSlug(slug) => post.has_tag_slug(slug),
            Self::Search(text) => {
                let needle = text.to_lowercase();
                [
                    post.title.as_str(),
                    post.excerpt.as_str(),
                    post.content.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}
