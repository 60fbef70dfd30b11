// tests/support/builders.rs
use blog_core::domain::{
    account::{Account, AccountId, Username},
    post::{Post, PostContent, PostExcerpt, PostId, PostTitle},
    slug::Slug,
    taxonomy::{Category, CategoryId, Tag, TagId, TermName},
};

use super::mocks::fixed_now;

pub struct PostBuilder {
    id: i64,
    title: String,
    slug: Option<String>,
    excerpt: String,
    content: String,
    published: bool,
    category: Option<Category>,
    tags: Vec<Tag>,
    author: Option<i64>,
}

impl PostBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Post {id}"),
            slug: None,
            excerpt: "Resumo".into(),
            content: "Conteúdo".into(),
            published: true,
            category: None,
            tags: Vec::new(),
            author: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn category(mut self, id: i64, name: &str, slug: &str) -> Self {
        self.category = Some(Category {
            id: CategoryId::new(id).unwrap(),
            name: TermName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
        });
        self
    }

    /// 追加順ではなくタグ ID 順に並べる
    pub fn tag(mut self, id: i64, name: &str, slug: &str) -> Self {
        self.tags.push(Tag {
            id: TagId::new(id).unwrap(),
            name: TermName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
        });
        self.tags.sort_by_key(|tag| tag.id);
        self
    }

    pub fn author(mut self, id: i64) -> Self {
        self.author = Some(id);
        self
    }

    pub fn build(self) -> Post {
        let slug = self.slug.unwrap_or_else(|| format!("post-{}", self.id));
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: Slug::new(slug).unwrap(),
            excerpt: PostExcerpt::new(self.excerpt).unwrap(),
            content: PostContent::new(self.content).unwrap(),
            is_published: self.published,
            cover: None,
            cover_in_post_content: true,
            category: self.category,
            tags: self.tags,
            created_by: self.author.map(|id| AccountId::new(id).unwrap()),
            updated_by: None,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub fn account(id: i64, username: &str, first_name: &str, last_name: &str) -> Account {
    Account {
        id: AccountId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: format!("{username}@example.com"),
        is_active: true,
        date_joined: fixed_now(),
    }
}

/// `1..=count` の公開記事を生成する
pub fn published_posts(count: i64) -> Vec<Post> {
    (1..=count).map(|id| PostBuilder::new(id).build()).collect()
}
