// src/application/commands/content/mod.rs
mod pages;
mod posts;
mod references;
mod service;
mod taxonomy;

pub use pages::{CreatePageCommand, UpdatePageCommand};
pub use posts::{CreatePostCommand, CreatePostCommandBuilder, UpdatePostCommand};
pub use service::ContentCommandService;
pub use taxonomy::{CreateCategoryCommand, CreateTagCommand};
