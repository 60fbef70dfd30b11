pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use filter::PostFilter;
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PostContent, PostExcerpt, PostId, PostTitle};
