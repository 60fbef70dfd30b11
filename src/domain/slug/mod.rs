pub mod services;
pub mod value_objects;

pub use services::{SLUG_SUFFIX_LENGTH, SlugAssigner};
pub use value_objects::Slug;
