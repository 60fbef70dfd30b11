use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

const MAX_TERM_NAME_LENGTH: usize = 255;

/// Display name of a tag or category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermName(String);

impl TermName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if value.chars().count() > MAX_TERM_NAME_LENGTH {
            return Err(DomainError::Validation(format!(
                "name cannot exceed {MAX_TERM_NAME_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TermName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
