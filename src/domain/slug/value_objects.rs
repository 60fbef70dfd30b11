use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_SLUG_LENGTH: usize = 255;

/// URL-safe identifier shared by every content entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.chars().count() > MAX_SLUG_LENGTH {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {MAX_SLUG_LENGTH} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::Validation(
                "slug may only contain letters, digits, hyphens and underscores".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Treats a blank or missing value as "no slug supplied".
    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Self::new(v).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
