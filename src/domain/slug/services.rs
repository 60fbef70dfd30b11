// src/domain/slug/services.rs
use std::sync::Arc;

use crate::application::ports::util::{RandomSource, SlugGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{MAX_SLUG_LENGTH, Slug};

/// Suffix length used for every generated slug in the product.
pub const SLUG_SUFFIX_LENGTH: usize = 5;

/// Domain service producing URL-safe slugs for named content.
///
/// The random suffix only makes collisions unlikely. The unique constraint on
/// each slug column stays authoritative, so a collision is reported by the
/// write as a conflict rather than retried here.
pub struct SlugAssigner {
    generator: Arc<dyn SlugGenerator>,
    random: Arc<dyn RandomSource>,
}

impl SlugAssigner {
    pub fn new(generator: Arc<dyn SlugGenerator>, random: Arc<dyn RandomSource>) -> Self {
        Self { generator, random }
    }

    /// Normalizes `display_text` and appends `suffix_length` random
    /// alphanumeric characters. A text with nothing ASCII-representable
    /// yields the suffix alone.
    pub fn assign(&self, display_text: &str, suffix_length: usize) -> String {
        let mut base = self.generator.slugify(display_text);

        let budget = MAX_SLUG_LENGTH.saturating_sub(suffix_length);
        if base.len() > budget {
            base.truncate(budget);
            while base.ends_with('-') {
                base.pop();
            }
        }

        base.push_str(&self.random.alphanumeric(suffix_length));
        base
    }

    /// Keeps a caller-supplied slug untouched; only generates one when absent.
    pub fn resolve(&self, supplied: Option<Slug>, display_text: &str) -> DomainResult<Slug> {
        match supplied {
            Some(slug) => Ok(slug),
            None => Slug::new(self.assign(display_text, SLUG_SUFFIX_LENGTH)),
        }
    }
}
