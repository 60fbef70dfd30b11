// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase ASCII token of letters, digits and single hyphens.
    fn slugify(&self, input: &str) -> String;
}

pub trait RandomSource: Send + Sync {
    /// `length` characters drawn uniformly from `[A-Za-z0-9]`.
    fn alphanumeric(&self, length: usize) -> String;
}
