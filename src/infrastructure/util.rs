use crate::application::ports::util::{RandomSource, SlugGenerator};
use rand::{Rng, distributions::Alphanumeric, rngs::OsRng};
use unicode_normalization::UnicodeNormalization;

/// Compatibility-decomposes the input and keeps only what is left in ASCII.
///
/// Accented Latin letters fall back to their base letter; scripts with no
/// ASCII decomposition (CJK, Cyrillic, emoji) vanish instead of being
/// transliterated. Runs of any other ASCII collapse to one inner `-`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        let mut separator = false;

        for c in input.nfkd().filter(char::is_ascii) {
            if c.is_ascii_alphanumeric() {
                if separator && !slug.is_empty() {
                    slug.push('-');
                }
                separator = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                separator = true;
            }
        }

        slug
    }
}

/// Suffix characters straight from the operating system RNG.
#[derive(Default, Clone)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn alphanumeric(&self, length: usize) -> String {
        OsRng
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_strips_diacritics_and_punctuation() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello World!"), "hello-world");
        assert_eq!(slugger.slugify("Programação em Rust"), "programacao-em-rust");
        assert_eq!(slugger.slugify("  --Já é__tarde--  "), "ja-e-tarde");
        assert_eq!(slugger.slugify("C'est l'été"), "c-est-l-ete");
        assert_eq!(slugger.slugify("Ｆｕｌｌ ｗｉｄｔｈ"), "full-width");
        assert_eq!(slugger.slugify("!!!"), "");
    }

    #[test]
    fn slugify_drops_scripts_without_ascii_form() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("日本語"), "");
        assert_eq!(slugger.slugify("🎉"), "");
        assert_eq!(slugger.slugify("Привет"), "");
        assert_eq!(slugger.slugify("Rust 日本語 ação"), "rust-acao");
    }

    #[test]
    fn random_suffix_is_alphanumeric_with_requested_length() {
        let random = OsRandomSource;
        for length in [0, 1, 5, 64] {
            let value = random.alphanumeric(length);
            assert_eq!(value.len(), length);
            assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn random_suffixes_vary() {
        let random = OsRandomSource;
        assert_ne!(random.alphanumeric(16), random.alphanumeric(16));
    }
}
