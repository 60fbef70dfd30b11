use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page size shared by every post listing.
pub const PER_PAGE: u32 = 9;

/// Page number as the caller sent it. Anything that does not parse as an
/// integer means the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    number: Option<i64>,
}

impl PageRequest {
    pub fn first() -> Self {
        Self { number: Some(1) }
    }

    pub fn number(number: i64) -> Self {
        Self {
            number: Some(number),
        }
    }

    pub fn parse(raw: Option<&str>) -> Self {
        Self {
            number: raw.and_then(|value| value.trim().parse::<i64>().ok()),
        }
    }

    /// Clamps the request into `1..=num_pages` for a result set of `count`
    /// items. An empty set still has one (empty) page.
    pub fn resolve(self, count: u64, per_page: u32) -> PageWindow {
        let per_page = per_page.max(1);
        let num_pages = u32::try_from(count.div_ceil(u64::from(per_page)))
            .unwrap_or(u32::MAX)
            .max(1);
        let requested = self.number.unwrap_or(1);
        let number = u32::try_from(requested.clamp(1, i64::from(num_pages))).unwrap_or(1);

        PageWindow {
            number,
            num_pages,
            per_page,
            count,
        }
    }
}

/// Resolved position of one page inside a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u32,
    pub num_pages: u32,
    pub per_page: u32,
    pub count: u64,
}

impl PageWindow {
    /// The single page used by search, which never paginates further.
    pub fn single(count: u64, per_page: u32) -> Self {
        Self {
            number: 1,
            num_pages: 1,
            per_page,
            count,
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.number - 1) * u64::from(self.per_page)
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub window: PageWindow,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, window: PageWindow) -> Self {
        Self { items, window }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            window: self.window,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PageMeta {
    pub number: u32,
    pub num_pages: u32,
    pub per_page: u32,
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<PageWindow> for PageMeta {
    fn from(window: PageWindow) -> Self {
        Self {
            number: window.number,
            num_pages: window.num_pages,
            per_page: window.per_page,
            count: window.count,
            has_next: window.has_next(),
            has_previous: window.has_previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junk_and_missing_numbers_mean_first_page() {
        assert_eq!(PageRequest::parse(None).resolve(30, PER_PAGE).number, 1);
        assert_eq!(PageRequest::parse(Some("abc")).resolve(30, PER_PAGE).number, 1);
        assert_eq!(PageRequest::parse(Some("2")).resolve(30, PER_PAGE).number, 2);
    }

    #[test]
    fn out_of_range_numbers_clamp() {
        let window = PageRequest::number(99).resolve(30, PER_PAGE);
        assert_eq!(window.num_pages, 4);
        assert_eq!(window.number, 4);
        assert_eq!(window.offset(), 27);
        assert!(!window.has_next());

        let window = PageRequest::number(0).resolve(30, PER_PAGE);
        assert_eq!(window.number, 1);
        assert!(!window.has_previous());

        let window = PageRequest::number(-5).resolve(30, PER_PAGE);
        assert_eq!(window.number, 1);
    }

    #[test]
    fn empty_result_has_one_page() {
        let window = PageRequest::number(3).resolve(0, PER_PAGE);
        assert_eq!(window.num_pages, 1);
        assert_eq!(window.number, 1);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn exact_multiple_does_not_add_page() {
        let window = PageRequest::number(2).resolve(18, PER_PAGE);
        assert_eq!(window.num_pages, 2);
        assert!(window.has_previous());
        assert!(!window.has_next());
    }
}
