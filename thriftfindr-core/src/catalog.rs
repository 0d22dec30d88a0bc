//! Search, category and page slicing over an in-memory record list.
//!
//! The pipeline is pure: the same records and [`BrowseState`] always produce
//! the same [`CatalogPage`], and source order is preserved.
use std::borrow::Cow;

use smallvec::{SmallVec, smallvec};

use crate::category::CategoryFilter;
use crate::records::{ItemRecord, StoreRecord};

/// Text a record exposes to the search box and the category pills.
pub trait Searchable {
    /// Fields matched by free-text search in addition to the tag line.
    fn search_fields(&self) -> SmallVec<[&str; 2]>;

    /// String the category pills are matched against.
    fn tag_line(&self) -> Cow<'_, str>;
}

impl Searchable for ItemRecord {
    fn search_fields(&self) -> SmallVec<[&str; 2]> {
        smallvec![self.name.as_str()]
    }

    fn tag_line(&self) -> Cow<'_, str> {
        Cow::Owned(Self::tag_line(self))
    }
}

impl Searchable for StoreRecord {
    fn search_fields(&self) -> SmallVec<[&str; 2]> {
        smallvec![self.name.as_str(), self.address.as_str()]
    }

    fn tag_line(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

/// True when no category is active or an active name occurs in the tag line.
#[must_use]
pub fn matches_category<T: Searchable + ?Sized>(record: &T, active: &[String]) -> bool {
    if active.is_empty() {
        return true;
    }
    let tags = record.tag_line().to_lowercase();
    active
        .iter()
        .any(|name| tags.contains(name.to_lowercase().as_str()))
}

/// True when the term is empty or occurs in a search field or the tag line.
#[must_use]
pub fn matches_search<T: Searchable + ?Sized>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle.as_str()))
        || record.tag_line().to_lowercase().contains(needle.as_str())
}

/// Records passing both matchers, in source order.
#[must_use]
pub fn filter_visible<'a, T: Searchable>(
    records: &'a [T],
    term: &str,
    active: &[String],
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_category(*record, active) && matches_search(*record, term))
        .collect()
}

#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        count.div_ceil(page_size)
    }
}

/// Slice `[(page-1)*size, page*size)`, clipped to the list.
#[must_use]
pub fn page_slice<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// The page to render plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage<'a, T> {
    pub items: Vec<&'a T>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
}

impl<T> CatalogPage<'_, T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

/// Why a list rendered no records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    NoSearchMatches(String),
    NoCategoryMatches,
    NoRecords,
}

impl EmptyReason {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoSearchMatches(term) => format!(
                "No items match \"{term}\". Try a different search or adjust category filters."
            ),
            Self::NoCategoryMatches => {
                "No items match the selected categories. Try clearing filters or searching."
                    .to_string()
            }
            Self::NoRecords => "No items available in this store currently.".to_string(),
        }
    }
}

/// Search term, pills and current page for one browsable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    search_term: String,
    categories: CategoryFilter,
    filter_by_category: bool,
    current_page: usize,
    page_size: usize,
}

impl BrowseState {
    #[must_use]
    pub fn new(categories: CategoryFilter, filter_by_category: bool, page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            categories,
            filter_by_category,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Listing page state: pills are shown but stores carry no tags to match.
    #[must_use]
    pub fn store_listing(page_size: usize) -> Self {
        Self::new(CategoryFilter::store_listing(), false, page_size)
    }

    #[must_use]
    pub fn store_detail(page_size: usize) -> Self {
        Self::new(CategoryFilter::store_detail(), true, page_size)
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn categories(&self) -> &CategoryFilter {
        &self.categories
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Toggle a pill and return to the first page.
    ///
    /// Unknown pill names change nothing, the current page included.
    pub fn toggle_category(&mut self, name: &str) -> bool {
        let toggled = self.categories.toggle(name);
        if toggled {
            self.current_page = 1;
        }
        toggled
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
        self.current_page = 1;
    }

    /// Move to `page`, clamped into `[1, max(1, total_pages)]`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    fn active_filter(&self) -> Vec<String> {
        if self.filter_by_category {
            self.categories.active_names()
        } else {
            Vec::new()
        }
    }

    /// Run the pipeline over `records`.
    #[must_use]
    pub fn apply<'a, T: Searchable>(&self, records: &'a [T]) -> CatalogPage<'a, T> {
        let visible = filter_visible(records, &self.search_term, &self.active_filter());
        let pages = total_pages(visible.len(), self.page_size);
        let current_page = self.current_page.clamp(1, pages.max(1));
        let items = page_slice(&visible, current_page, self.page_size).to_vec();
        CatalogPage {
            items,
            total_matches: visible.len(),
            total_pages: pages,
            current_page,
            page_size: self.page_size,
        }
    }

    /// Message for an empty result, checked search first, then pills.
    #[must_use]
    pub fn empty_reason(&self, source_len: usize, visible_len: usize) -> Option<EmptyReason> {
        if visible_len > 0 {
            return None;
        }
        if !self.search_term.is_empty() {
            Some(EmptyReason::NoSearchMatches(self.search_term.clone()))
        } else if self.filter_by_category && self.categories.any_active() && source_len > 0 {
            Some(EmptyReason::NoCategoryMatches)
        } else {
            Some(EmptyReason::NoRecords)
        }
    }
}
