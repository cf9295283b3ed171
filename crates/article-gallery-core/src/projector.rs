//! The view projector: filter → sort → page over an immutable collection.
//!
//! [`ViewProjector`] holds the shared record collection and the current
//! [`ViewState`]. It never caches a derived list; every read recomputes the
//! projection from scratch, so the visible page cannot go stale after a
//! transition.
//!
//! # Transitions
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`set_category_filter`](ViewProjector::set_category_filter) | Set filter, reset sort to `Similarity:desc`, reset offset to 0 |
//! | [`set_sort`](ViewProjector::set_sort) | Replace sort key, keep offset |
//! | [`set_page`](ViewProjector::set_page) | Replace offset and page size |
//!
//! # Ordering
//!
//! Titles compare lexicographically, dates by their string form (ISO 8601
//! strings sort chronologically), similarity numerically with `NaN` below
//! every number. Sorting is stable: equal keys keep input order in both
//! directions.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::models::ArticleRecord;
use crate::present::{ArticleCard, DEFAULT_EXCERPT_LENGTH};
use crate::view::{PageSize, SortDirection, SortField, SortKey, ViewState};

/// Header label shown when no category is selected.
pub const HOME_LABEL: &str = "Home";

/// Paginator description of the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub offset: usize,
    pub size: usize,
    /// Length of the filtered+sorted sequence.
    pub total: usize,
    /// 1-based page number containing `offset`.
    pub page: usize,
    /// Always at least 1, even for an empty listing.
    pub page_count: usize,
}

/// Everything a rendering layer needs to paint the listing view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub category_label: String,
    pub selected_category: Option<String>,
    pub sort: SortKey,
    pub page: PageInfo,
    pub cards: Vec<ArticleCard>,
}

/// Owns the view state over a shared, read-only record collection.
#[derive(Debug, Clone)]
pub struct ViewProjector {
    records: Arc<[ArticleRecord]>,
    state: ViewState,
    excerpt_len: usize,
}

impl ViewProjector {
    /// Create a projector over `records` with the default view state.
    pub fn new(records: Arc<[ArticleRecord]>) -> Self {
        Self {
            records,
            state: ViewState::default(),
            excerpt_len: DEFAULT_EXCERPT_LENGTH,
        }
    }

    /// Start from `page_size` instead of the default of 12.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.state.page_size = page_size;
        self
    }

    /// Characters of description kept on each card.
    pub fn with_excerpt_length(mut self, excerpt_len: usize) -> Self {
        self.excerpt_len = excerpt_len;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    // ============ Transitions ============

    /// Select a category, or clear the filter with `None` / `""`.
    ///
    /// Always returns to the default ordering and the first page, whatever
    /// the previous state was.
    pub fn set_category_filter(&mut self, category: Option<&str>) {
        let category = category.filter(|c| !c.is_empty()).map(str::to_string);
        debug!(?category, "category filter changed");
        self.state.selected_category = category;
        self.state.sort_key = SortKey::default();
        self.state.page_offset = 0;
    }

    /// Drop the category filter.
    pub fn clear_category(&mut self) {
        self.set_category_filter(None);
    }

    /// Replace the sort key. The page offset is kept as is.
    pub fn set_sort(&mut self, key: SortKey) {
        debug!(sort = %key, "sort key changed");
        self.state.sort_key = key;
    }

    /// Move the page window. Offsets past the end produce an empty page.
    pub fn set_page(&mut self, offset: usize, size: PageSize) {
        debug!(offset, size = size.get(), "page changed");
        self.state.page_offset = offset;
        self.state.page_size = size;
    }

    // ============ Derived reads ============

    /// The currently visible records, in display order.
    pub fn current_page(&self) -> Vec<&ArticleRecord> {
        let all = self.filtered_sorted();
        let window = page_window(
            all.len(),
            self.state.page_offset,
            self.state.page_size.get(),
        );
        all[window].to_vec()
    }

    /// The full filtered and sorted sequence, before windowing.
    pub fn filtered_sorted(&self) -> Vec<&ArticleRecord> {
        let mut out = filter_records(&self.records, self.state.selected_category.as_deref());
        sort_records(&mut out, self.state.sort_key);
        out
    }

    pub fn filtered_len(&self) -> usize {
        match self.state.selected_category.as_deref() {
            None => self.records.len(),
            Some(c) => self.records.iter().filter(|r| r.title == c).count(),
        }
    }

    /// Distinct titles of the whole collection in first-seen order.
    ///
    /// Derived from the unfiltered records so every category stays
    /// reachable while a filter is active.
    pub fn available_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.title.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.state.selected_category.as_deref()
    }

    /// Header label: the selected category, or `"Home"`.
    pub fn category_label(&self) -> &str {
        self.selected_category().unwrap_or(HOME_LABEL)
    }

    /// Paginator state. An offset past the end reports the last page.
    pub fn page_info(&self) -> PageInfo {
        let total = self.filtered_len();
        let size = self.state.page_size.get();
        let page_count = total.div_ceil(size).max(1);
        PageInfo {
            offset: self.state.page_offset,
            size,
            total,
            page: (self.state.page_offset / size + 1).min(page_count),
            page_count,
        }
    }

    /// Detail-view lookup in the full collection.
    pub fn find(&self, id: &str) -> Option<&ArticleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// External navigation target of a record.
    pub fn open_target(&self, id: &str) -> Option<&str> {
        self.find(id).map(|r| r.url.as_str())
    }

    pub fn view_model(&self) -> ViewModel {
        let cards = self
            .current_page()
            .into_iter()
            .map(|r| ArticleCard::from_record(r, self.excerpt_len))
            .collect();
        ViewModel {
            category_label: self.category_label().to_string(),
            selected_category: self.state.selected_category.clone(),
            sort: self.state.sort_key,
            page: self.page_info(),
            cards,
        }
    }
}

/// Records whose title equals `category`; all records for `None`.
pub fn filter_records<'a>(
    records: &'a [ArticleRecord],
    category: Option<&str>,
) -> Vec<&'a ArticleRecord> {
    match category {
        None => records.iter().collect(),
        Some(c) => records.iter().filter(|r| r.title == c).collect(),
    }
}

/// Stable sort by `key`.
pub fn sort_records(records: &mut [&ArticleRecord], key: SortKey) {
    records.sort_by(|a, b| {
        let ord = compare_field(a, b, key.field);
        match key.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn compare_field(a: &ArticleRecord, b: &ArticleRecord, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::PublishedDate => a.published_date.cmp(&b.published_date),
        SortField::Similarity => {
            similarity_rank(a.similarity).total_cmp(&similarity_rank(b.similarity))
        }
    }
}

// NaN sorts as the lowest score; `+ 0.0` folds -0.0 into 0.0.
fn similarity_rank(x: f64) -> f64 {
    if x.is_nan() {
        f64::NEG_INFINITY
    } else {
        x + 0.0
    }
}

/// Half-open window `[offset, offset + size)` clamped to `len`.
pub fn page_window(len: usize, offset: usize, size: usize) -> Range<usize> {
    let start = offset.min(len);
    let end = offset.saturating_add(size).min(len);
    start..end
}
