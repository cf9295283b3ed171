//! Listing view: the filtered, sorted, paginated gallery.
//!
//! [`list_articles`] is the shared entry point for `gallery list` and
//! `GET /`. It replays the request onto a fresh [`ViewProjector`] as the
//! same three transitions a user would trigger, in the order category →
//! sort → page, so a category in the request resets the sort before an
//! explicit sort is applied.

use anyhow::Result;
use article_gallery_core::{PageSize, SortKey, ViewModel, ViewProjector};

use crate::config::Config;
use crate::dataset::Dataset;

/// One listing request. `None` fields keep the projector's defaults.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub category: Option<String>,
    pub sort: Option<SortKey>,
    pub offset: usize,
    pub page_size: Option<PageSize>,
}

impl ListRequest {
    /// Apply this request to `projector` as user transitions.
    pub fn apply(&self, projector: &mut ViewProjector) {
        if self.category.is_some() {
            projector.set_category_filter(self.category.as_deref());
        }
        if let Some(sort) = self.sort {
            projector.set_sort(sort);
        }
        let size = self.page_size.unwrap_or(projector.state().page_size);
        projector.set_page(self.offset, size);
    }
}

/// Build the listing view model for `req`.
pub fn list_articles(config: &Config, dataset: &Dataset, req: &ListRequest) -> ViewModel {
    let mut projector = dataset.projector(&config.view);
    req.apply(&mut projector);
    projector.view_model()
}

/// CLI entry point: calls [`list_articles`] and prints the cards.
pub fn run_list(config: &Config, dataset: &Dataset, req: &ListRequest, json: bool) -> Result<()> {
    let view = list_articles(config, dataset, req);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!(
        "{}: {} articles, sorted by {}",
        view.category_label, view.page.total, view.sort
    );
    println!();

    if view.cards.is_empty() {
        println!("No articles.");
    }

    for (i, card) in view.cards.iter().enumerate() {
        println!(
            "{}. [{} {}] {}",
            view.page.offset + i + 1,
            card.similarity,
            card.severity.as_str(),
            card.title
        );
        println!("    published: {}", card.published_date);
        println!("    excerpt: \"{}\"", card.excerpt.replace('\n', " ").trim());
        println!("    url: {}", card.url);
        println!("    id: {}", card.id);
        println!();
    }

    println!(
        "Page {} of {} ({} per page, offset {})",
        view.page.page, view.page.page_count, view.page.size, view.page.offset
    );

    Ok(())
}
