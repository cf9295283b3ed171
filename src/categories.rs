//! Category listing for the navigation menu.
//!
//! Categories are the distinct article titles of the whole dataset, in
//! first-seen order, with a per-category article count. Used by both the
//! `gallery categories` CLI command and the `GET /categories` HTTP route.

use article_gallery_core::ViewProjector;
use serde::Serialize;

use crate::dataset::Dataset;

/// One entry of the category menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    pub count: usize,
}

pub fn list_categories(dataset: &Dataset) -> Vec<CategoryEntry> {
    let projector = ViewProjector::new(dataset.records());
    projector
        .available_categories()
        .into_iter()
        .map(|name| CategoryEntry {
            name: name.to_string(),
            count: projector.records().iter().filter(|r| r.title == name).count(),
        })
        .collect()
}

/// CLI entry point: prints one category per line with its count.
pub fn run_categories(dataset: &Dataset) {
    let categories = list_categories(dataset);
    if categories.is_empty() {
        println!("No categories.");
        return;
    }

    println!("{:<40} ARTICLES", "CATEGORY");
    for entry in &categories {
        println!("{:<40} {}", entry.name, entry.count);
    }
}
