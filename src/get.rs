//! Detail view and navigation target lookup by article id.
//!
//! Used by the `gallery get` / `gallery open` CLI commands and the
//! `GET /articles/{id}` HTTP route.

use anyhow::{Context, Result};
use article_gallery_core::present::format_similarity;
use article_gallery_core::{severity_color, ArticleRecord, SeverityTier, ViewProjector};
use serde::Serialize;

use crate::dataset::Dataset;

/// Detail response: the full record plus its rendered score badge.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub record: ArticleRecord,
    pub severity: SeverityTier,
    pub color: &'static str,
    /// `published_date` normalized to RFC 3339, when it parses.
    pub published_at: Option<String>,
}

impl ArticleDetail {
    pub fn new(record: &ArticleRecord) -> Self {
        let severity = severity_color(record.similarity);
        Self {
            record: record.clone(),
            severity,
            color: severity.color(),
            published_at: record.published_at().map(|dt| dt.to_rfc3339()),
        }
    }
}

/// Core get function returning structured data (used by CLI and server).
pub fn get_article(dataset: &Dataset, id: &str) -> Result<ArticleDetail> {
    let projector = ViewProjector::new(dataset.records());
    let record = projector
        .find(id)
        .with_context(|| format!("article not found: {}", id))?;
    Ok(ArticleDetail::new(record))
}

/// The external URL a selected card navigates to.
pub fn open_target(dataset: &Dataset, id: &str) -> Result<String> {
    let projector = ViewProjector::new(dataset.records());
    projector
        .open_target(id)
        .map(str::to_string)
        .with_context(|| format!("article not found: {}", id))
}

/// CLI entry point: calls [`get_article`] and prints to stdout.
pub fn run_get(dataset: &Dataset, id: &str) -> Result<()> {
    let detail = get_article(dataset, id)?;
    let doc = &detail.record;

    println!("--- Article ---");
    println!("id:           {}", doc.id);
    println!("title:        {}", doc.title);
    match detail.published_at.as_deref() {
        Some(ts) if ts != doc.published_date => {
            println!("published:    {} ({})", doc.published_date, ts)
        }
        _ => println!("published:    {}", doc.published_date),
    }
    println!(
        "similarity:   {} ({}, {})",
        format_similarity(doc.similarity),
        detail.severity.as_str(),
        detail.color
    );
    println!("image:        {}", doc.url_to_image);
    println!("url:          {}", doc.url);
    println!();

    println!("--- Description ---");
    println!("{}", doc.description);

    Ok(())
}

pub fn run_open(dataset: &Dataset, id: &str) -> Result<()> {
    println!("{}", open_target(dataset, id)?);
    Ok(())
}
