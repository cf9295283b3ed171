//! Static article dataset.
//!
//! The gallery's data source is a JSON file holding an array of article
//! objects. It is read once at startup into a shared, immutable
//! `Arc<[ArticleRecord]>`; every [`ViewProjector`] built from the dataset
//! borrows that same collection.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use article_gallery_core::{ArticleRecord, ViewProjector};
use tracing::{info, warn};

use crate::config::ViewConfig;

/// The loaded input collection.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[ArticleRecord]>,
}

impl Dataset {
    /// Wrap already-materialized records, rejecting duplicate ids.
    pub fn from_records(records: Vec<ArticleRecord>) -> Result<Self> {
        let mut ids = HashSet::new();
        for record in &records {
            if !ids.insert(record.id.as_str()) {
                bail!("duplicate article id: {}", record.id);
            }
        }

        let malformed = records.iter().filter(|r| r.similarity.is_nan()).count();
        if malformed > 0 {
            warn!(count = malformed, "articles without a numeric Similarity");
        }

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ArticleRecord> =
            serde_json::from_str(json).with_context(|| "Failed to parse article data")?;
        Self::from_records(records)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file: {}", path.display()))?;
        let dataset = Self::from_json_str(&content)
            .with_context(|| format!("Invalid data file: {}", path.display()))?;
        info!(count = dataset.len(), path = %path.display(), "loaded articles");
        Ok(dataset)
    }

    pub fn records(&self) -> Arc<[ArticleRecord]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A projector in the default view state, sized per `[view]` config.
    pub fn projector(&self, view: &ViewConfig) -> ViewProjector {
        ViewProjector::new(self.records())
            .with_page_size(view.page_size)
            .with_excerpt_length(view.excerpt_length)
    }
}
