//! View state: the user's current category filter, sort key, and page window.
//!
//! Sort keys use the `"field:direction"` form of the gallery's sort menu
//! (`"title:asc"`, `"published_date:desc"`, `"Similarity:desc"`, …) for
//! parsing and display.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "published_date")]
    PublishedDate,
    #[serde(rename = "Similarity")]
    Similarity,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::PublishedDate => "published_date",
            SortField::Similarity => "Similarity",
        }
    }
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(SortField::Title),
            "published_date" => Ok(SortField::PublishedDate),
            "Similarity" => Ok(SortField::Similarity),
            other => bail!(
                "Unknown sort field: '{}'. Use title, published_date, or Similarity.",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => bail!("Unknown sort direction: '{}'. Use asc or desc.", other),
        }
    }
}

/// A `(field, direction)` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Best match first.
impl Default for SortKey {
    fn default() -> Self {
        Self::new(SortField::Similarity, SortDirection::Desc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field.as_str(), self.direction.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    /// Parse `"field:direction"`, e.g. `"published_date:asc"`.
    fn from_str(s: &str) -> Result<Self> {
        let Some((field, direction)) = s.split_once(':') else {
            bail!("invalid sort key '{}': expected FIELD:DIRECTION", s);
        };
        Ok(Self::new(field.parse()?, direction.parse()?))
    }
}

/// The six entries of the sort menu, with their display labels.
pub const SORT_OPTIONS: [(&str, SortKey); 6] = [
    (
        "Alphabetical (ascending)",
        SortKey::new(SortField::Title, SortDirection::Asc),
    ),
    (
        "Alphabetical (descending)",
        SortKey::new(SortField::Title, SortDirection::Desc),
    ),
    (
        "Date (ascending)",
        SortKey::new(SortField::PublishedDate, SortDirection::Asc),
    ),
    (
        "Date (descending)",
        SortKey::new(SortField::PublishedDate, SortDirection::Desc),
    ),
    (
        "Similarity (ascending)",
        SortKey::new(SortField::Similarity, SortDirection::Asc),
    ),
    (
        "Similarity (descending)",
        SortKey::new(SortField::Similarity, SortDirection::Desc),
    ),
];

/// Number of records per page. Only 12, 24 and 48 are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub const ALLOWED: [usize; 3] = [12, 24, 48];

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(12)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = anyhow::Error;

    fn try_from(n: usize) -> Result<Self> {
        if !Self::ALLOWED.contains(&n) {
            bail!("invalid page size {}: must be one of 12, 24, 48", n);
        }
        Ok(PageSize(n))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Mutable presentation state. Only [`ViewProjector`](crate::ViewProjector)
/// transitions change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// `None` means no filter.
    pub selected_category: Option<String>,
    pub sort_key: SortKey,
    pub page_offset: usize,
    pub page_size: PageSize,
}
