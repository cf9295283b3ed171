//! Core data model: the article record.
//!
//! Records arrive from the data source as JSON objects using the wire names
//! `id`, `title`, `published_date`, `Similarity`, `description`,
//! `urlToImage` and `url`. They are never mutated after loading.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// One article entry of the gallery.
///
/// `title` doubles as the record's category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Unique identifier. Numeric ids in the data file are normalized to
    /// their decimal string form.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub title: String,
    /// Publication date as given by the data source (usually ISO 8601).
    #[serde(default, deserialize_with = "de_text")]
    pub published_date: String,
    /// Relevance score, nominally `0..=100`. `NaN` when the source value
    /// was missing or not numeric.
    #[serde(rename = "Similarity", default = "nan", deserialize_with = "de_similarity")]
    pub similarity: f64,
    #[serde(default, deserialize_with = "de_text")]
    pub description: String,
    #[serde(rename = "urlToImage", default, deserialize_with = "de_text")]
    pub url_to_image: String,
    #[serde(default, deserialize_with = "de_text")]
    pub url: String,
}

impl ArticleRecord {
    /// The category this record belongs to.
    pub fn category(&self) -> &str {
        &self.title
    }

    /// Parse `published_date` as RFC 3339, falling back to a bare
    /// `YYYY-MM-DD` date at midnight UTC.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.published_date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().fixed_offset())
    }
}

fn nan() -> f64 {
    f64::NAN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// `null` reads as an empty string, like a missing key.
fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn de_similarity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}
