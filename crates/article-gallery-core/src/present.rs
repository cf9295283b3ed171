//! Card presentation: severity tiers, text truncation, and the per-record
//! card handed to a rendering layer.

use serde::Serialize;

use crate::models::ArticleRecord;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Description excerpt length used when the caller has no preference.
pub const DEFAULT_EXCERPT_LENGTH: usize = 100;

/// Coloring bucket for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Success,
    Warning,
    Caution,
    Danger,
}

impl SeverityTier {
    /// Badge background color.
    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::Success => "#00cc00",
            SeverityTier::Warning => "#ffcc00",
            SeverityTier::Caution => "#ff9933",
            SeverityTier::Danger => "#ff0000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Success => "success",
            SeverityTier::Warning => "warning",
            SeverityTier::Caution => "caution",
            SeverityTier::Danger => "danger",
        }
    }
}

/// Map a similarity score onto its tier.
///
/// Thresholds are checked top-down: `>= 75` success, `>= 50` warning,
/// `>= 25` caution, anything else (including `NaN`) danger.
pub fn severity_color(similarity: f64) -> SeverityTier {
    if similarity >= 75.0 {
        SeverityTier::Success
    } else if similarity >= 50.0 {
        SeverityTier::Warning
    } else if similarity >= 25.0 {
        SeverityTier::Caution
    } else {
        SeverityTier::Danger
    }
}

/// Keep at most `max_len` characters of `text`, appending [`ELLIPSIS`] when
/// anything was cut. Counts `char`s, so multi-byte text is never split
/// inside a code point.
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}

/// Score badge text: two decimals, or `"-"` for a missing score.
pub fn format_similarity(similarity: f64) -> String {
    if similarity.is_finite() {
        format!("{:.2}", similarity)
    } else {
        "-".to_string()
    }
}

/// One card of the listing view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    /// Card subtitle.
    pub published_date: String,
    pub similarity: String,
    pub severity: SeverityTier,
    pub color: &'static str,
    pub excerpt: String,
    pub image_url: String,
    /// External navigation target opened when the card is selected.
    pub url: String,
}

impl ArticleCard {
    pub fn from_record(record: &ArticleRecord, excerpt_len: usize) -> Self {
        let severity = severity_color(record.similarity);
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            published_date: record.published_date.clone(),
            similarity: format_similarity(record.similarity),
            severity,
            color: severity.color(),
            excerpt: truncate(&record.description, excerpt_len),
            image_url: record.url_to_image.clone(),
            url: record.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(severity_color(75.0), SeverityTier::Success);
        assert_eq!(severity_color(74.999), SeverityTier::Warning);
        assert_eq!(severity_color(50.0), SeverityTier::Warning);
        assert_eq!(severity_color(49.99), SeverityTier::Caution);
        assert_eq!(severity_color(25.0), SeverityTier::Caution);
        assert_eq!(severity_color(24.0), SeverityTier::Danger);
    }

    #[test]
    fn test_severity_out_of_range() {
        assert_eq!(severity_color(140.0), SeverityTier::Success);
        assert_eq!(severity_color(-3.0), SeverityTier::Danger);
        assert_eq!(severity_color(f64::INFINITY), SeverityTier::Success);
    }

    #[test]
    fn test_severity_nan_is_lowest_tier() {
        assert_eq!(severity_color(f64::NAN), SeverityTier::Danger);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(SeverityTier::Success.color(), "#00cc00");
        assert_eq!(SeverityTier::Warning.color(), "#ffcc00");
        assert_eq!(SeverityTier::Caution.color(), "#ff9933");
        assert_eq!(SeverityTier::Danger.color(), "#ff0000");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("hello", 0), "...");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Benzerlik ölçüsü", 11), "Benzerlik ö...");
        assert_eq!(truncate("çğı", 3), "çğı");
    }

    #[test]
    fn test_format_similarity() {
        assert_eq!(format_similarity(90.0), "90.00");
        assert_eq!(format_similarity(33.456), "33.46");
        assert_eq!(format_similarity(f64::NAN), "-");
    }

    #[test]
    fn test_card_from_record() {
        let record = ArticleRecord {
            id: "1".to_string(),
            title: "Tech".to_string(),
            published_date: "2023-01-01".to_string(),
            similarity: 60.0,
            description: "x".repeat(150),
            url_to_image: "https://img.example/1.png".to_string(),
            url: "https://news.example/1".to_string(),
        };
        let card = ArticleCard::from_record(&record, DEFAULT_EXCERPT_LENGTH);
        assert_eq!(card.severity, SeverityTier::Warning);
        assert_eq!(card.color, "#ffcc00");
        assert_eq!(card.similarity, "60.00");
        assert_eq!(card.excerpt.chars().count(), 103);
        assert!(card.excerpt.ends_with("..."));
        assert_eq!(card.url, "https://news.example/1");
    }
}
