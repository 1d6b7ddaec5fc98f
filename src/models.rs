//! Record types shared by the transform pipeline and the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog entry type for films.
pub const TYPE_MOVIE: &str = "Movie";
/// Catalog entry type for series.
pub const TYPE_TV_SHOW: &str = "TV Show";

/// One row of the raw CSV export, before cleaning.
///
/// Every field is optional: the export routinely leaves cells blank, and
/// older revisions of the file drop whole columns. Empty CSV cells
/// deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub show_id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}

/// One normalized catalog entry in the artifact.
///
/// Invariants:
/// - `director`, `cast`, `country` are never empty; missing values become
///   the literal `"Unknown"`.
/// - `date_added` is `None` (JSON `null`) when the raw string did not
///   parse; the derived fields then fall back to `0` / `"Unknown"`.
/// - `listed_in` is the raw comma-separated field split on `", "`.
/// - No field ever serializes as a NaN/NaT sentinel; absence is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub show_id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub title: Option<String>,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Vec<String>,
    pub description: Option<String>,
    pub year_added: i32,
    pub month_added: String,
    pub day_added: String,
}

/// Aggregate counts over the artifact, computed on demand and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_titles: usize,
    pub movies: usize,
    pub tv_shows: usize,
}

impl StatsSummary {
    /// Count totals over a batch of cleaned records.
    pub fn from_records(records: &[CleanedRecord]) -> Self {
        let of_type = |wanted: &str| {
            records
                .iter()
                .filter(|r| r.record_type.as_deref() == Some(wanted))
                .count()
        };
        Self {
            total_titles: records.len(),
            movies: of_type(TYPE_MOVIE),
            tv_shows: of_type(TYPE_TV_SHOW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(record_type: Option<&str>) -> CleanedRecord {
        CleanedRecord {
            show_id: None,
            record_type: record_type.map(str::to_string),
            title: None,
            director: "Unknown".to_string(),
            cast: "Unknown".to_string(),
            country: "Unknown".to_string(),
            date_added: None,
            release_year: None,
            rating: None,
            duration: None,
            listed_in: vec![String::new()],
            description: None,
            year_added: 0,
            month_added: "Unknown".to_string(),
            day_added: "Unknown".to_string(),
        }
    }

    #[test]
    fn stats_count_by_type() {
        let records = vec![
            record(Some(TYPE_MOVIE)),
            record(Some(TYPE_MOVIE)),
            record(Some(TYPE_TV_SHOW)),
            record(None),
        ];
        let stats = StatsSummary::from_records(&records);
        assert_eq!(stats.total_titles, 4);
        assert_eq!(stats.movies, 2);
        assert_eq!(stats.tv_shows, 1);
    }

    #[test]
    fn stats_of_empty_artifact_are_zero() {
        let stats = StatsSummary::from_records(&[]);
        assert_eq!(stats.total_titles, 0);
        assert_eq!(stats.movies, 0);
        assert_eq!(stats.tv_shows, 0);
    }

    #[test]
    fn cleaned_record_serializes_type_field_name() {
        let json = serde_json::to_value(record(Some(TYPE_MOVIE))).unwrap();
        assert_eq!(json["type"], "Movie");
        assert!(json.get("record_type").is_none());
        // Absent values must be null, never a sentinel string.
        assert!(json["date_added"].is_null());
        assert!(json["release_year"].is_null());
    }
}
