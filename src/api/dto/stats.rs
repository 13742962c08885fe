//! DTOs for the per-slug statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::CountryCount;

/// Statistics for one short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub url: UrlInfo,
    pub top_countries: Vec<CountryInfo>,
}

/// Mapping metadata inside a stats response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlInfo {
    pub slug: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl From<UrlRecord> for UrlInfo {
    fn from(record: UrlRecord) -> Self {
        Self {
            slug: record.slug,
            original_url: record.original_url,
            created_at: record.created_at,
            click_count: record.click_count,
        }
    }
}

/// Click total for one country.
#[derive(Debug, Serialize)]
pub struct CountryInfo {
    pub country: String,
    pub count: i64,
}

impl From<CountryCount> for CountryInfo {
    fn from(entry: CountryCount) -> Self {
        Self {
            country: entry.country,
            count: entry.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_uses_camel_case() {
        let response = StatsResponse {
            url: UrlInfo::from(UrlRecord::new(
                "abc".to_string(),
                "https://example.com".to_string(),
                Utc::now(),
                3,
            )),
            top_countries: vec![CountryInfo {
                country: "DE".to_string(),
                count: 3,
            }],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("topCountries").is_some());
        assert!(value["url"].get("originalUrl").is_some());
        assert!(value["url"].get("clickCount").is_some());
        assert_eq!(value["topCountries"][0]["country"], "DE");
    }
}
