// Dashboard domain model - Per-widget trend requests and results
use super::sample::Series;
use super::trend::{PartialTrendOptions, TrendResult};
use serde::{Deserialize, Serialize};

/// One metric widget on a dashboard page
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetTrendRequest {
    pub id: String,
    pub current: Series,
    #[serde(default)]
    pub previous: Option<Series>,
    #[serde(default)]
    pub options: PartialTrendOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetTrend {
    pub id: String,
    pub result: TrendResult,
}

impl WidgetTrend {
    pub fn new(id: String, result: TrendResult) -> Self {
        Self { id, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_request_optional_fields() {
        let request: WidgetTrendRequest = serde_json::from_str(
            r#"{"id":"spend","current":[{"ts":"2024-01-01","value":3}]}"#,
        )
        .unwrap();
        assert_eq!(request.id, "spend");
        assert_eq!(request.current.len(), 1);
        assert!(request.previous.is_none());
        assert_eq!(request.options, PartialTrendOptions::default());
    }
}
