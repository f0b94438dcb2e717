// Repository trait for the analytics reporting API
use crate::application::error::DashboardError;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dimension {
    pub name: String,
}

impl Dimension {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Metric {
    pub name: String,
}

impl Metric {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DimensionOrderBy {
    pub dimension_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricOrderBy {
    pub metric_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionOrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricOrderBy>,
    pub desc: bool,
}

impl OrderBy {
    pub fn dimension(name: &str) -> Self {
        Self {
            dimension: Some(DimensionOrderBy {
                dimension_name: name.to_string(),
            }),
            metric: None,
            desc: false,
        }
    }

    pub fn metric_desc(name: &str) -> Self {
        Self {
            dimension: None,
            metric: Some(MetricOrderBy {
                metric_name: name.to_string(),
            }),
            desc: true,
        }
    }
}

/// One report query: date range(s), dimensions, metrics, ordering, row limit.
/// Serializes directly to the reporting API's `runReport` request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub date_ranges: Vec<DateRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// One report row flattened to positional dimension and metric values.
/// Positions follow the order the request listed them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRow {
    pub dimensions: Vec<String>,
    pub metrics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Run a single report against a property.
    async fn run_report(
        &self,
        property_id: &str,
        request: ReportRequest,
    ) -> Result<Report, DashboardError>;
}
