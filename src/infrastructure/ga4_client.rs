// GA4 Data API repository implementation
use crate::application::analytics_repository::{AnalyticsRepository, Report, ReportRequest, ReportRow};
use crate::application::error::DashboardError;
use crate::infrastructure::google_auth::GoogleAuthenticator;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

pub const GA4_API_HOST: &str = "https://analyticsdata.googleapis.com";

pub struct Ga4Client {
    auth: Arc<GoogleAuthenticator>,
    host: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RunReportResponse {
    #[serde(default)]
    rows: Vec<WireRow>,
}

#[derive(Debug, Deserialize)]
struct WireRow {
    #[serde(default, rename = "dimensionValues")]
    dimension_values: Vec<WireValue>,
    #[serde(default, rename = "metricValues")]
    metric_values: Vec<WireValue>,
}

#[derive(Debug, Deserialize)]
struct WireValue {
    #[serde(default)]
    value: String,
}

impl Ga4Client {
    pub fn new(auth: Arc<GoogleAuthenticator>, host: String) -> Self {
        Self {
            auth,
            host: host.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnalyticsRepository for Ga4Client {
    async fn run_report(
        &self,
        property_id: &str,
        request: ReportRequest,
    ) -> Result<Report, DashboardError> {
        let token = self.auth.bearer_token().await?;
        let url = format!("{}/v1beta/properties/{}:runReport", self.host, property_id);
        tracing::debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::UpstreamStatus {
                service: "GA4 Data API",
                status,
                body,
            });
        }

        let report: RunReportResponse = response.json().await?;
        Ok(Report {
            rows: report
                .rows
                .into_iter()
                .map(|row| ReportRow {
                    dimensions: row.dimension_values.into_iter().map(|v| v.value).collect(),
                    metrics: row.metric_values.into_iter().map(|v| v.value).collect(),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::analytics_repository::{DateRange, Dimension, Metric, OrderBy};
    use crate::infrastructure::google_auth::test_authenticator;
    use httpmock::prelude::*;
    use serde_json::json;

    async fn client(server: &MockServer) -> Ga4Client {
        server
            .mock_async(|when, then| {
                when.method(POST).path("/token");
                then.status(200)
                    .json_body(json!({"access_token": "tok", "expires_in": 3600}));
            })
            .await;
        Ga4Client::new(
            Arc::new(test_authenticator(&server.url("/token"))),
            server.base_url(),
        )
    }

    fn country_request() -> ReportRequest {
        ReportRequest {
            date_ranges: vec![DateRange::new("2024-07-15", "today")],
            dimensions: vec![Dimension::new("country")],
            metrics: vec![Metric::new("activeUsers")],
            order_bys: vec![OrderBy::metric_desc("activeUsers")],
            limit: Some(5),
        }
    }

    #[tokio::test]
    async fn test_run_report_posts_wire_body_and_flattens_rows() {
        let server = MockServer::start_async().await;
        let ga4 = client(&server).await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/properties/424242:runReport")
                    .header("authorization", "Bearer tok")
                    .json_body_partial(
                        json!({
                            "dimensions": [{"name": "country"}],
                            "metrics": [{"name": "activeUsers"}],
                            "limit": 5,
                        })
                        .to_string(),
                    );
                then.status(200).json_body(json!({
                    "dimensionHeaders": [{"name": "country"}],
                    "metricHeaders": [{"name": "activeUsers", "type": "TYPE_INTEGER"}],
                    "rows": [
                        {"dimensionValues": [{"value": "Japan"}], "metricValues": [{"value": "12400"}]},
                        {"dimensionValues": [{"value": "United States"}], "metricValues": [{"value": "1800"}]},
                    ],
                    "rowCount": 2,
                }));
            })
            .await;

        let report = ga4.run_report("424242", country_request()).await.unwrap();
        mock.assert_async().await;

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].dimensions, vec!["Japan".to_string()]);
        assert_eq!(report.rows[0].metrics, vec!["12400".to_string()]);
    }

    #[tokio::test]
    async fn test_rowless_response_is_an_empty_report() {
        let server = MockServer::start_async().await;
        let ga4 = client(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1beta/properties/424242:runReport");
                then.status(200).json_body(json!({"rowCount": 0}));
            })
            .await;

        let report = ga4.run_report("424242", country_request()).await.unwrap();
        assert!(report.rows.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_carries_status_and_body() {
        let server = MockServer::start_async().await;
        let ga4 = client(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1beta/properties/424242:runReport");
                then.status(429).body("RESOURCE_EXHAUSTED");
            })
            .await;

        let error = ga4.run_report("424242", country_request()).await.unwrap_err();
        match error {
            DashboardError::UpstreamStatus { service, status, body } => {
                assert_eq!(service, "GA4 Data API");
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "RESOURCE_EXHAUSTED");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
