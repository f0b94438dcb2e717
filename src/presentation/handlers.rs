// HTTP request handlers
use crate::application::error::DashboardError;
use crate::domain::dashboard::DashboardPayload;
use crate::presentation::app_state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Explicit GA4 property; an empty value falls through to the sheet.
    #[serde(rename = "propertyId")]
    pub property_id: Option<String>,
    /// Optional site-name filter for the sheet lookup.
    pub site: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard data for one analytics property
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardPayload>, DashboardError> {
    let payload = state
        .dashboard_service
        .get_dashboard(query.property_id.as_deref(), query.site.as_deref())
        .await?;

    Ok(Json(payload))
}
