// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::application::property_resolver::PropertyResolver;
use crate::application::report_gateway::ReportGateway;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::ga4_client::{GA4_API_HOST, Ga4Client};
use crate::infrastructure::google_auth::{GOOGLE_TOKEN_URL, GoogleAuthenticator, ServiceAccountKey};
use crate::infrastructure::sheets_client::{SHEETS_API_HOST, SheetsClient};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration - missing credentials abort startup
    let settings = load_settings()
        .context("GOOGLE_CLIENT_EMAIL, GOOGLE_PRIVATE_KEY and GOOGLE_SHEET_URL must be set")?;

    // Build the service-account identity (shared by both API clients)
    let key = ServiceAccountKey::new(
        settings.google_client_email.clone(),
        &settings.google_private_key,
    );
    let auth = Arc::new(
        GoogleAuthenticator::new(&key, GOOGLE_TOKEN_URL)
            .context("service-account key is not a usable RSA PEM")?,
    );

    // Create repositories (infrastructure layer)
    let sheets = Arc::new(SheetsClient::new(auth.clone(), SHEETS_API_HOST.to_string()));
    let analytics = Arc::new(Ga4Client::new(auth.clone(), GA4_API_HOST.to_string()));

    // Create services (application layer)
    let resolver = PropertyResolver::new(sheets, settings.google_sheet_url.clone());
    let gateway = ReportGateway::new(analytics);
    let dashboard_service = DashboardService::new(resolver, gateway);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/ga4", get(get_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    println!("Starting ga4-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
