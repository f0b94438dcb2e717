// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod ga4_client;
pub mod google_auth;
pub mod sheets_client;
