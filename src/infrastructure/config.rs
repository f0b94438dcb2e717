use serde::Deserialize;

/// Environment-sourced settings. All three are required; the service
/// refuses to start without them.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// GOOGLE_CLIENT_EMAIL - service-account identity
    pub google_client_email: String,
    /// GOOGLE_PRIVATE_KEY - service-account PEM key, possibly with escaped
    /// newlines from the deployment platform
    pub google_private_key: String,
    /// GOOGLE_SHEET_URL - share URL of the property lookup spreadsheet
    pub google_sheet_url: String,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::Environment::default())
        .build()?;

    Ok(settings.try_deserialize()?)
}
