// Google Sheets repository implementation
use crate::application::error::DashboardError;
use crate::application::sheet_repository::SheetRepository;
use crate::infrastructure::google_auth::GoogleAuthenticator;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

pub const SHEETS_API_HOST: &str = "https://sheets.googleapis.com";

pub struct SheetsClient {
    auth: Arc<GoogleAuthenticator>,
    host: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl SheetsClient {
    pub fn new(auth: Arc<GoogleAuthenticator>, host: String) -> Self {
        Self {
            auth,
            host: host.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, DashboardError> {
        let token = self.auth.bearer_token().await?;
        tracing::debug!("GET {url}");

        let response = self.http.get(url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::UpstreamStatus {
                service: "Sheets API",
                status,
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl SheetRepository for SheetsClient {
    async fn first_sheet_title(&self, spreadsheet_id: &str) -> Result<String, DashboardError> {
        let url = format!(
            "{}/v4/spreadsheets/{}?includeGridData=false&fields=sheets.properties.title",
            self.host, spreadsheet_id
        );
        let meta: SpreadsheetMeta = self.get_json(&url).await?;

        meta.sheets
            .first()
            .map(|sheet| sheet.properties.title.clone())
            .filter(|title| !title.is_empty())
            .ok_or(DashboardError::NoSheets)
    }

    async fn value_rows(
        &self,
        spreadsheet_id: &str,
        sheet_title: &str,
    ) -> Result<Vec<Vec<String>>, DashboardError> {
        let range = format!("{sheet_title}!A:B");
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.host,
            spreadsheet_id,
            urlencoding::encode(&range)
        );
        let range_data: ValueRange = self.get_json(&url).await?;

        Ok(range_data
            .values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }
}

// Cells usually arrive as strings, but untyped sheets can surface numbers
fn cell_to_string(cell: &serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
