// Property resolution through the lookup spreadsheet
use crate::application::error::DashboardError;
use crate::application::sheet_repository::SheetRepository;
use crate::domain::site::SiteConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct PropertyResolver {
    repository: Arc<dyn SheetRepository>,
    sheet_url: String,
}

impl PropertyResolver {
    pub fn new(repository: Arc<dyn SheetRepository>, sheet_url: String) -> Self {
        Self {
            repository,
            sheet_url,
        }
    }

    /// Look up a property ID in the sheet. With a site name, the first row
    /// whose column A matches wins; without one, the first data row below
    /// the header. `Ok(None)` means the sheet had no answer, which is the
    /// caller's lookup miss rather than a failure here.
    pub async fn resolve(&self, site_name: Option<&str>) -> Result<Option<String>, DashboardError> {
        let spreadsheet_id = parse_spreadsheet_id(&self.sheet_url)?;
        let title = self.repository.first_sheet_title(&spreadsheet_id).await?;
        tracing::debug!("resolving property from sheet tab {title:?}");

        let rows = self.repository.value_rows(&spreadsheet_id, &title).await?;
        if rows.is_empty() {
            return Err(DashboardError::EmptySheet);
        }

        let sites: Vec<SiteConfig> = rows.iter().map(|row| SiteConfig::from_row(row)).collect();
        let found = match site_name {
            Some(name) => sites.iter().find(|site| site.site_name == name),
            // Row 0 is the header; the first data row sits below it
            None => sites.get(1),
        };

        Ok(found
            .map(|site| site.property_id.clone())
            .filter(|id| !id.is_empty()))
    }
}

/// Extract the spreadsheet ID out of a share URL. Handles both
/// `.../d/<id>/edit#gid=0` and a bare `.../d/<id>` ending the URL.
pub fn parse_spreadsheet_id(url: &str) -> Result<String, DashboardError> {
    let id = url
        .split_once("/d/")
        .map(|(_, rest)| rest.split('/').next().unwrap_or(""))
        .unwrap_or("");
    if id.is_empty() {
        tracing::warn!("invalid spreadsheet URL: {url}");
        return Err(DashboardError::InvalidSpreadsheetUrl(url.to_string()));
    }
    Ok(id.to_string())
}
