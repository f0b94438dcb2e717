// Repository trait for spreadsheet access
use crate::application::error::DashboardError;
use async_trait::async_trait;

#[async_trait]
pub trait SheetRepository: Send + Sync {
    /// Title of the first tab in the spreadsheet. Tabs get renamed, so the
    /// title is discovered from metadata rather than assumed.
    async fn first_sheet_title(&self, spreadsheet_id: &str) -> Result<String, DashboardError>;

    /// Rows of columns A and B from the named tab.
    async fn value_rows(
        &self,
        spreadsheet_id: &str,
        sheet_title: &str,
    ) -> Result<Vec<Vec<String>>, DashboardError>;
}
