// Report gateway - the fixed fan-out of analytics queries
use crate::application::analytics_repository::{
    AnalyticsRepository, DateRange, Dimension, OrderBy, Report, ReportRequest,
};
use crate::application::error::DashboardError;
use crate::application::metrics::{
    BREAKDOWN_METRICS, KPI_METRICS, KpiMetric, TREND_METRICS, metrics_for,
};
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;

const TOP_COUNTRY_LIMIT: i64 = 5;

/// Raw results of the five dashboard reports.
#[derive(Debug, Default)]
pub struct ReportBundle {
    pub kpi: Report,
    pub trend: Report,
    pub device: Report,
    pub daily: Report,
    pub country: Report,
}

/// The three date windows every refresh queries: a trailing year ending
/// "today", the year immediately before it, and a trailing 30 days for
/// daily granularity.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportWindows {
    pub current_year: DateRange,
    pub previous_year: DateRange,
    pub last_30_days: DateRange,
}

pub fn report_windows(today: NaiveDate) -> ReportWindows {
    let current_start = today - Duration::days(365);
    let previous_end = current_start - Duration::days(1);
    let previous_start = previous_end - Duration::days(365);
    let daily_start = today - Duration::days(30);

    ReportWindows {
        current_year: DateRange::new(format_date(current_start), "today"),
        previous_year: DateRange::new(format_date(previous_start), format_date(previous_end)),
        last_30_days: DateRange::new(format_date(daily_start), format_date(today)),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Clone)]
pub struct ReportGateway {
    repository: Arc<dyn AnalyticsRepository>,
}

impl ReportGateway {
    pub fn new(repository: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn fetch_all(&self, property_id: &str) -> Result<ReportBundle, DashboardError> {
        let windows = report_windows(Utc::now().date_naive());
        self.fetch_all_in(property_id, &windows).await
    }

    /// All five reports run concurrently; the first failure fails the whole
    /// refresh, there are no partial results.
    pub async fn fetch_all_in(
        &self,
        property_id: &str,
        windows: &ReportWindows,
    ) -> Result<ReportBundle, DashboardError> {
        let (kpi, trend, device, daily, country) = tokio::try_join!(
            self.repository.run_report(property_id, kpi_request(windows)),
            self.repository.run_report(property_id, trend_request(windows)),
            self.repository.run_report(property_id, device_request(windows)),
            self.repository.run_report(property_id, daily_request(windows)),
            self.repository.run_report(property_id, country_request(windows)),
        )?;

        Ok(ReportBundle {
            kpi,
            trend,
            device,
            daily,
            country,
        })
    }
}

/// KPI totals over both yearly windows; one row per window.
fn kpi_request(windows: &ReportWindows) -> ReportRequest {
    ReportRequest {
        date_ranges: vec![windows.current_year.clone(), windows.previous_year.clone()],
        dimensions: vec![],
        metrics: metrics_for(&KPI_METRICS),
        order_bys: vec![],
        limit: None,
    }
}

/// Monthly active users and sessions across the current year, in
/// chronological order.
fn trend_request(windows: &ReportWindows) -> ReportRequest {
    ReportRequest {
        date_ranges: vec![windows.current_year.clone()],
        dimensions: vec![Dimension::new("yearMonth")],
        metrics: metrics_for(&TREND_METRICS),
        order_bys: vec![OrderBy::dimension("yearMonth")],
        limit: None,
    }
}

/// Device category breakdown; the UI asserts priority through palette
/// order, so no explicit sort is requested.
fn device_request(windows: &ReportWindows) -> ReportRequest {
    ReportRequest {
        date_ranges: vec![windows.current_year.clone()],
        dimensions: vec![Dimension::new("deviceCategory")],
        metrics: metrics_for(&BREAKDOWN_METRICS),
        order_bys: vec![],
        limit: None,
    }
}

/// Daily activity over the trailing 30 days, in chronological order.
fn daily_request(windows: &ReportWindows) -> ReportRequest {
    ReportRequest {
        date_ranges: vec![windows.last_30_days.clone()],
        dimensions: vec![Dimension::new("date")],
        metrics: metrics_for(&TREND_METRICS),
        order_bys: vec![OrderBy::dimension("date")],
        limit: None,
    }
}

/// Top countries by active users across the current year.
fn country_request(windows: &ReportWindows) -> ReportRequest {
    ReportRequest {
        date_ranges: vec![windows.current_year.clone()],
        dimensions: vec![Dimension::new("country")],
        metrics: metrics_for(&BREAKDOWN_METRICS),
        order_bys: vec![OrderBy::metric_desc(KpiMetric::ActiveUsers.api_name())],
        limit: Some(TOP_COUNTRY_LIMIT),
    }
}
