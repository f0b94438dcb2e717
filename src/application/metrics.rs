// Ordering contract shared by report construction and row parsing.
// Every metrics list is built from one of the ordered arrays below, and
// every row read resolves its position against the same array, so request
// and parse can never drift apart silently.
use crate::application::analytics_repository::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiMetric {
    ActiveUsers,
    Sessions,
    Conversions,
    AverageSessionDuration,
}

impl KpiMetric {
    pub fn api_name(self) -> &'static str {
        match self {
            KpiMetric::ActiveUsers => "activeUsers",
            KpiMetric::Sessions => "sessions",
            KpiMetric::Conversions => "conversions",
            KpiMetric::AverageSessionDuration => "averageSessionDuration",
        }
    }
}

/// Metric order for the KPI totals report.
pub const KPI_METRICS: [KpiMetric; 4] = [
    KpiMetric::ActiveUsers,
    KpiMetric::Sessions,
    KpiMetric::Conversions,
    KpiMetric::AverageSessionDuration,
];

/// Metric order for the monthly and daily trend reports.
pub const TREND_METRICS: [KpiMetric; 2] = [KpiMetric::ActiveUsers, KpiMetric::Sessions];

/// The single metric the device and country breakdowns rank by.
pub const BREAKDOWN_METRICS: [KpiMetric; 1] = [KpiMetric::ActiveUsers];

/// Wire metrics for a request, in contract order.
pub fn metrics_for(ordered: &[KpiMetric]) -> Vec<Metric> {
    ordered.iter().map(|m| Metric::new(m.api_name())).collect()
}

/// Position of a metric within a request contract, if it was requested.
pub fn position_of(contract: &[KpiMetric], metric: KpiMetric) -> Option<usize> {
    contract.iter().position(|m| *m == metric)
}
