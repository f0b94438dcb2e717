// Response normalizer - flattens raw report rows into chart-ready records.
// Everything here is pure and synchronous; missing upstream values become
// zeros and missing row sets become empty lists, never absent fields.
use crate::application::analytics_repository::{Report, ReportRow};
use crate::application::metrics::{
    BREAKDOWN_METRICS, KPI_METRICS, KpiMetric, TREND_METRICS, position_of,
};
use crate::domain::dashboard::{CategoryBreakdown, KpiBlock, KpiValue, TrendPoint};

/// Palette cycled over device rows.
pub const DEVICE_PALETTE: [&str; 4] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444"];

/// Palette cycled over country rows.
pub const COUNTRY_PALETTE: [&str; 5] = ["#8b5cf6", "#ec4899", "#6366f1", "#14b8a6", "#f97316"];

/// Row 0 of the combined KPI report is the current period, row 1 the
/// previous one. Properties without enough history have no previous row;
/// those fields read as "0".
pub fn kpi_block(report: &Report) -> KpiBlock {
    let current = report.rows.first();
    let previous = report.rows.get(1);
    let pair = |metric: KpiMetric| {
        KpiValue::new(
            metric_value(current, &KPI_METRICS, metric),
            metric_value(previous, &KPI_METRICS, metric),
        )
    };

    KpiBlock {
        users: pair(KpiMetric::ActiveUsers),
        sessions: pair(KpiMetric::Sessions),
        conversions: pair(KpiMetric::Conversions),
        avg_duration: pair(KpiMetric::AverageSessionDuration),
    }
}

pub fn monthly_trend(report: &Report) -> Vec<TrendPoint> {
    trend_points(report, format_month_label)
}

pub fn daily_trend(report: &Report) -> Vec<TrendPoint> {
    trend_points(report, format_day_label)
}

fn trend_points(report: &Report, label: fn(&str) -> String) -> Vec<TrendPoint> {
    report
        .rows
        .iter()
        .map(|row| {
            TrendPoint::new(
                label(row.dimensions.first().map(String::as_str).unwrap_or("")),
                metric_count(row, &TREND_METRICS, KpiMetric::ActiveUsers),
                metric_count(row, &TREND_METRICS, KpiMetric::Sessions),
            )
        })
        .collect()
}

/// Dimension value to display name plus a palette color cycled by row
/// position. Color is positional, not tied to category identity across
/// refreshes.
pub fn breakdown(report: &Report, palette: &[&str]) -> Vec<CategoryBreakdown> {
    report
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| CategoryBreakdown {
            name: row
                .dimensions
                .first()
                .filter(|name| !name.is_empty())
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string()),
            value: metric_count(row, &BREAKDOWN_METRICS, KpiMetric::ActiveUsers),
            color: palette[index % palette.len()].to_string(),
        })
        .collect()
}

/// `YYYYMM` -> `YYYY/MM`; anything else passes through unchanged.
pub fn format_month_label(raw: &str) -> String {
    if raw.len() == 6 && raw.is_ascii() {
        format!("{}/{}", &raw[..4], &raw[4..6])
    } else {
        raw.to_string()
    }
}

/// `YYYYMMDD` -> `YYYY/MM/DD`; anything else passes through unchanged.
pub fn format_day_label(raw: &str) -> String {
    if raw.len() == 8 && raw.is_ascii() {
        format!("{}/{}/{}", &raw[..4], &raw[4..6], &raw[6..8])
    } else {
        raw.to_string()
    }
}

fn metric_value(row: Option<&ReportRow>, contract: &[KpiMetric], metric: KpiMetric) -> String {
    row.zip(position_of(contract, metric))
        .and_then(|(row, position)| row.metrics.get(position))
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| "0".to_string())
}

fn metric_count(row: &ReportRow, contract: &[KpiMetric], metric: KpiMetric) -> i64 {
    let value = metric_value(Some(row), contract, metric);
    let value = value.trim();
    value
        .parse::<i64>()
        .or_else(|_| value.parse::<f64>().map(|v| v as i64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(dimensions: &[&str], metrics: &[&str]) -> ReportRow {
        ReportRow {
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_month_label() {
        assert_eq!(format_month_label("202501"), "2025/01");
        assert_eq!(format_month_label("2025"), "2025");
        assert_eq!(format_month_label(""), "");
    }

    #[test]
    fn test_format_day_label() {
        assert_eq!(format_day_label("20250115"), "2025/01/15");
        assert_eq!(format_day_label("202501"), "202501");
    }

    #[test]
    fn test_kpi_block_maps_metric_positions() {
        let report = Report {
            rows: vec![
                row(&[], &["1500", "2400", "34", "185.2"]),
                row(&[], &["1200", "2100", "28", "190.0"]),
            ],
        };
        let kpi = kpi_block(&report);
        assert_eq!(kpi.users, KpiValue::new("1500".into(), "1200".into()));
        assert_eq!(kpi.sessions, KpiValue::new("2400".into(), "2100".into()));
        assert_eq!(kpi.conversions, KpiValue::new("34".into(), "28".into()));
        assert_eq!(kpi.avg_duration, KpiValue::new("185.2".into(), "190.0".into()));
    }

    #[test]
    fn test_kpi_block_zero_fills_missing_previous_row() {
        let report = Report {
            rows: vec![row(&[], &["1500", "2400", "34", "185.2"])],
        };
        let kpi = kpi_block(&report);
        assert_eq!(kpi.users.prev, "0");
        assert_eq!(kpi.avg_duration.prev, "0");
        assert_eq!(
            crate::domain::display::calculate_change(&kpi.users.value, &kpi.users.prev),
            "+0%"
        );
    }

    #[test]
    fn test_kpi_block_of_empty_report_is_all_zeros() {
        let kpi = kpi_block(&Report::default());
        assert_eq!(kpi.users, KpiValue::new("0".into(), "0".into()));
        assert_eq!(kpi.conversions, KpiValue::new("0".into(), "0".into()));
    }

    #[test]
    fn test_monthly_trend_reshapes_labels_and_counts() {
        let report = Report {
            rows: vec![
                row(&["202501"], &["800", "1200"]),
                row(&["202502"], &["950", "1400"]),
            ],
        };
        let trend = monthly_trend(&report);
        assert_eq!(trend[0], TrendPoint::new("2025/01".into(), 800, 1200));
        assert_eq!(trend[1], TrendPoint::new("2025/02".into(), 950, 1400));
    }

    #[test]
    fn test_daily_trend_defaults_missing_metrics_to_zero() {
        let report = Report {
            rows: vec![row(&["20250115"], &["140"])],
        };
        let daily = daily_trend(&report);
        assert_eq!(daily[0], TrendPoint::new("2025/01/15".into(), 140, 0));
    }

    #[test]
    fn test_empty_reports_normalize_to_empty_lists() {
        assert!(monthly_trend(&Report::default()).is_empty());
        assert!(daily_trend(&Report::default()).is_empty());
        assert!(breakdown(&Report::default(), &DEVICE_PALETTE).is_empty());
    }

    #[test]
    fn test_breakdown_names_and_counts() {
        let report = Report {
            rows: vec![
                row(&["mobile"], &["8500"]),
                row(&[""], &["5200"]),
                row(&["tablet"], &["not-a-number"]),
            ],
        };
        let devices = breakdown(&report, &DEVICE_PALETTE);
        assert_eq!(devices[0].name, "mobile");
        assert_eq!(devices[0].value, 8500);
        assert_eq!(devices[1].name, "Unknown");
        assert_eq!(devices[2].value, 0);
    }

    fn numbered_rows(count: usize) -> Vec<ReportRow> {
        (0..count)
            .map(|i| ReportRow {
                dimensions: vec![format!("entry{i}")],
                metrics: vec!["1".to_string()],
            })
            .collect()
    }

    #[test]
    fn test_breakdown_palette_cycles_by_row_position() {
        let report = Report {
            rows: numbered_rows(5),
        };
        let devices = breakdown(&report, &DEVICE_PALETTE);
        assert_eq!(devices[0].color, DEVICE_PALETTE[0]);
        assert_eq!(devices[3].color, DEVICE_PALETTE[3]);
        // Fifth row wraps back to the first palette entry
        assert_eq!(devices[4].color, DEVICE_PALETTE[0]);
    }

    #[test]
    fn test_country_palette_has_five_colors() {
        let report = Report {
            rows: numbered_rows(6),
        };
        let countries = breakdown(&report, &COUNTRY_PALETTE);
        assert_eq!(countries[4].color, COUNTRY_PALETTE[4]);
        assert_eq!(countries[5].color, COUNTRY_PALETTE[0]);
    }
}
