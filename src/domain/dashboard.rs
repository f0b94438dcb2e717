// Dashboard payload domain model - the contract with the presentation layer
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiValue {
    pub value: String,
    pub prev: String,
}

impl KpiValue {
    pub fn new(value: String, prev: String) -> Self {
        Self { value, prev }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiBlock {
    pub users: KpiValue,
    pub sessions: KpiValue,
    pub conversions: KpiValue,
    #[serde(rename = "avgDuration")]
    pub avg_duration: KpiValue,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub name: String,
    pub users: i64,
    pub sessions: i64,
}

impl TrendPoint {
    pub fn new(name: String, users: i64, sessions: i64) -> Self {
        Self {
            name,
            users,
            sessions,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryBreakdown {
    pub name: String,
    pub value: i64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardPayload {
    pub kpi: KpiBlock,
    pub trend: Vec<TrendPoint>,
    pub daily: Vec<TrendPoint>,
    pub device: Vec<CategoryBreakdown>,
    pub country: Vec<CategoryBreakdown>,
    #[serde(rename = "propertyId")]
    pub property_id: String,
    pub degraded: bool,
}

const FALLBACK_TREND: [(&str, i64, i64); 12] = [
    ("2025/02", 800, 1200),
    ("2025/03", 950, 1400),
    ("2025/04", 1100, 1600),
    ("2025/05", 1050, 1550),
    ("2025/06", 1200, 1800),
    ("2025/07", 1350, 1950),
    ("2025/08", 1500, 2200),
    ("2025/09", 1400, 2100),
    ("2025/10", 1600, 2400),
    ("2025/11", 1800, 2700),
    ("2025/12", 1900, 2850),
    ("2026/01", 2100, 3100),
];

const FALLBACK_DAILY: [(&str, i64, i64); 30] = [
    ("01/12", 120, 180),
    ("01/13", 150, 220),
    ("01/14", 130, 190),
    ("01/15", 140, 210),
    ("01/16", 180, 260),
    ("01/17", 210, 310),
    ("01/18", 230, 340),
    ("01/19", 160, 240),
    ("01/20", 150, 230),
    ("01/21", 140, 220),
    ("01/22", 170, 250),
    ("01/23", 190, 280),
    ("01/24", 220, 330),
    ("01/25", 240, 360),
    ("01/26", 160, 240),
    ("01/27", 150, 230),
    ("01/28", 140, 210),
    ("01/29", 130, 200),
    ("01/30", 170, 260),
    ("01/31", 210, 310),
    ("02/01", 230, 340),
    ("02/02", 160, 240),
    ("02/03", 150, 230),
    ("02/04", 140, 210),
    ("02/05", 130, 200),
    ("02/06", 170, 260),
    ("02/07", 210, 310),
    ("02/08", 230, 340),
    ("02/09", 160, 240),
    ("02/10", 150, 230),
];

const FALLBACK_DEVICE: [(&str, i64, &str); 3] = [
    ("Mobile", 8500, "#3b82f6"),
    ("Desktop", 5200, "#10b981"),
    ("Tablet", 1720, "#f59e0b"),
];

const FALLBACK_COUNTRY: [(&str, i64, &str); 5] = [
    ("Japan", 12400, "#8b5cf6"),
    ("United States", 1800, "#ec4899"),
    ("Taiwan", 650, "#6366f1"),
    ("Korea", 320, "#14b8a6"),
    ("China", 250, "#f97316"),
];

impl DashboardPayload {
    /// Fixed dataset a consumer can substitute when the live fetch fails,
    /// marked `degraded` so the substitution stays distinguishable from
    /// real analytics data.
    pub fn fallback() -> Self {
        let kpi_value = |value: &str, prev: &str| KpiValue::new(value.to_string(), prev.to_string());
        Self {
            kpi: KpiBlock {
                users: kpi_value("15420", "12000"),
                sessions: kpi_value("24500", "21000"),
                conversions: kpi_value("340", "280"),
                avg_duration: kpi_value("185", "190"),
            },
            trend: FALLBACK_TREND
                .iter()
                .map(|(name, users, sessions)| TrendPoint::new(name.to_string(), *users, *sessions))
                .collect(),
            daily: FALLBACK_DAILY
                .iter()
                .map(|(name, users, sessions)| TrendPoint::new(name.to_string(), *users, *sessions))
                .collect(),
            device: FALLBACK_DEVICE
                .iter()
                .map(|(name, value, color)| CategoryBreakdown {
                    name: name.to_string(),
                    value: *value,
                    color: color.to_string(),
                })
                .collect(),
            country: FALLBACK_COUNTRY
                .iter()
                .map(|(name, value, color)| CategoryBreakdown {
                    name: name.to_string(),
                    value: *value,
                    color: color.to_string(),
                })
                .collect(),
            property_id: String::new(),
            degraded: true,
        }
    }
}
