//! Fixed figures behind the dashboard and reports pages.

use serde::{Deserialize, Serialize};

/// A headline statistic card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub title: String,
    pub value: u32,
    /// Signed change in percent; negative means a decrease.
    pub change_percent: i32,
}

impl StatSummary {
    fn new(title: &str, value: u32, change_percent: i32) -> Self {
        Self {
            title: title.to_string(),
            value,
            change_percent,
        }
    }

    pub fn is_increase(&self) -> bool {
        self.change_percent >= 0
    }

    /// Arrow and magnitude, e.g. "↑ 12%".
    pub fn change_badge(&self) -> String {
        let arrow = if self.is_increase() { "↑" } else { "↓" };
        format!("{arrow} {}%", self.change_percent.unsigned_abs())
    }

    /// Sentence used on the reports cards, e.g. "3% decrease from last year".
    pub fn change_sentence(&self, period: ReportPeriod) -> String {
        let direction = if self.is_increase() { "increase" } else { "decrease" };
        format!(
            "{}% {direction} from last {}",
            self.change_percent.unsigned_abs(),
            period.as_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStatusPoint {
    pub month: String,
    pub pending: u32,
    pub investigation: u32,
    pub resolved: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub label: String,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub new: u32,
    pub resolved: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u32,
}

/// Officer row on the trends tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficerPerformance {
    pub name: String,
    pub cases_handled: u32,
    pub resolution_rate: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    #[default]
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "quarter")]
    Quarter,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "custom")]
    Custom,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Year,
        ReportPeriod::Quarter,
        ReportPeriod::Month,
        ReportPeriod::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Quarter => "quarter",
            Self::Month => "month",
            Self::Custom => "custom",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Year => "Annual (2081)",
            Self::Quarter => "Quarterly (Q2 2081)",
            Self::Month => "Monthly (Baishakh 2081)",
            Self::Custom => "Custom Range",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReportTab {
    #[default]
    #[serde(rename = "overview")]
    Overview,
    #[serde(rename = "cases")]
    Cases,
    #[serde(rename = "trends")]
    Trends,
}

impl ReportTab {
    pub const ALL: [ReportTab; 3] = [ReportTab::Overview, ReportTab::Cases, ReportTab::Trends];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Cases => "cases",
            Self::Trends => "trends",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Cases => "Case Analysis",
            Self::Trends => "Trends & Forecasts",
        }
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn monthly(pending: &[u32], investigation: &[u32], resolved: &[u32]) -> Vec<MonthlyStatusPoint> {
    MONTHS
        .iter()
        .zip(pending)
        .zip(investigation)
        .zip(resolved)
        .map(|(((month, p), i), r)| MonthlyStatusPoint {
            month: month.to_string(),
            pending: *p,
            investigation: *i,
            resolved: *r,
        })
        .collect()
}

fn counts(rows: &[(&str, u32)]) -> Vec<CategoryCount> {
    rows.iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count: *count,
        })
        .collect()
}

pub fn dashboard_stats() -> Vec<StatSummary> {
    vec![
        StatSummary::new("Total Cases", 358, 12),
        StatSummary::new("New Cases (Today)", 24, 8),
        StatSummary::new("Resolved Cases", 142, 5),
        StatSummary::new("Pending Review", 83, -3),
    ]
}

/// January to June, as charted on the dashboard.
pub fn dashboard_monthly_status() -> Vec<MonthlyStatusPoint> {
    monthly(
        &[12, 19, 15, 11, 18, 14],
        &[18, 14, 20, 15, 19, 22],
        &[5, 10, 8, 12, 15, 17],
    )
}

pub fn case_distribution() -> Vec<DistributionSlice> {
    [
        ("Property Disputes", 35),
        ("Theft", 25),
        ("Assault", 20),
        ("Fraud", 12),
        ("Others", 8),
    ]
    .into_iter()
    .map(|(label, percent)| DistributionSlice {
        label: label.to_string(),
        percent,
    })
    .collect()
}

pub fn report_stats() -> Vec<StatSummary> {
    vec![
        StatSummary::new("Total Cases", 358, 12),
        StatSummary::new("Pending Cases", 83, -3),
        StatSummary::new("Cases Under Investigation", 133, 8),
        StatSummary::new("Resolved Cases", 142, 5),
    ]
}

pub fn case_trend() -> Vec<TrendPoint> {
    let new = [65, 59, 80, 81, 56, 55, 72, 68, 74, 79, 85, 90];
    let resolved = [28, 48, 40, 52, 41, 35, 45, 48, 52, 53, 59, 62];
    MONTHS
        .iter()
        .zip(new.iter().zip(resolved.iter()))
        .map(|(month, (n, r))| TrendPoint {
            month: month.to_string(),
            new: *n,
            resolved: *r,
        })
        .collect()
}

pub fn case_type_counts() -> Vec<CategoryCount> {
    counts(&[
        ("Property", 125),
        ("Theft", 89),
        ("Assault", 72),
        ("Fraud", 43),
        ("Domestic", 25),
        ("Others", 4),
    ])
}

pub fn resolution_time_buckets() -> Vec<CategoryCount> {
    counts(&[
        ("< 1 month", 15),
        ("1-3 months", 35),
        ("3-6 months", 60),
        ("6-12 months", 25),
        ("> 12 months", 7),
    ])
}

pub fn yearly_status() -> Vec<MonthlyStatusPoint> {
    monthly(
        &[12, 19, 15, 11, 18, 14, 17, 13, 16, 15, 20, 21],
        &[18, 14, 20, 15, 19, 22, 25, 18, 21, 23, 19, 17],
        &[5, 10, 8, 12, 15, 17, 14, 18, 20, 22, 25, 27],
    )
}

pub fn officer_performance() -> Vec<OfficerPerformance> {
    [
        ("Inspector Rajesh Khatri", 54, 78),
        ("Officer Sunita Rai", 42, 65),
        ("Inspector Mohan Thapa", 35, 72),
        ("Officer Kiran Paudel", 28, 82),
        ("Inspector Sarita Gurung", 22, 68),
    ]
    .into_iter()
    .map(|(name, cases_handled, resolution_rate)| OfficerPerformance {
        name: name.to_string(),
        cases_handled,
        resolution_rate,
    })
    .collect()
}

pub fn geographic_distribution() -> Vec<CategoryCount> {
    counts(&[
        ("Kathmandu", 185),
        ("Lalitpur", 85),
        ("Bhaktapur", 45),
        ("Kavre", 20),
        ("Makwanpur", 15),
        ("Others", 8),
    ])
}

/// Monthly resolution rate in percent.
pub fn resolution_rate_trend() -> Vec<CategoryCount> {
    let rates = [42, 45, 48, 51, 53, 55, 58, 60, 62, 65, 68, 70];
    MONTHS
        .iter()
        .zip(rates)
        .map(|(month, count)| CategoryCount {
            label: month.to_string(),
            count,
        })
        .collect()
}

/// Bar height in percent of `max`, clamped to 0..=100.
pub fn bar_percent(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    ((u64::from(value) * 100) / u64::from(max)).min(100) as u32
}

/// Largest value in a set of bars, for scaling.
pub fn max_value<I: IntoIterator<Item = u32>>(values: I) -> u32 {
    values.into_iter().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bar_percent_scales_and_clamps() {
        assert_eq!(bar_percent(45, 90), 50);
        assert_eq!(bar_percent(90, 90), 100);
        assert_eq!(bar_percent(120, 90), 100);
        assert_eq!(bar_percent(5, 0), 0);
    }

    #[test]
    fn dashboard_chart_covers_six_months() {
        let points = dashboard_monthly_status();
        assert_eq!(points.len(), 6);
        assert_eq!(points[5].month, "Jun");
        assert_eq!(points[5].investigation, 22);
    }

    #[test]
    fn yearly_series_are_complete() {
        assert_eq!(yearly_status().len(), 12);
        assert_eq!(case_trend().len(), 12);
        assert_eq!(case_trend()[11].new, 90);
        assert_eq!(yearly_status()[11].resolved, 27);
    }

    #[test]
    fn change_text_uses_sign() {
        let pending = &dashboard_stats()[3];
        assert_eq!(pending.change_badge(), "↓ 3%");
        assert_eq!(
            pending.change_sentence(ReportPeriod::Year),
            "3% decrease from last year"
        );
        assert_eq!(dashboard_stats()[0].change_badge(), "↑ 12%");
    }

    #[test]
    fn distribution_sums_to_hundred() {
        let total: u32 = case_distribution().iter().map(|s| s.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn max_value_of_empty_is_zero() {
        assert_eq!(max_value(Vec::new()), 0);
        assert_eq!(max_value(case_type_counts().iter().map(|c| c.count)), 125);
    }
}
