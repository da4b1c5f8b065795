use dioxus::prelude::*;
use nyaya_types::reports::{bar_percent, max_value, MonthlyStatusPoint};
use nyaya_types::CaseStatus;
use nyaya_ui::{Bar, BarChart, BarGroup, ChartLegend, LegendItem};

use crate::format_helpers::status_badge_variant;

/// Grouped bars of pending, investigation and resolved counts per month.
#[component]
pub fn MonthlyStatusChart(points: Vec<MonthlyStatusPoint>) -> Element {
    let max = max_value(
        points
            .iter()
            .flat_map(|p| [p.pending, p.investigation, p.resolved]),
    );
    let pending = status_badge_variant(CaseStatus::Pending);
    let investigation = status_badge_variant(CaseStatus::Investigation);
    let resolved = status_badge_variant(CaseStatus::Resolved);

    rsx! {
        BarChart { aria_label: "Cases by status per month",
            for point in points.iter() {
                BarGroup { key: "{point.month}", label: point.month.clone(),
                    Bar { percent: bar_percent(point.pending, max), value: point.pending, variant: pending }
                    Bar { percent: bar_percent(point.investigation, max), value: point.investigation, variant: investigation }
                    Bar { percent: bar_percent(point.resolved, max), value: point.resolved, variant: resolved }
                }
            }
        }
        ChartLegend {
            LegendItem { label: "Pending", variant: pending }
            LegendItem { label: "Under Investigation", variant: investigation }
            LegendItem { label: "Resolved", variant: resolved }
        }
    }
}
