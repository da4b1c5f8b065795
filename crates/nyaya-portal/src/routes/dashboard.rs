use dioxus::prelude::*;
use nyaya_types::reports::{self, ReportPeriod};
use nyaya_types::RecordStore;
use nyaya_ui::{
    BadgeVariant, Card, CardContent, CardHeader, CardTitle, MeterRow, PageHeader, PageSubtitle,
    PageTitle, StatCard, StatGrid,
};

use crate::components::{CaseTable, MonthlyStatusChart};

const RECENT_CASES: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let store = use_context::<RecordStore>();
    let stats = reports::dashboard_stats();
    let monthly = reports::dashboard_monthly_status();
    let distribution = reports::case_distribution();
    let recent = store.recent_cases(RECENT_CASES).to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Dashboard" }
                PageSubtitle { "Overview of petition management system" }
            }

            StatGrid {
                for stat in stats.iter() {
                    StatCard {
                        key: "{stat.title}",
                        title: stat.title.clone(),
                        value: stat.value.to_string(),
                        change: stat.change_badge(),
                        increase: stat.is_increase(),
                        caption: stat.change_sentence(ReportPeriod::Month),
                    }
                }
            }

            div { class: "dashboard-charts",
                Card { class: "dashboard-chart-card",
                    CardHeader { CardTitle { "Case Status Overview" } }
                    CardContent {
                        MonthlyStatusChart { points: monthly }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Case Distribution" } }
                    CardContent {
                        div { class: "dashboard-distribution",
                            for slice in distribution.iter() {
                                MeterRow {
                                    key: "{slice.label}",
                                    label: slice.label.clone(),
                                    value_label: format!("{}%", slice.percent),
                                    percent: slice.percent,
                                    variant: BadgeVariant::Primary,
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Recent Cases" } }
                CardContent {
                    CaseTable { cases: recent }
                }
            }
        }
    }
}
