use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChartColumn, LdDownload, LdFileText, LdPrinter, LdTrendingUp,
};
use dioxus_free_icons::Icon;
use nyaya_types::reports::{
    self, bar_percent, max_value, CategoryCount, ReportPeriod, ReportTab, TrendPoint,
};
use nyaya_ui::{
    Bar, BarChart, BarGroup, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, ChartLegend, FormSelect, LegendItem, MeterRow,
    PageActions, PageHeader, PageSubtitle, PageTitle, StatCard, StatGrid, TabContent, TabList,
    TabTrigger, Tabs,
};

use crate::components::MonthlyStatusChart;

#[component]
pub fn Reports() -> Element {
    let mut period = use_signal(ReportPeriod::default);
    let stats = reports::report_stats();
    let current = period();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Reports & Analytics" }
                    PageSubtitle { "Statistical overview and analytical reports" }
                }
                PageActions {
                    FormSelect {
                        value: current.as_str().to_string(),
                        onchange: move |evt: Event<FormData>| {
                            let next = ReportPeriod::from_str_opt(&evt.value()).unwrap_or_default();
                            tracing::debug!(period = next.as_str(), "report period changed");
                            period.set(next);
                        },
                        for p in ReportPeriod::ALL {
                            option { key: "{p.as_str()}", value: p.as_str(), "{p.label()}" }
                        }
                    }
                    Button { variant: ButtonVariant::Outline,
                        Icon::<LdPrinter> { icon: LdPrinter, width: 16, height: 16 }
                        "Print Report"
                    }
                    Button { variant: ButtonVariant::Primary,
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                        "Export Data"
                    }
                }
            }

            StatGrid {
                for stat in stats.iter() {
                    StatCard {
                        key: "{stat.title}",
                        title: stat.title.clone(),
                        value: stat.value.to_string(),
                        change: stat.change_badge(),
                        increase: stat.is_increase(),
                        caption: stat.change_sentence(current),
                    }
                }
            }

            Tabs { default_value: ReportTab::default().as_str().to_string(), horizontal: true,
                TabList {
                    for (index, tab) in ReportTab::ALL.iter().enumerate() {
                        TabTrigger { key: "{tab.as_str()}", value: tab.as_str().to_string(), index,
                            match tab {
                                ReportTab::Overview => rsx! { Icon::<LdChartColumn> { icon: LdChartColumn, width: 16, height: 16 } },
                                ReportTab::Cases => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 } },
                                ReportTab::Trends => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 } },
                            }
                            "{tab.label()}"
                        }
                    }
                }
                TabContent { value: ReportTab::Overview.as_str().to_string(), index: 0usize,
                    div { class: "two-column",
                        ReportCard { title: "Case Trend", description: "New and resolved cases over time",
                            TrendChart { points: reports::case_trend() }
                        }
                        ReportCard { title: "Case Types Distribution", description: "Breakdown of different case categories",
                            CountMeters { counts: reports::case_type_counts(), suffix: " cases" }
                        }
                    }
                }
                TabContent { value: ReportTab::Cases.as_str().to_string(), index: 1usize,
                    div { class: "two-column",
                        ReportCard { title: "Case Types", description: "Registered cases per category",
                            CountBars { counts: reports::case_type_counts(), label: "Cases by type", variant: BadgeVariant::Primary }
                        }
                        ReportCard { title: "Case Resolution Time", description: "Time taken to resolve cases",
                            CountBars { counts: reports::resolution_time_buckets(), label: "Cases by resolution time", variant: BadgeVariant::Info }
                        }
                    }
                }
                TabContent { value: ReportTab::Trends.as_str().to_string(), index: 2usize,
                    div { class: "reports-stack",
                        ReportCard { title: "Monthly Case Status", description: "Monthly breakdown of case statuses",
                            MonthlyStatusChart { points: reports::yearly_status() }
                        }
                        div { class: "two-column",
                            ReportCard { title: "Officer Performance", description: "Cases handled and resolution rate by officer",
                                div { class: "officer-list",
                                    for officer in reports::officer_performance() {
                                        MeterRow {
                                            key: "{officer.name}",
                                            label: officer.name.clone(),
                                            value_label: format!(
                                                "{} cases handled, {}% resolution rate",
                                                officer.cases_handled, officer.resolution_rate
                                            ),
                                            percent: officer.resolution_rate,
                                            variant: BadgeVariant::Success,
                                        }
                                    }
                                }
                            }
                            ReportCard { title: "Geographic Distribution", description: "Case distribution by district",
                                CountMeters { counts: reports::geographic_distribution(), suffix: " cases" }
                            }
                        }
                        ReportCard { title: "Resolution Rate Trend", description: "Share of cases resolved each month",
                            CountBars { counts: reports::resolution_rate_trend(), label: "Resolution rate per month", variant: BadgeVariant::Success }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportCard(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "{description}" }
            }
            CardContent { {children} }
        }
    }
}

/// New vs resolved bars per month.
#[component]
fn TrendChart(points: Vec<TrendPoint>) -> Element {
    let max = max_value(points.iter().flat_map(|p| [p.new, p.resolved]));

    rsx! {
        BarChart { aria_label: "New and resolved cases per month",
            for point in points.iter() {
                BarGroup { key: "{point.month}", label: point.month.clone(),
                    Bar { percent: bar_percent(point.new, max), value: point.new, variant: BadgeVariant::Primary }
                    Bar { percent: bar_percent(point.resolved, max), value: point.resolved, variant: BadgeVariant::Success }
                }
            }
        }
        ChartLegend {
            LegendItem { label: "New Cases", variant: BadgeVariant::Primary }
            LegendItem { label: "Resolved Cases", variant: BadgeVariant::Success }
        }
    }
}

#[component]
fn CountBars(counts: Vec<CategoryCount>, label: &'static str, variant: BadgeVariant) -> Element {
    let max = max_value(counts.iter().map(|c| c.count));

    rsx! {
        BarChart { aria_label: label.to_string(),
            for row in counts.iter() {
                BarGroup { key: "{row.label}", label: row.label.clone(),
                    Bar { percent: bar_percent(row.count, max), value: row.count, variant }
                }
            }
        }
    }
}

/// Horizontal meters scaled against the largest count.
#[component]
fn CountMeters(counts: Vec<CategoryCount>, suffix: &'static str) -> Element {
    let max = max_value(counts.iter().map(|c| c.count));

    rsx! {
        div { class: "count-meters",
            for row in counts.iter() {
                MeterRow {
                    key: "{row.label}",
                    label: row.label.clone(),
                    value_label: format!("{}{suffix}", row.count),
                    percent: bar_percent(row.count, max),
                }
            }
        }
    }
}
