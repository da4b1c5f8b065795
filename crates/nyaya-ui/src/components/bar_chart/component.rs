use dioxus::prelude::*;

use crate::components::badge::BadgeVariant;

/// Vertical bar chart drawn with CSS. Heights are percentages the caller
/// has already scaled against the chart maximum.
#[component]
pub fn BarChart(
    #[props(default)] aria_label: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "bar-chart", role: "img", "aria-label": "{aria_label}",
            {children}
        }
    }
}

/// One x-axis position holding one bar per series.
#[component]
pub fn BarGroup(label: String, children: Element) -> Element {
    rsx! {
        div { class: "bar-group",
            div { class: "bar-group-bars", {children} }
            span { class: "bar-group-label", "{label}" }
        }
    }
}

#[component]
pub fn Bar(percent: u32, value: u32, #[props(default)] variant: BadgeVariant) -> Element {
    let height = percent.min(100);
    rsx! {
        div {
            class: "bar",
            "data-style": variant.class(),
            style: "height: {height}%",
            title: "{value}",
        }
    }
}

#[component]
pub fn ChartLegend(children: Element) -> Element {
    rsx! {
        div { class: "chart-legend", {children} }
    }
}

#[component]
pub fn LegendItem(label: String, #[props(default)] variant: BadgeVariant) -> Element {
    rsx! {
        span { class: "legend-item",
            span { class: "legend-swatch", "data-style": variant.class() }
            "{label}"
        }
    }
}

/// Labelled horizontal bar for distributions and rankings.
#[component]
pub fn MeterRow(
    label: String,
    value_label: String,
    percent: u32,
    #[props(default)] variant: BadgeVariant,
) -> Element {
    let width = percent.min(100);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "meter-row",
            div { class: "meter-row-text",
                span { "{label}" }
                span { class: "meter-row-value", "{value_label}" }
            }
            div { class: "meter-track",
                div {
                    class: "meter-fill",
                    "data-style": variant.class(),
                    style: "width: {width}%",
                }
            }
        }
    }
}
