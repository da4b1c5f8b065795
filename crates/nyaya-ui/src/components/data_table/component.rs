use dioxus::prelude::*;

/// Scrollable table wrapper.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Plain column header.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Current ordering of a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "↕",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }

    fn aria(&self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "none",
            SortIndicator::Ascending => "ascending",
            SortIndicator::Descending => "descending",
        }
    }
}

/// Column header that reports clicks so the page can toggle its sort.
#[component]
pub fn DataTableSortColumn(
    #[props(default)] sort: SortIndicator,
    on_sort: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        th { "aria-sort": sort.aria(),
            button {
                class: "data-table-sort",
                r#type: "button",
                "data-active": if sort == SortIndicator::Unsorted { "false" } else { "true" },
                onclick: move |evt| on_sort.call(evt),
                {children}
                span { class: "data-table-sort-glyph", "{sort.glyph()}" }
            }
        }
    }
}

/// Body row. Rows with a click handler get the pointer affordance.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = onclick.is_some();
    rsx! {
        tr {
            class: if clickable { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row for "nothing matched" messages.
#[component]
pub fn DataTableEmpty(colspan: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_tracks_direction() {
        assert_eq!(SortIndicator::default().glyph(), "↕");
        assert_eq!(SortIndicator::Ascending.glyph(), "↑");
        assert_eq!(SortIndicator::Descending.glyph(), "↓");
    }
}
