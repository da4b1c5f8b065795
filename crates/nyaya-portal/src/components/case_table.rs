use dioxus::prelude::*;
use nyaya_types::{CaseRecord, CaseStatus};
use nyaya_ui::{
    Badge, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow,
};

use crate::format_helpers::status_badge_variant;
use crate::routes::Route;

#[component]
pub fn CaseStatusBadge(status: CaseStatus) -> Element {
    rsx! {
        Badge { variant: status_badge_variant(status), "{status.label()}" }
    }
}

/// Compact case table with a "View" link per row.
#[component]
pub fn CaseTable(cases: Vec<CaseRecord>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Case #" }
                DataTableColumn { "Petitioner" }
                DataTableColumn { "Date Filed" }
                DataTableColumn { "Type" }
                DataTableColumn { "Status" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                if cases.is_empty() {
                    DataTableEmpty { colspan: 6usize, "No cases to show" }
                }
                for case in cases.iter() {
                    DataTableRow { key: "{case.id}",
                        DataTableCell { span { class: "cell-strong", "{case.case_number}" } }
                        DataTableCell { "{case.petitioner_name}" }
                        DataTableCell { "{case.filing_date}" }
                        DataTableCell { "{case.case_type}" }
                        DataTableCell { CaseStatusBadge { status: case.status } }
                        DataTableCell {
                            Link { to: Route::CaseDetail { id: case.id, tab: None }, class: "row-link", "View" }
                        }
                    }
                }
            }
        }
    }
}
