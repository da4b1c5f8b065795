use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::listing::Listable;

// ── Status ──────────────────────────────────────────────────────────

/// Case status lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaseStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "investigation")]
    Investigation,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "action")]
    Action,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 4] = [
        CaseStatus::Pending,
        CaseStatus::Investigation,
        CaseStatus::Resolved,
        CaseStatus::Action,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Investigation => "investigation",
            Self::Resolved => "resolved",
            Self::Action => "action",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "investigation" => Some(Self::Investigation),
            "resolved" => Some(Self::Resolved),
            "action" => Some(Self::Action),
            _ => None,
        }
    }

    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Investigation => "Under Investigation",
            Self::Resolved => "Resolved",
            Self::Action => "Legal Action Taken",
        }
    }
}

/// Buttons on the case detail "Update Case Status" panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusAction {
    StartInvestigation,
    MarkResolved,
    Escalate,
    Close,
}

impl StatusAction {
    pub const ALL: [StatusAction; 4] = [
        StatusAction::StartInvestigation,
        StatusAction::MarkResolved,
        StatusAction::Escalate,
        StatusAction::Close,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::StartInvestigation => "Change to Under Investigation",
            Self::MarkResolved => "Mark as Resolved",
            Self::Escalate => "Escalate for Legal Action",
            Self::Close => "Close Case",
        }
    }

    /// Status displayed after the action. Closing a case resolves it.
    pub fn target(&self) -> CaseStatus {
        match self {
            Self::StartInvestigation => CaseStatus::Investigation,
            Self::MarkResolved | Self::Close => CaseStatus::Resolved,
            Self::Escalate => CaseStatus::Action,
        }
    }
}

// ── Records ─────────────────────────────────────────────────────────

/// A filed petition as shown in the petitions table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: u32,
    pub case_number: String,
    pub petitioner_name: String,
    pub defendant_name: String,
    /// Bikram Sambat date, `YYYY-MM-DD`.
    pub filing_date: String,
    pub case_type: String,
    pub status: CaseStatus,
    pub location: String,
}

impl CaseRecord {
    pub fn involves(&self, name: &str) -> bool {
        self.petitioner_name == name || self.defendant_name == name
    }
}

/// Categorical fields the petitions page filters on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum CaseField {
    Status,
    CaseType,
}

/// Sortable petitions table columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseSortKey {
    CaseNumber,
    Petitioner,
    Defendant,
    FilingDate,
    CaseType,
    Status,
    Location,
}

impl CaseSortKey {
    pub const COLUMNS: [CaseSortKey; 7] = [
        CaseSortKey::CaseNumber,
        CaseSortKey::Petitioner,
        CaseSortKey::Defendant,
        CaseSortKey::FilingDate,
        CaseSortKey::CaseType,
        CaseSortKey::Status,
        CaseSortKey::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseNumber => "caseNumber",
            Self::Petitioner => "petitionerName",
            Self::Defendant => "defendantName",
            Self::FilingDate => "filingDate",
            Self::CaseType => "caseType",
            Self::Status => "status",
            Self::Location => "location",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::COLUMNS.into_iter().find(|key| key.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CaseNumber => "Case Number",
            Self::Petitioner => "Petitioner",
            Self::Defendant => "Defendant",
            Self::FilingDate => "Filing Date",
            Self::CaseType => "Case Type",
            Self::Status => "Status",
            Self::Location => "Location",
        }
    }
}

impl Listable for CaseRecord {
    type Filter = CaseField;
    type SortKey = CaseSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.case_number,
            &self.petitioner_name,
            &self.defendant_name,
            &self.location,
        ]
    }

    fn filter_value(&self, field: CaseField) -> &str {
        match field {
            CaseField::Status => self.status.as_str(),
            CaseField::CaseType => &self.case_type,
        }
    }

    fn compare_by(&self, other: &Self, key: CaseSortKey) -> Ordering {
        match key {
            CaseSortKey::CaseNumber => self.case_number.cmp(&other.case_number),
            CaseSortKey::Petitioner => self.petitioner_name.cmp(&other.petitioner_name),
            CaseSortKey::Defendant => self.defendant_name.cmp(&other.defendant_name),
            CaseSortKey::FilingDate => self.filing_date.cmp(&other.filing_date),
            CaseSortKey::CaseType => self.case_type.cmp(&other.case_type),
            CaseSortKey::Status => self.status.as_str().cmp(other.status.as_str()),
            CaseSortKey::Location => self.location.cmp(&other.location),
        }
    }
}

// ── Detail ──────────────────────────────────────────────────────────

/// Contact block for one party on the case detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyContact {
    pub name: String,
    pub contact: String,
    pub address: String,
    /// Trailing row, e.g. ("ID Number", "123-456-7890").
    pub extra_label: String,
    pub extra_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseTimelineEntry {
    pub title: String,
    pub timestamp: String,
    pub note: String,
    pub tone: CaseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub file_name: String,
    pub added: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDetail {
    pub record: CaseRecord,
    pub description: String,
    pub officer: String,
    pub priority: String,
    pub petitioner: PartyContact,
    pub defendant: PartyContact,
    pub timeline: Vec<CaseTimelineEntry>,
    pub documents: Vec<CaseDocument>,
}

impl CaseDetail {
    /// Minimal narrative for a case without a recorded file.
    pub fn generated(record: &CaseRecord) -> Self {
        let description = format!(
            "A {} complaint filed by {} against {} at {}.",
            record.case_type.to_lowercase(),
            record.petitioner_name,
            record.defendant_name,
            record.location
        );
        Self {
            description,
            officer: "Unassigned".to_string(),
            priority: "Medium".to_string(),
            petitioner: PartyContact {
                name: record.petitioner_name.clone(),
                contact: "Not recorded".to_string(),
                address: record.location.clone(),
                extra_label: "ID Number".to_string(),
                extra_value: "Not recorded".to_string(),
            },
            defendant: PartyContact {
                name: record.defendant_name.clone(),
                contact: "Unknown".to_string(),
                address: "Not recorded".to_string(),
                extra_label: "Relationship".to_string(),
                extra_value: "Not recorded".to_string(),
            },
            timeline: vec![CaseTimelineEntry {
                title: "Case Registered".to_string(),
                timestamp: record.filing_date.clone(),
                note: "Initial petition received and registered in the system.".to_string(),
                tone: CaseStatus::Resolved,
            }],
            documents: Vec::new(),
            record: record.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CaseRecord {
        CaseRecord {
            id: 7,
            case_number: "2081-CR-007".into(),
            petitioner_name: "Rajendra Malla".into(),
            defendant_name: "Bijay Karki".into(),
            filing_date: "2080-12-29".into(),
            case_type: "Theft".into(),
            status: CaseStatus::Pending,
            location: "Patan, Lalitpur".into(),
        }
    }

    #[test]
    fn status_roundtrips_through_str() {
        for status in CaseStatus::ALL {
            assert_eq!(CaseStatus::from_str_opt(status.as_str()), Some(status));
        }
        assert_eq!(CaseStatus::from_str_opt("closed"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CaseStatus::Investigation).unwrap();
        assert_eq!(json, "\"investigation\"");
        assert_eq!(CaseStatus::Action.label(), "Legal Action Taken");
    }

    #[test]
    fn sort_key_parses_column_names() {
        assert_eq!(
            CaseSortKey::from_str_opt("filingDate"),
            Some(CaseSortKey::FilingDate)
        );
        assert_eq!(CaseSortKey::from_str_opt("officer"), None);
    }

    #[test]
    fn status_filter_uses_wire_value() {
        let r = record();
        assert_eq!(r.filter_value(CaseField::Status), "pending");
        assert_eq!(r.filter_value(CaseField::CaseType), "Theft");
    }

    #[test]
    fn generated_detail_describes_record() {
        let detail = CaseDetail::generated(&record());
        assert_eq!(
            detail.description,
            "A theft complaint filed by Rajendra Malla against Bijay Karki at Patan, Lalitpur."
        );
        assert_eq!(detail.officer, "Unassigned");
        assert_eq!(detail.timeline.len(), 1);
        assert_eq!(detail.timeline[0].title, "Case Registered");
        assert!(detail.documents.is_empty());
    }

    #[test]
    fn close_case_resolves() {
        assert_eq!(StatusAction::Close.target(), CaseStatus::Resolved);
        assert_eq!(StatusAction::Escalate.target(), CaseStatus::Action);
    }
}
