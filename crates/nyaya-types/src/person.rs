use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::case::CaseStatus;
use crate::listing::Listable;
use crate::petition::SelectOptions;

/// Role a person plays in the registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersonType {
    #[serde(rename = "complainant")]
    Complainant,
    #[serde(rename = "defendant")]
    Defendant,
    #[serde(rename = "witness")]
    Witness,
    #[serde(rename = "lawyer")]
    Lawyer,
}

impl PersonType {
    pub const ALL: [PersonType; 4] = [
        PersonType::Complainant,
        PersonType::Defendant,
        PersonType::Witness,
        PersonType::Lawyer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complainant => "complainant",
            Self::Defendant => "defendant",
            Self::Witness => "witness",
            Self::Lawyer => "lawyer",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "complainant" => Some(Self::Complainant),
            "defendant" => Some(Self::Defendant),
            "witness" => Some(Self::Witness),
            "lawyer" => Some(Self::Lawyer),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Complainant => "Complainant",
            Self::Defendant => "Defendant",
            Self::Witness => "Witness",
            Self::Lawyer => "Lawyer",
        }
    }

    /// Plural label used on the registry tabs.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Self::Complainant => "Complainants",
            Self::Defendant => "Defendants",
            Self::Witness => "Witnesses",
            Self::Lawyer => "Lawyers",
        }
    }

    /// Label in the "Person Type" select of the add form.
    pub fn option_label(&self) -> &'static str {
        match self {
            Self::Lawyer => "Lawyer/Advocate",
            other => other.label(),
        }
    }

    /// Badge colour, borrowed from the case status palette.
    pub fn tone(&self) -> CaseStatus {
        match self {
            Self::Complainant => CaseStatus::Pending,
            Self::Defendant => CaseStatus::Investigation,
            Self::Witness => CaseStatus::Resolved,
            Self::Lawyer => CaseStatus::Action,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// A registry entry: complainant, defendant, witness or lawyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub nepali_name: Option<String>,
    pub person_type: PersonType,
    pub gender: Gender,
    pub age: u32,
    pub address: String,
    pub district: String,
    pub contact: String,
    pub email: Option<String>,
    pub id_number: String,
    pub id_type: String,
    pub related_cases: u32,
    pub occupation: String,
    pub last_activity: String,
}

impl Person {
    /// Up to two initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PersonField {
    Type,
}

/// Sortable registry columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PersonSortKey {
    Name,
    Type,
    District,
    Cases,
    LastActivity,
}

impl PersonSortKey {
    pub const COLUMNS: [PersonSortKey; 5] = [
        PersonSortKey::Name,
        PersonSortKey::Type,
        PersonSortKey::District,
        PersonSortKey::Cases,
        PersonSortKey::LastActivity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::District => "district",
            Self::Cases => "cases",
            Self::LastActivity => "lastActivity",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::COLUMNS.into_iter().find(|key| key.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Type => "Type",
            Self::District => "District",
            Self::Cases => "Cases",
            Self::LastActivity => "Last Activity",
        }
    }
}

impl Listable for Person {
    type Filter = PersonField;
    type SortKey = PersonSortKey;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(nepali) = &self.nepali_name {
            fields.push(nepali);
        }
        fields.extend([
            self.address.as_str(),
            self.id_number.as_str(),
            self.contact.as_str(),
        ]);
        fields
    }

    fn filter_value(&self, field: PersonField) -> &str {
        match field {
            PersonField::Type => self.person_type.as_str(),
        }
    }

    fn compare_by(&self, other: &Self, key: PersonSortKey) -> Ordering {
        match key {
            PersonSortKey::Name => self.name.cmp(&other.name),
            PersonSortKey::Type => self.person_type.as_str().cmp(other.person_type.as_str()),
            PersonSortKey::District => self.district.cmp(&other.district),
            PersonSortKey::Cases => self.related_cases.cmp(&other.related_cases),
            PersonSortKey::LastActivity => self.last_activity.cmp(&other.last_activity),
        }
    }
}

/// A case linked to a person on their profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCase {
    pub case_id: u32,
    pub case_number: String,
    pub case_type: String,
    pub filing_date: String,
    pub status: CaseStatus,
    pub role: String,
}

/// One row of a profile's activity timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub detail: String,
    pub date: String,
    pub tone: CaseStatus,
}

impl ActivityEntry {
    fn new(title: &str, detail: &str, date: &str, tone: CaseStatus) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
            date: date.to_string(),
            tone,
        }
    }
}

/// Activity timeline for a profile. The first entry is dated by the
/// person's last activity.
pub fn activity_for(person: &Person) -> Vec<ActivityEntry> {
    let last = person.last_activity.as_str();
    match person.person_type {
        PersonType::Complainant => vec![
            ActivityEntry::new(
                "Petition Filed",
                "Filed a new petition regarding property dispute",
                last,
                CaseStatus::Pending,
            ),
            ActivityEntry::new(
                "Evidence Submitted",
                "Submitted land ownership documents",
                "2081-01-17",
                CaseStatus::Investigation,
            ),
            ActivityEntry::new(
                "Hearing Scheduled",
                "Initial hearing scheduled for case #2081-CR-001",
                "2081-01-20",
                CaseStatus::Pending,
            ),
        ],
        PersonType::Defendant => vec![
            ActivityEntry::new(
                "Case Registered Against",
                "Named as defendant in case #2081-CR-001",
                last,
                CaseStatus::Pending,
            ),
            ActivityEntry::new(
                "Notice Delivered",
                "Official notice delivered for appearance",
                "2081-01-18",
                CaseStatus::Investigation,
            ),
        ],
        PersonType::Witness => vec![
            ActivityEntry::new(
                "Added as Witness",
                "Added as witness for case #2081-CR-003",
                last,
                CaseStatus::Pending,
            ),
            ActivityEntry::new(
                "Interview Scheduled",
                "Witness interview scheduled",
                "2081-01-24",
                CaseStatus::Investigation,
            ),
        ],
        PersonType::Lawyer => vec![
            ActivityEntry::new(
                "Case Assignment",
                "Assigned to case #2081-CR-001 as legal representative",
                last,
                CaseStatus::Pending,
            ),
            ActivityEntry::new(
                "Document Submission",
                "Submitted legal brief for the case",
                "2081-01-22",
                CaseStatus::Investigation,
            ),
        ],
    }
}

pub const PERSON_ID_TYPE_OPTIONS: SelectOptions = &[
    ("citizenship", "Citizenship"),
    ("passport", "Passport"),
    ("license", "Driver's License"),
    ("bar", "Bar Association"),
    ("other", "Other"),
];

pub const DISTRICT_OPTIONS: SelectOptions = &[
    ("kathmandu", "Kathmandu"),
    ("lalitpur", "Lalitpur"),
    ("bhaktapur", "Bhaktapur"),
    ("kavre", "Kavre"),
    ("makwanpur", "Makwanpur"),
    ("other", "Other"),
];

/// Form state of the "Add Person" sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonDraft {
    pub name: String,
    pub nepali_name: String,
    pub person_type: Option<PersonType>,
    pub gender: Option<Gender>,
    pub age: String,
    pub id_type: String,
    pub id_number: String,
    pub occupation: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub district: String,
    pub notes: String,
}
