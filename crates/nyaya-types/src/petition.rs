use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Steps of the new-petition wizard, in order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PetitionStep {
    #[default]
    #[serde(rename = "complainant")]
    Complainant,
    #[serde(rename = "defendant")]
    Defendant,
    #[serde(rename = "case")]
    Case,
    #[serde(rename = "evidence")]
    Evidence,
}

impl PetitionStep {
    pub const ALL: [PetitionStep; 4] = [
        PetitionStep::Complainant,
        PetitionStep::Defendant,
        PetitionStep::Case,
        PetitionStep::Evidence,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Complainant => 0,
            Self::Defendant => 1,
            Self::Case => 2,
            Self::Evidence => 3,
        }
    }

    /// Step at `index`, clamped to the last step.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complainant => "complainant",
            Self::Defendant => "defendant",
            Self::Case => "case",
            Self::Evidence => "evidence",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Complainant => "Complainant Details",
            Self::Defendant => "Defendant Details",
            Self::Case => "Case Details",
            Self::Evidence => "Evidence & Witnesses",
        }
    }

    pub fn nepali_label(&self) -> &'static str {
        match self {
            Self::Complainant => "उजुरीकर्ता विवरण",
            Self::Defendant => "प्रतिवादी विवरण",
            Self::Case => "मुद्दा विवरण",
            Self::Evidence => "प्रमाण र साक्षीहरू",
        }
    }
}

/// Marker state of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Done,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PetitionWizard {
    pub step: PetitionStep,
}

impl PetitionWizard {
    pub fn next(&mut self) {
        self.step = PetitionStep::from_index(self.step.index() + 1);
    }

    pub fn back(&mut self) {
        self.step = PetitionStep::from_index(self.step.index().saturating_sub(1));
    }

    pub fn is_first(&self) -> bool {
        self.step.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.step.index() == PetitionStep::ALL.len() - 1
    }

    /// Width of the progress bar, 0 on the first step and 100 on the last.
    pub fn progress_percent(&self) -> f64 {
        self.step.index() as f64 / (PetitionStep::ALL.len() - 1) as f64 * 100.0
    }

    pub fn marker(&self, step: PetitionStep) -> StepMarker {
        match step.index().cmp(&self.step.index()) {
            std::cmp::Ordering::Less => StepMarker::Done,
            std::cmp::Ordering::Equal => StepMarker::Current,
            std::cmp::Ordering::Greater => StepMarker::Upcoming,
        }
    }
}

/// Select options as (value, label).
pub type SelectOptions = &'static [(&'static str, &'static str)];

pub const GENDER_OPTIONS: SelectOptions = &[
    ("male", "Male / पुरुष"),
    ("female", "Female / महिला"),
    ("other", "Other / अन्य"),
];

pub const ID_TYPE_OPTIONS: SelectOptions = &[
    ("citizenship", "Citizenship / नागरिकता"),
    ("passport", "Passport / राहदानी"),
    ("license", "Driving License / सवारी चालक अनुमतिपत्र"),
    ("voter", "Voter ID / मतदाता परिचयपत्र"),
];

pub const CASE_TYPE_OPTIONS: SelectOptions = &[
    ("theft", "Theft / चोरी"),
    ("assault", "Assault / हमला"),
    ("fraud", "Fraud / जालसाजी"),
    ("property", "Property Dispute / सम्पत्ति विवाद"),
    ("domestic", "Domestic Violence / घरेलु हिंसा"),
    ("other", "Other / अन्य"),
];

pub const POLICE_STATION_OPTIONS: SelectOptions = &[
    ("central", "Central Police Station"),
    ("north", "North District Station"),
    ("south", "South District Station"),
    ("east", "East District Station"),
    ("west", "West District Station"),
];

/// One party's details on the first two wizard steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartyDraft {
    pub name_en: String,
    pub name_np: String,
    pub age: String,
    pub gender: String,
    pub address: String,
    pub contact: String,
}

/// Everything typed into the wizard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PetitionDraft {
    pub complainant: PartyDraft,
    pub id_type: String,
    pub id_number: String,
    pub defendant: PartyDraft,
    pub relationship: String,
    pub physical_description: String,
    pub incident_date: String,
    pub case_type: String,
    pub incident_location: String,
    pub description: String,
    pub witnesses: String,
    pub police_station: String,
    pub receiving_officer: String,
}

/// Acknowledgement returned by a submitted petition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetitionReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub complainant: String,
}

impl PetitionReceipt {
    pub fn new(draft: &PetitionDraft) -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            complainant: draft.complainant.name_en.trim().to_string(),
        }
    }

    /// Short reference shown to the filer, e.g. "PET-1A2B3C4D".
    pub fn short_reference(&self) -> String {
        let simple = self.reference.simple().to_string();
        format!("PET-{}", simple[..8].to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_clamps_at_both_ends() {
        let mut wizard = PetitionWizard::default();
        wizard.back();
        assert_eq!(wizard.step, PetitionStep::Complainant);
        assert!(wizard.is_first());

        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.step, PetitionStep::Evidence);
        assert!(wizard.is_last());
    }

    #[test]
    fn progress_runs_zero_to_hundred() {
        let mut wizard = PetitionWizard::default();
        assert_eq!(wizard.progress_percent(), 0.0);
        wizard.next();
        assert!((wizard.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
        wizard.next();
        wizard.next();
        assert_eq!(wizard.progress_percent(), 100.0);
    }

    #[test]
    fn markers_follow_current_step() {
        let wizard = PetitionWizard {
            step: PetitionStep::Case,
        };
        assert_eq!(wizard.marker(PetitionStep::Complainant), StepMarker::Done);
        assert_eq!(wizard.marker(PetitionStep::Case), StepMarker::Current);
        assert_eq!(wizard.marker(PetitionStep::Evidence), StepMarker::Upcoming);
    }

    #[test]
    fn receipt_reference_is_v4() {
        let mut draft = PetitionDraft::default();
        draft.complainant.name_en = "  Anita Rai ".into();
        let receipt = PetitionReceipt::new(&draft);
        assert_eq!(receipt.reference.get_version_num(), 4);
        assert_eq!(receipt.complainant, "Anita Rai");
        assert!(receipt.short_reference().starts_with("PET-"));
        assert_eq!(receipt.short_reference().len(), 12);
    }

    #[test]
    fn option_lists_match_form() {
        assert_eq!(CASE_TYPE_OPTIONS.len(), 6);
        assert_eq!(ID_TYPE_OPTIONS.len(), 4);
        assert_eq!(POLICE_STATION_OPTIONS[0].0, "central");
    }
}
