//! The in-memory record store.
//!
//! Built once by [`RecordStore::sample`] and shared read-only for the life of
//! the app.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarEvent, EventType};
use crate::case::{
    CaseDetail, CaseDocument, CaseRecord, CaseStatus, CaseTimelineEntry, PartyContact,
};
use crate::error::AppError;
use crate::person::{Gender, Person, PersonType, RelatedCase};
use crate::search::{SearchResult, SearchResultKind, SearchTarget};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStore {
    cases: Vec<CaseRecord>,
    people: Vec<Person>,
    events: Vec<CalendarEvent>,
    search_index: Vec<SearchResult>,
    case_files: Vec<CaseDetail>,
}

impl RecordStore {
    pub fn new(
        cases: Vec<CaseRecord>,
        people: Vec<Person>,
        events: Vec<CalendarEvent>,
        search_index: Vec<SearchResult>,
    ) -> Self {
        Self {
            cases,
            people,
            events,
            search_index,
            case_files: Vec::new(),
        }
    }

    /// The demonstration data set.
    pub fn sample() -> Self {
        let mut store = Self::new(
            sample_cases(),
            sample_people(),
            sample_events(),
            sample_search_index(),
        );
        store.case_files = sample_case_files(&store.cases);
        store
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn search_index(&self) -> &[SearchResult] {
        &self.search_index
    }

    pub fn find_case(&self, id: u32) -> Option<&CaseRecord> {
        self.cases.iter().find(|c| c.id == id)
    }

    pub fn find_person(&self, id: u32) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Full case file. Cases without a recorded file get a generated one.
    pub fn case_detail(&self, id: u32) -> Result<CaseDetail, AppError> {
        if let Some(file) = self.case_files.iter().find(|d| d.record.id == id) {
            return Ok(file.clone());
        }
        self.find_case(id)
            .map(CaseDetail::generated)
            .ok_or_else(|| AppError::not_found(format!("Case {id} not found")))
    }

    /// The first `count` cases, newest filings first.
    pub fn recent_cases(&self, count: usize) -> &[CaseRecord] {
        &self.cases[..count.min(self.cases.len())]
    }

    /// Distinct case types in order of first appearance.
    pub fn case_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for case in &self.cases {
            if !types.contains(&case.case_type) {
                types.push(case.case_type.clone());
            }
        }
        types
    }

    /// Cases linked to `person`, ordered by case id.
    ///
    /// A person is linked when named as petitioner or defendant, or when they
    /// appear in the participants of an event attached to a case.
    pub fn related_cases_for(&self, person: &Person) -> Vec<RelatedCase> {
        let mut related: Vec<RelatedCase> = Vec::new();

        for case in self.cases.iter().filter(|c| c.involves(&person.name)) {
            let role = if case.petitioner_name == person.name {
                "Complainant"
            } else {
                "Defendant"
            };
            related.push(link(case, role));
        }

        for event in &self.events {
            let named = event.participants.iter().any(|p| p.contains(&person.name));
            let Some(case) = event.case_id.and_then(|id| self.find_case(id)) else {
                continue;
            };
            if named && !related.iter().any(|r| r.case_id == case.id) {
                related.push(link(case, person.person_type.label()));
            }
        }

        related.sort_by_key(|r| r.case_id);
        related
    }
}

fn link(case: &CaseRecord, role: &str) -> RelatedCase {
    RelatedCase {
        case_id: case.id,
        case_number: case.case_number.clone(),
        case_type: case.case_type.clone(),
        filing_date: case.filing_date.clone(),
        status: case.status,
        role: role.to_string(),
    }
}

// ── Sample data ─────────────────────────────────────────────────────

fn case(
    id: u32,
    petitioner: &str,
    defendant: &str,
    filing_date: &str,
    case_type: &str,
    status: CaseStatus,
    location: &str,
) -> CaseRecord {
    CaseRecord {
        id,
        case_number: format!("2081-CR-{id:03}"),
        petitioner_name: petitioner.to_string(),
        defendant_name: defendant.to_string(),
        filing_date: filing_date.to_string(),
        case_type: case_type.to_string(),
        status,
        location: location.to_string(),
    }
}

fn sample_cases() -> Vec<CaseRecord> {
    use CaseStatus::*;
    vec![
        case(
            1,
            "Ramesh Sharma",
            "Hari Bahadur",
            "2081-01-15",
            "Property Dispute",
            Pending,
            "Babarmahal, Kathmandu",
        ),
        case(
            2,
            "Sita Tamang",
            "Krishna Prasad",
            "2081-01-12",
            "Theft",
            Investigation,
            "Baneshwor, Kathmandu",
        ),
        case(
            3,
            "Mohan Thapa",
            "Gopal Shrestha",
            "2081-01-10",
            "Assault",
            Resolved,
            "Pulchowk, Lalitpur",
        ),
        case(4, "Gita Khadka", "Samir Karki", "2081-01-08", "Fraud", Action, "Thamel, Kathmandu"),
        case(
            5,
            "Prakash Giri",
            "Nirmala Giri",
            "2081-01-05",
            "Domestic Violence",
            Investigation,
            "Jorpati, Kathmandu",
        ),
        case(6, "Anita Rai", "Suresh Rai", "2081-01-03", "Property Dispute", Pending, "Bhaktapur"),
        case(7, "Rajendra Malla", "Bijay Karki", "2080-12-29", "Theft", Pending, "Patan, Lalitpur"),
        case(
            8,
            "Sunita Gurung",
            "Anil Thapa",
            "2080-12-25",
            "Assault",
            Resolved,
            "Dillibazar, Kathmandu",
        ),
        case(
            9,
            "Binod Mahato",
            "Dipak Mahato",
            "2080-12-20",
            "Property Dispute",
            Investigation,
            "Kalanki, Kathmandu",
        ),
        case(
            10,
            "Kamala Shrestha",
            "Raju Maharjan",
            "2080-12-18",
            "Fraud",
            Action,
            "Tokha, Kathmandu",
        ),
        case(
            11,
            "Deepak Tamang",
            "Santosh Lama",
            "2080-12-15",
            "Theft",
            Pending,
            "Chabahil, Kathmandu",
        ),
        case(
            12,
            "Sabina Khatri",
            "Nabin Singh",
            "2080-12-10",
            "Domestic Violence",
            Investigation,
            "Kalimati, Kathmandu",
        ),
    ]
}

fn entry(title: &str, timestamp: &str, note: &str, tone: CaseStatus) -> CaseTimelineEntry {
    CaseTimelineEntry {
        title: title.to_string(),
        timestamp: timestamp.to_string(),
        note: note.to_string(),
        tone,
    }
}

fn document(file_name: &str, added: &str) -> CaseDocument {
    CaseDocument {
        file_name: file_name.to_string(),
        added: added.to_string(),
    }
}

fn sample_case_files(cases: &[CaseRecord]) -> Vec<CaseDetail> {
    let Some(first) = cases.iter().find(|c| c.id == 1) else {
        return Vec::new();
    };
    let mut record = first.clone();
    record.status = CaseStatus::Investigation;

    vec![CaseDetail {
        description: "The complainant alleges that the defendant has illegally occupied part of their land by moving the boundary wall approximately 2 meters into the complainant's property. The disputed area is located in the eastern section of the property at Babarmahal, Kathmandu. The complainant has provided land ownership documents and recent survey records as evidence.".to_string(),
        officer: "Inspector Rajesh Khatri".to_string(),
        priority: "Medium".to_string(),
        petitioner: PartyContact {
            name: record.petitioner_name.clone(),
            contact: "+977 9812345678".to_string(),
            address: "Kathmandu-05, Babarmahal".to_string(),
            extra_label: "ID Number".to_string(),
            extra_value: "123-456-7890".to_string(),
        },
        defendant: PartyContact {
            name: record.defendant_name.clone(),
            contact: "Unknown".to_string(),
            address: "Lalitpur-03, Patan".to_string(),
            extra_label: "Relationship".to_string(),
            extra_value: "Neighbor".to_string(),
        },
        timeline: vec![
            entry(
                "Case Registered",
                "April 15, 2023 - 09:30 AM",
                "Initial petition received and registered in the system.",
                CaseStatus::Resolved,
            ),
            entry(
                "Investigation Started",
                "April 17, 2023 - 11:15 AM",
                "Officer Ramesh Kumar assigned to investigate the case.",
                CaseStatus::Investigation,
            ),
            entry(
                "Witness Statement",
                "April 20, 2023 - 02:45 PM",
                "Witness statements collected from 3 individuals present at the scene.",
                CaseStatus::Investigation,
            ),
            entry(
                "Awaiting Additional Evidence",
                "April 25, 2023 - 04:10 PM",
                "Additional documentation requested from the complainant.",
                CaseStatus::Pending,
            ),
        ],
        documents: vec![
            document("Initial_Complaint.pdf", "Apr 15, 2023"),
            document("Witness_Statement_1.pdf", "Apr 20, 2023"),
            document("Evidence_Photos.zip", "Apr 18, 2023"),
            document("Investigation_Report.pdf", "Apr 22, 2023"),
        ],
        record,
    }]
}

#[allow(clippy::too_many_arguments)]
fn person(
    id: u32,
    name: &str,
    nepali_name: &str,
    person_type: PersonType,
    gender: Gender,
    age: u32,
    address: &str,
    district: &str,
    contact: &str,
    email: Option<&str>,
    id_number: &str,
    id_type: &str,
    related_cases: u32,
    occupation: &str,
    last_activity: &str,
) -> Person {
    Person {
        id,
        name: name.to_string(),
        nepali_name: Some(nepali_name.to_string()),
        person_type,
        gender,
        age,
        address: address.to_string(),
        district: district.to_string(),
        contact: contact.to_string(),
        email: email.map(str::to_string),
        id_number: id_number.to_string(),
        id_type: id_type.to_string(),
        related_cases,
        occupation: occupation.to_string(),
        last_activity: last_activity.to_string(),
    }
}

fn sample_people() -> Vec<Person> {
    use Gender::*;
    use PersonType::*;
    vec![
        person(
            1,
            "Ramesh Sharma",
            "रमेश शर्मा",
            Complainant,
            Male,
            42,
            "Babarmahal, Kathmandu",
            "Kathmandu",
            "+977 9812345678",
            Some("ramesh.sharma@example.com"),
            "123-456-7890",
            "Citizenship",
            2,
            "Business Owner",
            "2081-01-15",
        ),
        person(
            2,
            "Sita Tamang",
            "सीता तामाङ",
            Complainant,
            Female,
            35,
            "Baneshwor, Kathmandu",
            "Kathmandu",
            "+977 9854321098",
            Some("sita.tamang@example.com"),
            "234-567-8901",
            "Citizenship",
            1,
            "Teacher",
            "2081-01-12",
        ),
        person(
            3,
            "Hari Bahadur",
            "हरि बहादुर",
            Defendant,
            Male,
            45,
            "Lalitpur-03, Patan",
            "Lalitpur",
            "+977 9876543210",
            None,
            "345-678-9012",
            "Citizenship",
            1,
            "Land Owner",
            "2081-01-15",
        ),
        person(
            4,
            "Krishna Prasad",
            "कृष्ण प्रसाद",
            Defendant,
            Male,
            38,
            "Chabahil, Kathmandu",
            "Kathmandu",
            "+977 9807654321",
            Some("krishna.prasad@example.com"),
            "456-789-0123",
            "Citizenship",
            2,
            "Shopkeeper",
            "2081-01-12",
        ),
        person(
            5,
            "Sarita Gurung",
            "सरिता गुरुङ",
            Witness,
            Female,
            29,
            "Pulchowk, Lalitpur",
            "Lalitpur",
            "+977 9812398765",
            Some("sarita.gurung@example.com"),
            "567-890-1234",
            "Citizenship",
            1,
            "Teacher",
            "2081-01-10",
        ),
        person(
            6,
            "Rajendra Malla",
            "राजेन्द्र मल्ल",
            Complainant,
            Male,
            52,
            "Patan, Lalitpur",
            "Lalitpur",
            "+977 9834567890",
            Some("rajendra.malla@example.com"),
            "678-901-2345",
            "Citizenship",
            1,
            "Government Employee",
            "2080-12-29",
        ),
        person(
            7,
            "Binita Shrestha",
            "बिनिता श्रेष्ठ",
            Lawyer,
            Female,
            36,
            "Thamel, Kathmandu",
            "Kathmandu",
            "+977 9845678901",
            Some("binita.shrestha@legalfirm.com"),
            "789-012-3456",
            "Bar Association",
            5,
            "Advocate",
            "2081-01-18",
        ),
        person(
            8,
            "Gopal Shrestha",
            "गोपाल श्रेष्ठ",
            Defendant,
            Male,
            40,
            "Jawalakhel, Lalitpur",
            "Lalitpur",
            "+977 9876123450",
            Some("gopal.shrestha@example.com"),
            "890-123-4567",
            "Citizenship",
            1,
            "Business Owner",
            "2081-01-10",
        ),
        person(
            9,
            "Anita Rai",
            "अनिता राई",
            Complainant,
            Female,
            33,
            "Bhaktapur",
            "Bhaktapur",
            "+977 9867012345",
            Some("anita.rai@example.com"),
            "901-234-5678",
            "Citizenship",
            1,
            "Housewife",
            "2081-01-03",
        ),
        person(
            10,
            "Sunil Maharjan",
            "सुनील महर्जन",
            Witness,
            Male,
            27,
            "Kirtipur, Kathmandu",
            "Kathmandu",
            "+977 9890123456",
            Some("sunil.maharjan@example.com"),
            "012-345-6789",
            "Citizenship",
            2,
            "Driver",
            "2080-12-25",
        ),
        person(
            11,
            "Prakash Thapa",
            "प्रकाश थापा",
            Lawyer,
            Male,
            45,
            "Baluwatar, Kathmandu",
            "Kathmandu",
            "+977 9812340987",
            Some("prakash.thapa@legalfirm.com"),
            "L-12345",
            "Bar Association",
            7,
            "Senior Advocate",
            "2081-01-20",
        ),
        person(
            12,
            "Nirmala Giri",
            "निर्मला गिरी",
            Defendant,
            Female,
            31,
            "Jorpati, Kathmandu",
            "Kathmandu",
            "+977 9823456789",
            Some("nirmala.giri@example.com"),
            "123-234-3456",
            "Citizenship",
            1,
            "Housewife",
            "2081-01-05",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    title: &str,
    day: u32,
    time: &str,
    event_type: EventType,
    location: &str,
    case_id: Option<u32>,
    description: &str,
    participants: &[&str],
    completed: bool,
) -> CalendarEvent {
    CalendarEvent {
        id,
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap_or_default(),
        time: time.to_string(),
        event_type,
        location: location.to_string(),
        case_id,
        case_number: case_id.map(|id| format!("2081-CR-{id:03}")),
        description: description.to_string(),
        participants: participants.iter().map(|p| p.to_string()).collect(),
        completed,
    }
}

fn sample_events() -> Vec<CalendarEvent> {
    use EventType::*;
    vec![
        event(
            1,
            "Initial Hearing",
            23,
            "10:30 AM",
            Hearing,
            "Courtroom 3, District Court",
            Some(1),
            "Initial hearing for Property Dispute case between Ramesh Sharma and Hari Bahadur.",
            &["Judge Binod Sharma", "Ramesh Sharma", "Hari Bahadur", "Advocate Prakash Thapa"],
            false,
        ),
        event(
            2,
            "Evidence Submission Deadline",
            25,
            "05:00 PM",
            Deadline,
            "Registry Office",
            Some(2),
            "Last date to submit additional evidence for theft case.",
            &["Court Registrar", "Sita Tamang"],
            false,
        ),
        event(
            3,
            "Case Review Meeting",
            22,
            "02:00 PM",
            Meeting,
            "Conference Room B",
            Some(5),
            "Internal meeting to review the domestic violence case progress.",
            &["Inspector Rajesh Khatri", "Officer Sunita Rai", "Social Worker Mina Gurung"],
            true,
        ),
        event(
            4,
            "Witness Interview",
            24,
            "11:45 AM",
            Meeting,
            "Interview Room 1",
            Some(3),
            "Interview with the primary witness in assault case.",
            &["Officer Rajesh Khatri", "Witness: Sunil Maharjan"],
            false,
        ),
        event(
            5,
            "Case Filing Review",
            22,
            "09:30 AM",
            Other,
            "Records Department",
            None,
            "Review new petition submissions and assign case numbers.",
            &["Records Officer", "Admin Staff"],
            true,
        ),
        event(
            6,
            "Follow-up Hearing",
            30,
            "02:30 PM",
            Hearing,
            "Courtroom 2, District Court",
            Some(4),
            "Follow-up hearing for the fraud case with new evidence presentation.",
            &["Judge Meena Shrestha", "Gita Khadka", "Samir Karki", "Prosecutor Rajan Thapa"],
            false,
        ),
    ]
}

fn hit(
    id: u32,
    kind: SearchResultKind,
    title: &str,
    description: &str,
    date: &str,
    target: SearchTarget,
    relevance: u32,
) -> SearchResult {
    SearchResult {
        id,
        kind,
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        target,
        relevance,
    }
}

fn case_target(case_id: u32) -> SearchTarget {
    SearchTarget::Case { case_id, tab: None }
}

fn documents_target(case_id: u32) -> SearchTarget {
    SearchTarget::Case {
        case_id,
        tab: Some("documents".to_string()),
    }
}

fn sample_search_index() -> Vec<SearchResult> {
    use SearchResultKind as K;
    vec![
        hit(
            1,
            K::Case,
            "Case #2081-CR-001",
            "Property dispute between Ramesh Sharma and Hari Bahadur at Babarmahal, Kathmandu",
            "2081-01-15",
            case_target(1),
            95,
        ),
        hit(
            2,
            K::Person,
            "Ramesh Sharma",
            "Petitioner - ID: 12-34-56789, Contact: +977 9812345678",
            "2081-01-15",
            SearchTarget::Person { person_id: 1 },
            90,
        ),
        hit(
            3,
            K::Case,
            "Case #2081-CR-007",
            "Theft case filed by Rajendra Malla against Bijay Karki at Patan, Lalitpur",
            "2080-12-29",
            case_target(7),
            85,
        ),
        hit(
            4,
            K::Document,
            "Initial_Complaint.pdf",
            "Related to Case #2081-CR-001 - Filed on 2081-01-15",
            "2081-01-15",
            documents_target(1),
            80,
        ),
        hit(
            5,
            K::Person,
            "Hari Bahadur",
            "Defendant - Address: Lalitpur-03, Patan",
            "2081-01-15",
            SearchTarget::Person { person_id: 3 },
            75,
        ),
        hit(
            6,
            K::Case,
            "Case #2080-CR-112",
            "Property measurement dispute in Babarmahal area filed by Krishna Shrestha",
            "2080-11-05",
            case_target(20),
            70,
        ),
        hit(
            7,
            K::Document,
            "Land_Survey_Report_Babarmahal.pdf",
            "Survey report for the Babarmahal area land dispute",
            "2080-11-10",
            documents_target(20),
            65,
        ),
        hit(
            8,
            K::Case,
            "Case #2081-CR-005",
            "Domestic Violence case involving Prakash Giri and Nirmala Giri",
            "2081-01-05",
            case_target(5),
            60,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_sizes() {
        let store = RecordStore::sample();
        assert_eq!(store.cases().len(), 12);
        assert_eq!(store.people().len(), 12);
        assert_eq!(store.events().len(), 6);
        assert_eq!(store.search_index().len(), 8);
    }

    #[test]
    fn case_numbers_follow_ids() {
        let store = RecordStore::sample();
        assert_eq!(store.find_case(12).unwrap().case_number, "2081-CR-012");
        assert_eq!(store.find_case(13), None);
    }

    #[test]
    fn case_one_has_full_file() {
        let detail = RecordStore::sample().case_detail(1).unwrap();
        assert_eq!(detail.officer, "Inspector Rajesh Khatri");
        assert_eq!(detail.record.status, CaseStatus::Investigation);
        assert_eq!(detail.timeline.len(), 4);
        assert_eq!(detail.documents[2].file_name, "Evidence_Photos.zip");
        assert_eq!(detail.defendant.extra_value, "Neighbor");
    }

    #[test]
    fn other_cases_get_generated_file() {
        let detail = RecordStore::sample().case_detail(4).unwrap();
        assert_eq!(detail.record.petitioner_name, "Gita Khadka");
        assert_eq!(detail.officer, "Unassigned");
    }

    #[test]
    fn unknown_case_is_not_found() {
        let err = RecordStore::sample().case_detail(20).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Case 20 not found");
    }

    #[test]
    fn case_types_in_first_appearance_order() {
        assert_eq!(
            RecordStore::sample().case_types(),
            vec!["Property Dispute", "Theft", "Assault", "Fraud", "Domestic Violence"]
        );
    }

    #[test]
    fn recent_cases_are_first_five() {
        let store = RecordStore::sample();
        let recent: Vec<u32> = store.recent_cases(5).iter().map(|c| c.id).collect();
        assert_eq!(recent, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.recent_cases(50).len(), 12);
    }

    #[test]
    fn related_cases_by_party_name() {
        let store = RecordStore::sample();
        let hari = store.find_person(3).unwrap();
        let related = store.related_cases_for(hari);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].case_number, "2081-CR-001");
        assert_eq!(related[0].role, "Defendant");
    }

    #[test]
    fn related_cases_through_event_participants() {
        let store = RecordStore::sample();
        let lawyer = store.find_person(11).unwrap();
        let related = store.related_cases_for(lawyer);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].case_id, 1);
        assert_eq!(related[0].role, "Lawyer");

        let witness = store.find_person(10).unwrap();
        let related = store.related_cases_for(witness);
        assert_eq!(related[0].case_id, 3);
        assert_eq!(related[0].role, "Witness");
    }

    #[test]
    fn unlinked_person_has_no_related_cases() {
        let store = RecordStore::sample();
        let binita = store.find_person(7).unwrap();
        assert!(store.related_cases_for(binita).is_empty());
    }

    #[test]
    fn only_hari_lacks_email() {
        let store = RecordStore::sample();
        let without: Vec<&str> = store
            .people()
            .iter()
            .filter(|p| p.email.is_none())
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(without, vec!["Hari Bahadur"]);
    }

    #[test]
    fn events_link_case_numbers() {
        let store = RecordStore::sample();
        let filing_review = &store.events()[4];
        assert_eq!(filing_review.case_number, None);
        assert_eq!(store.events()[5].case_number.as_deref(), Some("2081-CR-004"));
        assert_eq!(
            store.events()[0].date,
            NaiveDate::from_ymd_opt(2025, 4, 23).unwrap()
        );
    }
}
