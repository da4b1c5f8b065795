use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::actions::ActionStatus;
use crate::case::CaseStatus;
use crate::listing::{Listable, Unsorted};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SearchResultKind {
    #[serde(rename = "case")]
    Case,
    #[serde(rename = "person")]
    Person,
    #[serde(rename = "document")]
    Document,
}

impl SearchResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Case => "case",
            Self::Person => "person",
            Self::Document => "document",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "case" => Some(Self::Case),
            "person" => Some(Self::Person),
            "document" => Some(Self::Document),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Case => "Case",
            Self::Person => "Person",
            Self::Document => "Document",
        }
    }

    pub fn tone(&self) -> CaseStatus {
        match self {
            Self::Case => CaseStatus::Investigation,
            Self::Person => CaseStatus::Resolved,
            Self::Document => CaseStatus::Pending,
        }
    }
}

/// Where a search result links to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchTarget {
    Case { case_id: u32, tab: Option<String> },
    Person { person_id: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u32,
    pub kind: SearchResultKind,
    pub title: String,
    pub description: String,
    pub date: String,
    pub target: SearchTarget,
    /// Illustrative score shown as a percentage.
    pub relevance: u32,
}

impl SearchResult {
    /// Case id for case-kind results.
    pub fn case_id(&self) -> Option<u32> {
        match (&self.kind, &self.target) {
            (SearchResultKind::Case, SearchTarget::Case { case_id, .. }) => Some(*case_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchField {
    Kind,
}

impl Listable for SearchResult {
    type Filter = SearchField;
    type SortKey = Unsorted;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn filter_value(&self, field: SearchField) -> &str {
        match field {
            SearchField::Kind => self.kind.as_str(),
        }
    }

    fn compare_by(&self, _other: &Self, key: Unsorted) -> Ordering {
        match key {}
    }
}

/// Tabs above the search box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SearchTab {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "cases")]
    Cases,
    #[serde(rename = "people")]
    People,
    #[serde(rename = "documents")]
    Documents,
}

impl SearchTab {
    pub const ALL: [SearchTab; 4] = [
        SearchTab::All,
        SearchTab::Cases,
        SearchTab::People,
        SearchTab::Documents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Cases => "cases",
            Self::People => "people",
            Self::Documents => "documents",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "cases" => Some(Self::Cases),
            "people" => Some(Self::People),
            "documents" => Some(Self::Documents),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Cases => "Cases",
            Self::People => "People",
            Self::Documents => "Documents",
        }
    }

    pub fn kind(&self) -> Option<SearchResultKind> {
        match self {
            Self::All => None,
            Self::Cases => Some(SearchResultKind::Case),
            Self::People => Some(SearchResultKind::Person),
            Self::Documents => Some(SearchResultKind::Document),
        }
    }
}

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView<'a> {
    Idle,
    Loading,
    Results(&'a [SearchResult]),
    Empty,
    Failed(&'a str),
}

/// State of the search page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub tab: SearchTab,
    pub status: ActionStatus<Vec<SearchResult>>,
    /// Query of the last search that ran.
    pub last_query: String,
}

impl SearchState {
    pub fn view(&self) -> SearchView<'_> {
        match &self.status {
            ActionStatus::Idle => SearchView::Idle,
            ActionStatus::Pending => SearchView::Loading,
            ActionStatus::Completed(rows) if rows.is_empty() => SearchView::Empty,
            ActionStatus::Completed(rows) => SearchView::Results(rows),
            ActionStatus::Failed(message) => SearchView::Failed(message),
        }
    }

    /// "N results found for "q"" once a search has finished.
    pub fn status_line(&self) -> Option<String> {
        match &self.status {
            ActionStatus::Completed(rows) => Some(format!(
                "{} results found for \"{}\"",
                rows.len(),
                self.last_query
            )),
            _ => None,
        }
    }

    /// Switch tabs. Ignored while a search is running, since its results
    /// belong to the old tab. Returns true when the caller should rerun the
    /// last query under the new tab.
    pub fn select_tab(&mut self, tab: SearchTab) -> bool {
        if self.status.is_pending() {
            return false;
        }
        self.tab = tab;
        !self.last_query.is_empty()
    }

    /// Case ids of case-kind results, in result order.
    pub fn related_case_ids(&self) -> Vec<u32> {
        match &self.status {
            ActionStatus::Completed(rows) => {
                rows.iter().filter_map(SearchResult::case_id).collect()
            }
            _ => Vec::new(),
        }
    }
}
