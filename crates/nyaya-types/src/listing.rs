//! Filter, sort and paginate pipeline shared by every list page.
//!
//! A page owns a [`ListState`] and mutates it only through
//! [`ListState::dispatch`]. Rendering calls [`ListState::apply`] against the
//! read-only records from the store.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::common::PaginatedResponse;

/// Filter value meaning "no filter". An empty string means the same.
pub const ALL_FILTER: &str = "all";

/// A record type that can flow through the listing pipeline.
pub trait Listable {
    /// Categorical fields that support exact-match filtering.
    type Filter: Copy + Ord;
    /// Fields that support sorting.
    type SortKey: Copy + PartialEq;

    /// Fields matched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    /// Raw value of a categorical field.
    fn filter_value(&self, field: Self::Filter) -> &str;

    /// Ascending comparison on `key`.
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Sort key for record types that are never sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unsorted {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListCommand<F, K> {
    SetQuery(String),
    SetFilter(F, String),
    ClearFilters,
    ToggleSort(K),
    GoToPage(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<K> {
    QueryChanged,
    FiltersChanged,
    SortChanged(Option<SortSpec<K>>),
    PageChanged(usize),
}

/// Query, filters, sort and page for one list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListState<F: Ord, K> {
    pub query: String,
    pub filters: BTreeMap<F, String>,
    pub sort: Option<SortSpec<K>>,
    pub page: usize,
    pub page_size: usize,
}

impl<F: Copy + Ord, K: Copy + PartialEq> ListState<F, K> {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn dispatch(&mut self, command: ListCommand<F, K>) -> Vec<ListEvent<K>> {
        match command {
            ListCommand::SetQuery(query) => {
                self.query = query;
                vec![ListEvent::QueryChanged, self.reset_page()]
            }
            ListCommand::SetFilter(field, value) => {
                if is_match_all(&value) {
                    self.filters.remove(&field);
                } else {
                    self.filters.insert(field, value);
                }
                vec![ListEvent::FiltersChanged, self.reset_page()]
            }
            ListCommand::ClearFilters => {
                self.query.clear();
                self.filters.clear();
                vec![
                    ListEvent::QueryChanged,
                    ListEvent::FiltersChanged,
                    self.reset_page(),
                ]
            }
            ListCommand::ToggleSort(key) => {
                let direction = match self.sort {
                    Some(current) if current.key == key => current.direction.flipped(),
                    _ => SortDirection::Asc,
                };
                self.sort = Some(SortSpec { key, direction });
                vec![ListEvent::SortChanged(self.sort)]
            }
            ListCommand::GoToPage(page) => {
                self.page = page.max(1);
                vec![ListEvent::PageChanged(self.page)]
            }
        }
    }

    /// Current value of a filter, or [`ALL_FILTER`] when unset.
    pub fn filter(&self, field: F) -> &str {
        self.filters
            .get(&field)
            .map(String::as_str)
            .unwrap_or(ALL_FILTER)
    }

    /// Direction of `key` if it is the active sort column.
    pub fn sort_direction(&self, key: K) -> Option<SortDirection> {
        self.sort
            .filter(|spec| spec.key == key)
            .map(|spec| spec.direction)
    }

    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Listable<Filter = F, SortKey = K>,
    {
        let needle = self.query.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));

        text_ok
            && self
                .filters
                .iter()
                .all(|(field, value)| record.filter_value(*field) == value)
    }

    /// Filter and sort without paging.
    pub fn filtered<T>(&self, records: &[T]) -> Vec<T>
    where
        T: Listable<Filter = F, SortKey = K> + Clone,
    {
        let mut rows: Vec<T> = records
            .iter()
            .filter(|record| self.matches(*record))
            .cloned()
            .collect();

        if let Some(spec) = self.sort {
            rows.sort_by(|a, b| a.compare_by(b, spec.key));
            if spec.direction == SortDirection::Desc {
                rows.reverse();
            }
        }
        rows
    }

    /// Full pipeline: filter, sort, then slice out the current page.
    pub fn apply<T>(&self, records: &[T]) -> PaginatedResponse<T>
    where
        T: Listable<Filter = F, SortKey = K> + Clone,
    {
        PaginatedResponse::paginate(self.filtered(records), self.page, self.page_size)
    }

    fn reset_page(&mut self) -> ListEvent<K> {
        self.page = 1;
        ListEvent::PageChanged(1)
    }
}

fn is_match_all(value: &str) -> bool {
    value.is_empty() || value == ALL_FILTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        colour: &'static str,
        size: u32,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
    enum RowFilter {
        Colour,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    enum RowSort {
        Name,
        Size,
    }

    impl Listable for Row {
        type Filter = RowFilter;
        type SortKey = RowSort;

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn filter_value(&self, field: RowFilter) -> &str {
            match field {
                RowFilter::Colour => self.colour,
            }
        }

        fn compare_by(&self, other: &Self, key: RowSort) -> Ordering {
            match key {
                RowSort::Name => self.name.cmp(other.name),
                RowSort::Size => self.size.cmp(&other.size),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Kamal",
                colour: "red",
                size: 3,
            },
            Row {
                name: "alina",
                colour: "blue",
                size: 1,
            },
            Row {
                name: "Bishal",
                colour: "red",
                size: 2,
            },
            Row {
                name: "Chandra",
                colour: "green",
                size: 2,
            },
        ]
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn empty_state_returns_source_order() {
        let state: ListState<RowFilter, RowSort> = ListState::new(10);
        assert_eq!(
            names(&state.filtered(&rows())),
            vec!["Kamal", "alina", "Bishal", "Chandra"]
        );
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(10);
        state.dispatch(ListCommand::SetQuery("  ALI ".into()));
        assert_eq!(names(&state.filtered(&rows())), vec!["alina"]);
    }

    #[test]
    fn all_sentinel_removes_filter() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(10);
        state.dispatch(ListCommand::SetFilter(RowFilter::Colour, "red".into()));
        assert_eq!(names(&state.filtered(&rows())), vec!["Kamal", "Bishal"]);

        state.dispatch(ListCommand::SetFilter(RowFilter::Colour, ALL_FILTER.into()));
        assert!(state.filters.is_empty());
        assert_eq!(state.filter(RowFilter::Colour), ALL_FILTER);
        assert_eq!(state.filtered(&rows()).len(), 4);
    }

    #[test]
    fn string_sort_is_byte_lexicographic() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(10);
        state.dispatch(ListCommand::ToggleSort(RowSort::Name));
        // Uppercase sorts before lowercase.
        assert_eq!(
            names(&state.filtered(&rows())),
            vec!["Bishal", "Chandra", "Kamal", "alina"]
        );
    }

    #[test]
    fn toggle_same_key_flips_and_new_key_resets() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(10);
        state.dispatch(ListCommand::ToggleSort(RowSort::Size));
        assert_eq!(state.sort_direction(RowSort::Size), Some(SortDirection::Asc));
        state.dispatch(ListCommand::ToggleSort(RowSort::Size));
        assert_eq!(state.sort_direction(RowSort::Size), Some(SortDirection::Desc));
        state.dispatch(ListCommand::ToggleSort(RowSort::Name));
        assert_eq!(state.sort_direction(RowSort::Name), Some(SortDirection::Asc));
        assert_eq!(state.sort_direction(RowSort::Size), None);
    }

    #[test]
    fn descending_is_exact_reverse_including_ties() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(10);
        state.dispatch(ListCommand::ToggleSort(RowSort::Size));
        let asc = state.filtered(&rows());
        assert_eq!(names(&asc), vec!["alina", "Bishal", "Chandra", "Kamal"]);

        state.dispatch(ListCommand::ToggleSort(RowSort::Size));
        let mut desc = state.filtered(&rows());
        desc.reverse();
        assert_eq!(desc, asc);
    }

    #[test]
    fn filter_and_query_changes_reset_page() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(1);
        state.dispatch(ListCommand::GoToPage(3));
        assert_eq!(state.page, 3);

        let events = state.dispatch(ListCommand::SetFilter(RowFilter::Colour, "red".into()));
        assert_eq!(state.page, 1);
        assert_eq!(
            events,
            vec![ListEvent::FiltersChanged, ListEvent::PageChanged(1)]
        );

        state.dispatch(ListCommand::GoToPage(2));
        state.dispatch(ListCommand::SetQuery("a".into()));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn sort_change_keeps_page() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(1);
        state.dispatch(ListCommand::GoToPage(2));
        state.dispatch(ListCommand::ToggleSort(RowSort::Name));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn apply_clamps_out_of_range_page() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(3);
        state.dispatch(ListCommand::GoToPage(40));
        let page = state.apply(&rows());
        assert_eq!(page.meta.page, 2);
        assert_eq!(names(&page.data), vec!["Chandra"]);

        state.dispatch(ListCommand::GoToPage(0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn clear_filters_resets_everything_but_sort() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(2);
        state.dispatch(ListCommand::SetQuery("a".into()));
        state.dispatch(ListCommand::SetFilter(RowFilter::Colour, "red".into()));
        state.dispatch(ListCommand::ToggleSort(RowSort::Name));
        state.dispatch(ListCommand::GoToPage(2));
        state.dispatch(ListCommand::ClearFilters);

        assert!(state.query.is_empty());
        assert!(state.filters.is_empty());
        assert_eq!(state.page, 1);
        assert!(state.sort.is_some());
    }

    #[test]
    fn state_serializes_for_inspection() {
        let mut state: ListState<RowFilter, RowSort> = ListState::new(10);
        state.dispatch(ListCommand::SetQuery("kam".into()));
        state.dispatch(ListCommand::SetFilter(RowFilter::Colour, "red".into()));
        state.dispatch(ListCommand::ToggleSort(RowSort::Size));
        state.dispatch(ListCommand::ToggleSort(RowSort::Size));
        state.dispatch(ListCommand::GoToPage(3));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["query"], "kam");
        assert_eq!(json["filters"]["Colour"], "red");
        assert_eq!(json["sort"]["key"], "Size");
        assert_eq!(json["sort"]["direction"], "desc");
        assert_eq!(json["page"], 3);
        assert_eq!(json["page_size"], 10);

        let restored: ListState<RowFilter, RowSort> = serde_json::from_value(json).unwrap();
        assert_eq!(restored, state);
    }
}
