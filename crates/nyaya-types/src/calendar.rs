use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::case::CaseStatus;

/// Kind of scheduled event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventType {
    #[serde(rename = "hearing")]
    Hearing,
    #[serde(rename = "meeting")]
    Meeting,
    #[serde(rename = "deadline")]
    Deadline,
    #[serde(rename = "other")]
    Other,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Hearing,
        EventType::Meeting,
        EventType::Deadline,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hearing => "hearing",
            Self::Meeting => "meeting",
            Self::Deadline => "deadline",
            Self::Other => "other",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "hearing" => Some(Self::Hearing),
            "meeting" => Some(Self::Meeting),
            "deadline" => Some(Self::Deadline),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hearing => "Hearing",
            Self::Meeting => "Meeting",
            Self::Deadline => "Deadline",
            Self::Other => "Other",
        }
    }

    /// Label in the filter select.
    pub fn filter_label(&self) -> &'static str {
        match self {
            Self::Hearing => "Hearings",
            Self::Meeting => "Meetings",
            Self::Deadline => "Deadlines",
            Self::Other => "Other",
        }
    }

    pub fn tone(&self) -> CaseStatus {
        match self {
            Self::Hearing => CaseStatus::Investigation,
            Self::Meeting => CaseStatus::Resolved,
            Self::Deadline => CaseStatus::Pending,
            Self::Other => CaseStatus::Action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    /// Display time, `hh:mm AM`.
    pub time: String,
    pub event_type: EventType,
    pub location: String,
    pub case_id: Option<u32>,
    pub case_number: Option<String>,
    pub description: String,
    pub participants: Vec<String>,
    pub completed: bool,
}

impl CalendarEvent {
    /// Parsed time of day, `None` when the display string is malformed.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.time.trim(), "%I:%M %p").ok()
    }

    fn matches(&self, filter: Option<EventType>) -> bool {
        filter.is_none_or(|kind| self.event_type == kind)
    }
}

/// Orders unparseable times after every parseable one.
fn time_key(event: &CalendarEvent) -> (bool, Option<NaiveTime>) {
    let time = event.time_of_day();
    (time.is_none(), time)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CalendarView {
    #[default]
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "list")]
    List,
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [CalendarView::Month, CalendarView::Day, CalendarView::List];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Day => "day",
            Self::List => "list",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Day => "Day",
            Self::List => "List",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarCommand {
    PrevDay,
    NextDay,
    Today(NaiveDate),
    Select(NaiveDate),
    PrevMonth,
    NextMonth,
    SetView(CalendarView),
    SetFilter(Option<EventType>),
}

/// Selected date, view and type filter of the calendar page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarState {
    pub selected: NaiveDate,
    pub view: CalendarView,
    pub filter: Option<EventType>,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected: today,
            view: CalendarView::Month,
            filter: None,
        }
    }

    pub fn dispatch(&mut self, command: CalendarCommand) {
        match command {
            CalendarCommand::PrevDay => {
                self.selected = self.selected.pred_opt().unwrap_or(self.selected);
            }
            CalendarCommand::NextDay => {
                self.selected = self.selected.succ_opt().unwrap_or(self.selected);
            }
            CalendarCommand::Today(date) | CalendarCommand::Select(date) => {
                self.selected = date;
            }
            CalendarCommand::PrevMonth => {
                self.selected = self
                    .selected
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(self.selected);
            }
            CalendarCommand::NextMonth => {
                self.selected = self
                    .selected
                    .checked_add_months(Months::new(1))
                    .unwrap_or(self.selected);
            }
            CalendarCommand::SetView(view) => self.view = view,
            CalendarCommand::SetFilter(filter) => self.filter = filter,
        }
    }

    /// Events shown by the day view.
    pub fn day_view(&self, events: &[CalendarEvent]) -> Vec<CalendarEvent> {
        day_view(events, self.selected, self.filter)
    }

    /// Events shown by the list view.
    pub fn upcoming(&self, events: &[CalendarEvent], today: NaiveDate) -> Vec<CalendarEvent> {
        upcoming(events, today, self.filter)
    }
}

/// Sunday-first weeks covering `month`. Cells outside the month are `None`.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = first.weekday().num_days_from_sunday() as usize;
    let mut day = first;

    while day.month() == month {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// All events on `date`, ignoring the type filter.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    events.iter().filter(|e| e.date == date).cloned().collect()
}

pub fn has_events(events: &[CalendarEvent], date: NaiveDate) -> bool {
    events.iter().any(|e| e.date == date)
}

/// Events on `date` matching `filter`, ordered by time of day.
pub fn day_view(
    events: &[CalendarEvent],
    date: NaiveDate,
    filter: Option<EventType>,
) -> Vec<CalendarEvent> {
    let mut day: Vec<CalendarEvent> = events
        .iter()
        .filter(|e| e.date == date && e.matches(filter))
        .cloned()
        .collect();
    day.sort_by_key(time_key);
    day
}

/// Events on or after `today` matching `filter`, ordered by date then time.
pub fn upcoming(
    events: &[CalendarEvent],
    today: NaiveDate,
    filter: Option<EventType>,
) -> Vec<CalendarEvent> {
    let mut rows: Vec<CalendarEvent> = events
        .iter()
        .filter(|e| e.date >= today && e.matches(filter))
        .cloned()
        .collect();
    rows.sort_by_key(|e| (e.date, time_key(e)));
    rows
}

/// Form state of the "Add Event" sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub event_type: Option<EventType>,
    pub location: String,
    /// Case number, or `None` for "None".
    pub related_case: Option<String>,
    pub participants: String,
    pub description: String,
}

/// Choices for the "Related Case" select: (case number, case type).
pub const RELATED_CASE_OPTIONS: &[(&str, &str)] = &[
    ("2081-CR-001", "Property Dispute"),
    ("2081-CR-002", "Theft"),
    ("2081-CR-003", "Assault"),
    ("2081-CR-004", "Fraud"),
];
