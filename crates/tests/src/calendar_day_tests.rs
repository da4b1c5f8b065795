use nyaya_types::{
    day_view, events_on, has_events, month_grid, upcoming, CalendarCommand, CalendarEvent,
    CalendarState, EventType,
};
use pretty_assertions::assert_eq;

use crate::common::{april, test_store};

fn titles(rows: &[CalendarEvent]) -> Vec<&str> {
    rows.iter().map(|e| e.title.as_str()).collect()
}

#[tokio::test]
async fn test_day_view_orders_by_time() {
    let store = test_store();
    let rows = day_view(store.events(), april(22), None);
    assert_eq!(titles(&rows), vec!["Case Filing Review", "Case Review Meeting"]);
}

#[tokio::test]
async fn test_unparseable_time_sorts_last() {
    let store = test_store();
    let mut events = store.events().to_vec();
    let mut odd = events[0].clone();
    odd.id = 99;
    odd.title = "Site Visit".into();
    odd.date = april(22);
    odd.time = "after lunch".into();
    events.insert(0, odd);

    let rows = day_view(&events, april(22), None);
    assert_eq!(
        titles(&rows),
        vec!["Case Filing Review", "Case Review Meeting", "Site Visit"]
    );
}

#[tokio::test]
async fn test_type_filter_applies_to_day_and_list() {
    let store = test_store();
    let mut state = CalendarState::new(april(22));
    state.dispatch(CalendarCommand::SetFilter(Some(EventType::Meeting)));

    assert_eq!(titles(&state.day_view(store.events())), vec!["Case Review Meeting"]);
    assert_eq!(
        titles(&state.upcoming(store.events(), april(23))),
        vec!["Witness Interview"]
    );

    state.dispatch(CalendarCommand::SetFilter(None));
    assert_eq!(state.day_view(store.events()).len(), 2);
}

#[tokio::test]
async fn test_upcoming_starts_today_in_date_order() {
    let store = test_store();
    let rows = upcoming(store.events(), april(24), None);
    assert_eq!(
        titles(&rows),
        vec!["Witness Interview", "Evidence Submission Deadline", "Follow-up Hearing"]
    );
    assert!(upcoming(store.events(), april(30).succ_opt().unwrap(), None).is_empty());
}

#[tokio::test]
async fn test_month_markers_ignore_filter() {
    let store = test_store();
    assert!(has_events(store.events(), april(23)));
    assert!(!has_events(store.events(), april(21)));
    assert_eq!(events_on(store.events(), april(22)).len(), 2);
}

#[tokio::test]
async fn test_april_2025_grid() {
    let weeks = month_grid(2025, 4);
    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[0][0], None);
    assert_eq!(weeks[0][1], None);
    assert_eq!(weeks[0][2], Some(april(1)));
    assert_eq!(weeks[4][3], Some(april(30)));
    assert_eq!(weeks[4][4], None);

    let days = weeks.iter().flatten().filter(|d| d.is_some()).count();
    assert_eq!(days, 30);
}

#[tokio::test]
async fn test_invalid_month_has_no_grid() {
    assert!(month_grid(2025, 13).is_empty());
}
