use chrono::NaiveDate;
use nyaya_types::{CalendarCommand, CalendarState, CalendarView};
use pretty_assertions::assert_eq;

use crate::common::{april, test_config};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_state_starts_on_configured_today() {
    let config = test_config();
    let state = CalendarState::new(config.calendar.today.unwrap());
    assert_eq!(state.selected, april(22));
    assert_eq!(state.view, CalendarView::Month);
    assert_eq!(state.filter, None);
}

#[tokio::test]
async fn test_day_steps_cross_month_boundaries() {
    let mut state = CalendarState::new(date(2025, 3, 1));
    state.dispatch(CalendarCommand::PrevDay);
    assert_eq!(state.selected, date(2025, 2, 28));
    state.dispatch(CalendarCommand::NextDay);
    state.dispatch(CalendarCommand::NextDay);
    assert_eq!(state.selected, date(2025, 3, 2));
}

#[tokio::test]
async fn test_month_steps_clamp_day_of_month() {
    let mut state = CalendarState::new(date(2025, 1, 31));
    state.dispatch(CalendarCommand::NextMonth);
    assert_eq!(state.selected, date(2025, 2, 28));
    state.dispatch(CalendarCommand::PrevMonth);
    assert_eq!(state.selected, date(2025, 1, 28));
}

#[tokio::test]
async fn test_today_and_select_jump_directly() {
    let mut state = CalendarState::new(april(22));
    state.dispatch(CalendarCommand::Select(date(2024, 12, 25)));
    assert_eq!(state.selected, date(2024, 12, 25));
    state.dispatch(CalendarCommand::Today(april(22)));
    assert_eq!(state.selected, april(22));
}

#[tokio::test]
async fn test_view_switch_keeps_selection() {
    let mut state = CalendarState::new(april(22));
    state.dispatch(CalendarCommand::NextDay);
    state.dispatch(CalendarCommand::SetView(CalendarView::Day));
    assert_eq!(state.view, CalendarView::Day);
    assert_eq!(state.selected, april(23));
}
