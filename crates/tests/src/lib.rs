#[cfg(test)]
mod common;

#[cfg(test)]
mod action_failure_tests;
#[cfg(test)]
mod calendar_day_tests;
#[cfg(test)]
mod calendar_navigation_tests;
#[cfg(test)]
mod case_detail_tests;
#[cfg(test)]
mod case_list_tests;
#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod login_flow_tests;
#[cfg(test)]
mod people_list_tests;
#[cfg(test)]
mod petition_submit_tests;
#[cfg(test)]
mod related_case_tests;
#[cfg(test)]
mod search_action_tests;
