use dioxus::prelude::*;

use services::{WeekDataError, WeekFetch};

use crate::vm::{WeekVm, map_week_vm};

/// Render states for a week's table.
///
/// Exactly one state is shown at a time; a fresh fetch replaces whatever was
/// visible before. `Empty` is a valid zero-row result, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Empty,
    Error(String),
}

/// Maps a resolved client outcome into the matching render state.
#[must_use]
pub fn fetch_state_from_outcome(outcome: Result<WeekFetch, WeekDataError>) -> FetchState<WeekVm> {
    match outcome {
        Ok(WeekFetch::Rows(result)) => FetchState::Ready(map_week_vm(&result)),
        Ok(WeekFetch::Empty) => FetchState::Empty,
        Err(err) => FetchState::Error(err.to_string()),
    }
}

/// Maps a `use_resource` handle into a render state. The async block is
/// expected to pre-map its error into the banner message.
#[must_use]
pub fn fetch_state_from_resource(
    resource: &Resource<Result<WeekFetch, String>>,
) -> FetchState<WeekVm> {
    match resource.state().cloned() {
        UseResourceState::Pending => FetchState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(WeekFetch::Rows(result))) => FetchState::Ready(map_week_vm(result)),
            Some(Ok(WeekFetch::Empty)) => FetchState::Empty,
            Some(Err(message)) => FetchState::Error(message.clone()),
            None => FetchState::Loading,
        },
        UseResourceState::Paused | UseResourceState::Stopped => FetchState::Idle,
    }
}
