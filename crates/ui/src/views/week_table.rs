use dioxus::prelude::*;

use crate::views::state::FetchState;
use crate::vm::{EditDraft, WeekRowVm, WeekVm};

const COLUMN_COUNT: &str = "6";

/// The week table plus its error banner and aggregate footer.
///
/// The banner is visible only in the error state; every other state leaves it
/// hidden. The footer appears only for a ready week that carried an aggregate.
#[component]
pub fn WeekTable(state: FetchState<WeekVm>, on_edit: Callback<EditDraft>) -> Element {
    let footer_total = match &state {
        FetchState::Ready(vm) => vm.total_label.clone(),
        _ => None,
    };

    rsx! {
        if let FetchState::Error(message) = &state {
            div { class: "error-banner", role: "alert", "{message}" }
        }
        table { class: "progress-table",
            thead {
                tr {
                    th { "Account" }
                    th { "Drop Farmed" }
                    th { "Case" }
                    th { "Additional Drop" }
                    th { "Value" }
                    th { "Actions" }
                }
            }
            tbody {
                match &state {
                    FetchState::Idle => rsx! {
                        tr {
                            td { colspan: COLUMN_COUNT, class: "placeholder",
                                "Pick a Wednesday to load a week."
                            }
                        }
                    },
                    FetchState::Loading => rsx! {
                        tr {
                            td { colspan: COLUMN_COUNT, class: "placeholder", "Loading..." }
                        }
                    },
                    FetchState::Empty => rsx! {
                        tr {
                            td { colspan: COLUMN_COUNT, class: "placeholder",
                                "No progress found for this week."
                            }
                        }
                    },
                    FetchState::Error(_) => rsx! {
                        tr {
                            td { colspan: COLUMN_COUNT, class: "placeholder placeholder-error",
                                "Error loading data."
                            }
                        }
                    },
                    FetchState::Ready(vm) => rsx! {
                        for row in vm.rows.clone() {
                            WeekRow { row, on_edit }
                        }
                    },
                }
            }
            if let Some(total) = footer_total {
                tfoot {
                    tr { class: "week-total",
                        td { colspan: "5", "Week Total Value" }
                        td { class: "value", "{total}" }
                    }
                }
            }
        }
    }
}

#[component]
fn WeekRow(row: WeekRowVm, on_edit: Callback<EditDraft>) -> Element {
    rsx! {
        tr {
            td {
                a { href: "{row.profile_url}", target: "_blank", "{row.account_name}" }
            }
            td { "{row.farmed_label}" }
            td { "{row.case_label}" }
            td { "{row.drop_label}" }
            td { class: "value", "{row.value_label}" }
            td { class: "actions",
                if let Some(draft) = row.edit.clone() {
                    button {
                        class: "btn btn-edit",
                        r#type: "button",
                        onclick: move |_| on_edit.call(draft.clone()),
                        "Edit"
                    }
                } else {
                    "-"
                }
            }
        }
    }
}
