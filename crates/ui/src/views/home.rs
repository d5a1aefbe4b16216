use std::sync::Arc;

use dioxus::prelude::*;

use tracker_core::model::WeekStart;

use crate::context::AppContext;
use crate::views::edit_modal::EditProgressModal;
use crate::views::state::{FetchState, fetch_state_from_outcome, fetch_state_from_resource};
use crate::views::week_table::WeekTable;
use crate::vm::{EditDraft, WeekVm};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let current_week = ctx.current_week();
    let last_week = ctx.last_week();

    let mut edit_draft = use_signal(|| None::<EditDraft>);
    let on_edit = use_callback(move |draft: EditDraft| edit_draft.set(Some(draft)));

    rsx! {
        div { class: "page",
            h2 { "Weekly Drop Progress" }

            WeekSection {
                title: format!("Current Week ({current_week})"),
                week: current_week.as_query(),
                on_edit,
            }
            WeekSection {
                title: format!("Last Week ({last_week})"),
                week: last_week.as_query(),
                on_edit,
            }
            OtherWeekPanel { on_edit }

            if let Some(draft) = edit_draft() {
                EditProgressModal {
                    draft,
                    on_close: move |()| edit_draft.set(None),
                    on_save: move |_| edit_draft.set(None),
                }
            }
        }
    }
}

#[component]
fn WeekSection(title: String, week: String, on_edit: Callback<EditDraft>) -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.week_data();

    let resource = use_resource(move || {
        let api = Arc::clone(&api);
        let week = week.clone();
        async move { api.fetch_week(&week).await.map_err(|err| err.to_string()) }
    });
    let state = fetch_state_from_resource(&resource);

    rsx! {
        section { class: "week-section",
            h3 { "{title}" }
            WeekTable { state, on_edit }
        }
    }
}

#[component]
fn OtherWeekPanel(on_edit: Callback<EditDraft>) -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.week_data();

    let mut picked_date = use_signal(String::new);
    let mut state = use_signal(|| FetchState::<WeekVm>::Idle);

    let fetch = use_callback(move |_: ()| {
        let date = picked_date();
        // A date that is not a Wednesday never reaches the client.
        if let Err(err) = WeekStart::parse(&date) {
            state.set(FetchState::Error(err.to_string()));
            return;
        }
        state.set(FetchState::Loading);
        let api = Arc::clone(&api);
        spawn(async move {
            let outcome = api.fetch_week(&date).await;
            // Overlapping fetches race; the last one to settle wins the display.
            state.set(fetch_state_from_outcome(outcome));
        });
    });

    rsx! {
        section { class: "week-section other-week",
            h3 { "Other Weeks" }
            div { class: "other-week-controls",
                input {
                    r#type: "date",
                    value: "{picked_date}",
                    oninput: move |evt| picked_date.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| fetch.call(()),
                    "Fetch Week"
                }
            }
            WeekTable { state: state(), on_edit }
        }
    }
}
