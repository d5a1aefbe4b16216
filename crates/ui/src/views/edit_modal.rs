use dioxus::prelude::*;

use crate::vm::EditDraft;

/// The edit dialog, pre-filled from the row metadata that opened it.
///
/// Fields arrive verbatim from the row (empty strings for anything the week
/// had no value for) and leave through `on_save` without validation.
/// Submitting the update itself is the caller's concern; this dialog only
/// prepares the fields and the form target.
#[component]
pub fn EditProgressModal(
    draft: EditDraft,
    on_close: Callback<()>,
    on_save: Callback<EditDraft>,
) -> Element {
    let mut drop_farmed = use_signal(|| draft.drop_farmed);
    let mut case_name = use_signal(|| draft.case_name.clone());
    let mut additional_drop = use_signal(|| draft.additional_drop.clone());

    let action = draft.action_path();
    let saved = draft.clone();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Edit Progress" }
                form { action: "{action}", method: "post",
                    p { class: "modal-meta",
                        span { class: "modal-account", "{draft.account_name}" }
                        span { class: "modal-week", "Week of {draft.week_start}" }
                    }
                    label { class: "modal-field modal-field-check",
                        input {
                            r#type: "checkbox",
                            checked: drop_farmed(),
                            onchange: move |evt| drop_farmed.set(evt.checked()),
                        }
                        "Drop farmed"
                    }
                    label { class: "modal-field",
                        "Case"
                        input {
                            r#type: "text",
                            value: "{case_name}",
                            oninput: move |evt| case_name.set(evt.value()),
                        }
                    }
                    label { class: "modal-field",
                        "Additional drop"
                        input {
                            r#type: "text",
                            value: "{additional_drop}",
                            oninput: move |evt| additional_drop.set(evt.value()),
                        }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn modal-cancel",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                on_save.call(EditDraft {
                                    drop_farmed: drop_farmed(),
                                    case_name: case_name(),
                                    additional_drop: additional_drop(),
                                    ..saved.clone()
                                });
                            },
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
