//! Date pickers with a single interaction contract: keystrokes edit local
//! draft state, and the parent is notified on blur or Enter, never per
//! keystroke.

use dioxus::prelude::*;

/// Start/end pair for the dashboard.
#[component]
pub fn DateRangePicker(start: String, end: String, on_change: EventHandler<(String, String)>) -> Element {
    let mut draft_start = use_signal(|| start.clone());
    let mut draft_end = use_signal(|| end.clone());

    // Resync drafts when the parent range changes from outside.
    use_effect(use_reactive!(|(start, end)| {
        draft_start.set(start);
        draft_end.set(end);
    }));

    let commit = move || on_change.call((draft_start(), draft_end()));

    rsx! {
        div { class: "date-range-picker",
            label { "Range:" }
            input {
                r#type: "date",
                class: "date-input",
                value: "{draft_start}",
                oninput: move |e| draft_start.set(e.value()),
                onfocusout: move |_| commit(),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        commit();
                    }
                },
            }
            span { class: "date-separator", "–" }
            input {
                r#type: "date",
                class: "date-input",
                value: "{draft_end}",
                oninput: move |e| draft_end.set(e.value()),
                onfocusout: move |_| commit(),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        commit();
                    }
                },
            }
        }
    }
}

/// Single start-date input for a comparison period.
#[component]
pub fn StartDatePicker(label: String, value: String, on_change: EventHandler<String>) -> Element {
    let mut draft = use_signal(|| value.clone());

    use_effect(use_reactive!(|(value,)| draft.set(value)));

    let commit = move || on_change.call(draft());

    rsx! {
        label { class: "start-date-picker",
            "{label}"
            input {
                r#type: "date",
                class: "date-input",
                value: "{draft}",
                oninput: move |e| draft.set(e.value()),
                onfocusout: move |_| commit(),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        commit();
                    }
                },
            }
        }
    }
}
