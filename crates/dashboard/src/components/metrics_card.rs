use dioxus::prelude::*;

/// Label/value card with an optional repository-filter badge.
#[component]
pub fn MetricsCard(title: String, value: String, filtered: bool) -> Element {
    rsx! {
        div { class: if filtered { "metrics-card filtered" } else { "metrics-card" },
            div { class: "metrics-card-header",
                div { class: "metrics-card-title", "{title}" }
                if filtered {
                    span { class: "filter-badge", title: "Repository filter active", "🔍" }
                }
            }
            div { class: "metrics-card-value", "{value}" }
        }
    }
}
