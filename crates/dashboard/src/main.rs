//! GitPulse - GitHub organization activity dashboard.
//!
//! A pure Rust frontend that compiles to WebAssembly. It talks to the
//! activity backend under `/api/v1` and renders aggregate cards, a
//! time-series chart, ranked tables, and a period-comparison view.

use dioxus::prelude::*;

mod api;
mod components;
mod fetch;

use components::{ComparisonPage, DashboardPage, Sidebar};

/// Organization the dashboard is scoped to; baked in at build time.
const ORG: Option<&str> = option_env!("GITPULSE_ORG");

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    DashboardPage {},
    #[route("/comparison")]
    ComparisonPage {},
}

fn main() {
    tracing_wasm::set_as_global_default();
    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        style { {include_str!("styles.css")} }
        if ORG.is_some() {
            Router::<Route> {}
        } else {
            MissingConfig {}
        }
    }
}

/// Blocking error screen shown instead of the dashboard when no
/// organization is configured.
#[component]
fn MissingConfig() -> Element {
    rsx! {
        div { class: "config-error",
            h2 { "Missing configuration" }
            p {
                "Set the "
                code { "GITPULSE_ORG" }
                " environment variable at build time to name the organization."
            }
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content", Outlet::<Route> {} }
        }
    }
}
