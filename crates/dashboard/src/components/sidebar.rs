use dioxus::prelude::*;

use crate::Route;

/// Persistent navigation rail.
#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<Route>();
    let org = crate::ORG.unwrap_or_default();

    rsx! {
        nav { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "GitPulse" }
                p { class: "org-name", "{org}" }
            }
            ul { class: "sidebar-menu",
                li {
                    Link {
                        to: Route::DashboardPage {},
                        class: if matches!(route, Route::DashboardPage {}) { "active" } else { "" },
                        "Dashboard"
                    }
                }
                li {
                    Link {
                        to: Route::ComparisonPage {},
                        class: if matches!(route, Route::ComparisonPage {}) { "active" } else { "" },
                        "Period Comparison"
                    }
                }
            }
        }
    }
}
