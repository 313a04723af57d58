use dioxus::prelude::*;

use gitpulse_core::{RankingItem, RankingKind};

use super::fmt::format_count;

/// Ranked rows; the code-change column only renders for member rankings.
#[component]
pub fn RankingTable(items: Vec<RankingItem>, kind: RankingKind) -> Element {
    if items.is_empty() {
        return rsx! {
            p { class: "no-data", "No data" }
        };
    }
    let member = kind == RankingKind::Member;

    rsx! {
        div { class: "ranking-table-container",
            table { class: "ranking-table",
                thead {
                    tr {
                        th { "Rank" }
                        th {
                            if member { "Member" } else { "Repository" }
                        }
                        th { "Value" }
                        th { "Commits" }
                        th { "PRs" }
                        if member {
                            th { "Code Changes" }
                        }
                        th { "Deploys" }
                    }
                }
                tbody {
                    for item in items {
                        tr { key: "{item.name}",
                            td { class: "rank-cell",
                                span { class: "rank-badge", "{item.rank}" }
                            }
                            td { class: "name-cell", strong { "{item.name}" } }
                            td { class: "value-cell",
                                span { class: "primary-value", {format_count(item.value)} }
                            }
                            td { {format_count(item.activity.commits)} }
                            td { {format_count(item.activity.prs)} }
                            if member {
                                td {
                                    if item.activity.additions + item.activity.deletions > 0 {
                                        {format_count(item.activity.additions + item.activity.deletions)}
                                    } else {
                                        "-"
                                    }
                                }
                            }
                            td { {format_count(item.activity.deploys)} }
                        }
                    }
                }
            }
        }
    }
}
