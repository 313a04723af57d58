use dioxus::prelude::*;
use tracing::{debug, error, warn};

use gitpulse_core::{
    dates, DashboardData, DashboardQuery, Granularity, RankingKind, RankingType,
};

use crate::api::ApiClient;
use crate::fetch;

use super::fmt::format_count;
use super::metrics_card::MetricsCard;
use super::pickers::DateRangePicker;
use super::ranking_table::RankingTable;
use super::repository_filter::RepositoryFilter;
use super::timeseries_chart::TimeseriesChart;

/// Main dashboard page: date range, ranking type and repository filter
/// drive one fetch cycle; cards, chart and tables render the result.
#[component]
pub fn DashboardPage() -> Element {
    let org = crate::ORG.unwrap_or_default();

    let mut range = use_signal(|| {
        let (start, end) = dates::default_range(chrono::Local::now().date_naive());
        (dates::format_day(start), dates::format_day(end))
    });
    let mut ranking = use_signal(|| RankingType::Commits);
    let mut selected_repos = use_signal(Vec::<String>::new);
    let mut all_repos = use_signal(Vec::<String>::new);
    let mut data = use_signal(|| None::<DashboardData>);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    // Monotonic refresh token; completions from an older refresh are stale
    // and must not overwrite newer state.
    let mut generation = use_signal(|| 0u64);

    let refresh = move || {
        let (start, end) = range();
        let query = DashboardQuery {
            org: org.to_string(),
            start,
            end,
            ranking: ranking(),
            granularity: Granularity::Day,
            repos: selected_repos(),
        };
        let current = *generation.peek() + 1;
        generation.set(current);
        loading.set(true);
        error_msg.set(None);
        spawn(async move {
            let result = fetch::load_dashboard(&ApiClient, &query).await;
            if *generation.peek() != current {
                debug!(generation = current, "discarding stale dashboard refresh");
                return;
            }
            match result {
                Ok(page) => {
                    // Any repositories the ranking surfaced join the filter
                    // list.
                    let mut known = all_repos.peek().clone();
                    let before = known.len();
                    for item in &page.repo_ranking {
                        if !known.contains(&item.name) {
                            known.push(item.name.clone());
                        }
                    }
                    if known.len() != before {
                        all_repos.set(known);
                    }
                    data.set(Some(page));
                }
                Err(err) => {
                    error!(%err, "dashboard refresh failed");
                    error_msg.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    // Refetch whenever the range, ranking type or repository filter changes.
    use_effect(move || refresh());

    // Populate the repository filter once, from an unbounded repo ranking.
    use_effect(move || {
        spawn(async move {
            let (start, end) = range.peek().clone();
            match fetch::load_repo_list(&ApiClient, org, &start, &end).await {
                Ok(repos) => all_repos.set(repos),
                Err(err) => warn!(%err, "failed to load repository list"),
            }
        });
    });

    let filtered = !selected_repos().is_empty();

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-controls",
                DateRangePicker {
                    start: range().0,
                    end: range().1,
                    on_change: move |(start, end)| range.set((start, end)),
                }
                div { class: "ranking-type-selector",
                    label { "Ranking:" }
                    select {
                        class: "type-select",
                        onchange: move |e| {
                            if let Some(ty) = RankingType::parse(&e.value()) {
                                ranking.set(ty);
                            }
                        },
                        for ty in RankingType::ALL {
                            option {
                                value: "{ty.as_str()}",
                                selected: ranking() == ty,
                                "{ty.label()}"
                            }
                        }
                    }
                }
                if !all_repos().is_empty() {
                    RepositoryFilter {
                        repositories: all_repos(),
                        selected: selected_repos(),
                        on_change: move |repos| selected_repos.set(repos),
                    }
                }
            }

            if loading() {
                div { class: "dashboard-loading",
                    div { class: "spinner" }
                    p { "Loading activity data..." }
                }
            } else if let Some(err) = error_msg() {
                div { class: "dashboard-error",
                    p { "Error: {err}" }
                    button { class: "retry-btn", onclick: move |_| refresh(), "Retry" }
                }
            } else if let Some(page) = data() {
                div { class: "metrics-grid",
                    MetricsCard {
                        title: "Repositories",
                        value: format_count(page.metrics.total_repos),
                        filtered: false,
                    }
                    MetricsCard {
                        title: "Members",
                        value: format_count(page.metrics.total_members),
                        filtered: false,
                    }
                    MetricsCard {
                        title: "Commits",
                        value: format_count(page.metrics.activity.commits),
                        filtered,
                    }
                    MetricsCard {
                        title: "Pull Requests",
                        value: format_count(page.metrics.activity.prs),
                        filtered,
                    }
                    MetricsCard {
                        title: "Additions",
                        value: format_count(page.metrics.activity.additions),
                        filtered,
                    }
                    MetricsCard {
                        title: "Deletions",
                        value: format_count(page.metrics.activity.deletions),
                        filtered,
                    }
                    MetricsCard {
                        title: "Deploys",
                        value: format_count(page.metrics.activity.deploys),
                        filtered,
                    }
                }

                div { class: "chart-section",
                    div { class: "section-header",
                        h2 { "Activity over time" }
                        if filtered {
                            span { class: "filter-indicator",
                                "Filtered ({selected_repos().len()} repositories)"
                            }
                        }
                    }
                    if page.timeseries.is_empty() {
                        div { class: "no-data-message",
                            p { "No time-series data for this range" }
                        }
                    } else {
                        TimeseriesChart { points: page.timeseries.clone() }
                    }
                }

                div { class: "rankings-grid",
                    div { class: "ranking-section",
                        div { class: "section-header",
                            h2 { "Member ranking ({ranking().label()})" }
                            if filtered {
                                span { class: "filter-indicator", "Filtered" }
                            }
                        }
                        RankingTable {
                            items: page.member_ranking.clone(),
                            kind: RankingKind::Member,
                        }
                    }
                    div { class: "ranking-section",
                        div { class: "section-header",
                            h2 { "Repository ranking ({ranking().label()})" }
                            if filtered {
                                span { class: "filter-indicator", "Filtered" }
                            }
                        }
                        RankingTable {
                            items: page.repo_ranking.clone(),
                            kind: RankingKind::Repo,
                        }
                    }
                }
            }
        }
    }
}
