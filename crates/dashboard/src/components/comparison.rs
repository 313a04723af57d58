use dioxus::prelude::*;
use tracing::{debug, error, warn};

use gitpulse_core::{
    dates, ComparisonData, ComparisonQuery, DateWindow, MemberComparison, PeriodPreset,
};

use crate::api::ApiClient;
use crate::fetch;

use super::fmt::{format_count, format_diff};
use super::pickers::StartDatePicker;

/// Derive the inclusive window for a period start typed by the user. An
/// unparseable start collapses to a single-day window around the raw text so
/// the request still carries what was typed.
fn window(start: &str, days: u32) -> DateWindow {
    match dates::parse_day(start) {
        Some(day) => DateWindow::from_days(day, days),
        None => DateWindow {
            start: start.to_string(),
            end: start.to_string(),
        },
    }
}

/// Period comparison page: two windows compared head-to-head, org-wide and
/// per selected member.
#[component]
pub fn ComparisonPage() -> Element {
    let org = crate::ORG.unwrap_or_default();
    let today = chrono::Local::now().date_naive();

    let mut preset = use_signal(|| PeriodPreset::Month);
    let mut period1_start = use_signal(|| {
        let (p1, _, _) = dates::preset_windows(today, PeriodPreset::Month);
        dates::format_day(p1)
    });
    let mut period2_start = use_signal(|| {
        let (_, p2, _) = dates::preset_windows(today, PeriodPreset::Month);
        dates::format_day(p2)
    });
    let mut days = use_signal(|| 30u32);
    let mut selected_members = use_signal(Vec::<String>::new);
    let mut all_members = use_signal(Vec::<String>::new);
    let mut data = use_signal(|| None::<ComparisonData>);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let mut generation = use_signal(|| 0u64);

    // Switching the preset rewrites both period starts and the day count.
    use_effect(move || {
        let (p1, p2, preset_days) = dates::preset_windows(today, preset());
        period1_start.set(dates::format_day(p1));
        period2_start.set(dates::format_day(p2));
        days.set(preset_days);
    });

    // The member list covers the union span of both windows.
    use_effect(move || {
        let union = ComparisonQuery {
            org: org.to_string(),
            period1: window(&period1_start(), days()),
            period2: window(&period2_start(), days()),
            members: Vec::new(),
        }
        .union_window();
        spawn(async move {
            match fetch::load_member_list(&ApiClient, org, &union).await {
                Ok(members) => all_members.set(members),
                Err(err) => warn!(%err, "failed to load member list"),
            }
        });
    });

    let refresh = move || {
        let query = ComparisonQuery {
            org: org.to_string(),
            period1: window(&period1_start(), days()),
            period2: window(&period2_start(), days()),
            members: selected_members(),
        };
        let current = *generation.peek() + 1;
        generation.set(current);
        loading.set(true);
        error_msg.set(None);
        spawn(async move {
            let result = fetch::load_comparison(&ApiClient, &query).await;
            if *generation.peek() != current {
                debug!(generation = current, "discarding stale comparison refresh");
                return;
            }
            match result {
                Ok(page) => data.set(Some(page)),
                Err(err) => {
                    error!(%err, "comparison refresh failed");
                    error_msg.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || refresh());

    if loading() {
        return rsx! {
            div { class: "comparison-loading",
                div { class: "spinner" }
                p { "Loading comparison data..." }
            }
        };
    }
    if let Some(err) = error_msg() {
        return rsx! {
            div { class: "comparison-error",
                p { "Error: {err}" }
                button { class: "retry-btn", onclick: move |_| refresh(), "Retry" }
            }
        };
    }

    let period1 = window(&period1_start(), days());
    let period2 = window(&period2_start(), days());

    rsx! {
        div { class: "comparison",
            div { class: "comparison-header",
                h1 { "Period Comparison" }
                div { class: "period-type-selector",
                    label { "Period type:" }
                    select {
                        class: "type-select",
                        onchange: move |e| {
                            if let Some(p) = PeriodPreset::parse(&e.value()) {
                                preset.set(p);
                            }
                        },
                        option {
                            value: "month",
                            selected: preset() == PeriodPreset::Month,
                            "One month"
                        }
                        option {
                            value: "week",
                            selected: preset() == PeriodPreset::Week,
                            "One week"
                        }
                    }
                }
            }

            div { class: "period-selectors",
                div { class: "days-selector",
                    label {
                        "Days:"
                        input {
                            r#type: "number",
                            class: "days-input",
                            min: "1",
                            max: "365",
                            value: "{days}",
                            onchange: move |e| {
                                let parsed = e.value().parse::<u32>().unwrap_or(1);
                                days.set(parsed.clamp(1, 365));
                            },
                        }
                    }
                    span { class: "days-hint", "(length of each period)" }
                }
                div { class: "period-selector",
                    h3 { "Period 1" }
                    StartDatePicker {
                        label: "Start:",
                        value: period1_start(),
                        on_change: move |start| period1_start.set(start),
                    }
                    div { class: "period-info", "End: {period1.end}" }
                }
                div { class: "period-selector",
                    h3 { "Period 2" }
                    StartDatePicker {
                        label: "Start:",
                        value: period2_start(),
                        on_change: move |start| period2_start.set(start),
                    }
                    div { class: "period-info", "End: {period2.end}" }
                }
            }

            div { class: "member-filter",
                h3 { "Member filter (optional)" }
                div { class: "member-checkboxes",
                    for member in all_members() {
                        {
                            let checked = selected_members().contains(&member);
                            let name = member.clone();
                            rsx! {
                                label { key: "{member}", class: "member-checkbox",
                                    input {
                                        r#type: "checkbox",
                                        checked,
                                        onchange: move |_| {
                                            let mut next = selected_members.peek().clone();
                                            if checked {
                                                next.retain(|m| m != &name);
                                            } else {
                                                next.push(name.clone());
                                            }
                                            selected_members.set(next);
                                        },
                                    }
                                    "{member}"
                                }
                            }
                        }
                    }
                }
                if !selected_members().is_empty() {
                    button {
                        class: "clear-members-btn",
                        onclick: move |_| selected_members.set(Vec::new()),
                        "Clear selection"
                    }
                }
            }

            div { class: "comparison-results",
                div { class: "org-comparison",
                    h2 { "Organization totals" }
                    if let Some(page) = data() {
                        OrgComparisonTable { data: page.clone() }
                        if !selected_members().is_empty() {
                            div { class: "member-comparison",
                                h2 { "Per-member comparison" }
                                div { class: "member-comparison-grid",
                                    for comparison in page.members.clone() {
                                        MemberComparisonCard {
                                            key: "{comparison.member}",
                                            comparison,
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        p { "No data" }
                    }
                }
            }
        }
    }
}

#[component]
fn DiffCell(value: i64, percent: f64) -> Element {
    let class = if value >= 0 { "diff-positive" } else { "diff-negative" };
    rsx! {
        span { class: "{class}", {format_diff(value, percent)} }
    }
}

#[component]
fn OrgComparisonTable(data: ComparisonData) -> Element {
    let rows = [
        (
            "Commits",
            data.org.period1.activity.commits,
            data.org.period2.activity.commits,
            data.org.diff.commits,
            data.org.diff_percent.commits,
        ),
        (
            "Pull Requests",
            data.org.period1.activity.prs,
            data.org.period2.activity.prs,
            data.org.diff.prs,
            data.org.diff_percent.prs,
        ),
        (
            "Additions",
            data.org.period1.activity.additions,
            data.org.period2.activity.additions,
            data.org.diff.additions,
            data.org.diff_percent.additions,
        ),
        (
            "Deletions",
            data.org.period1.activity.deletions,
            data.org.period2.activity.deletions,
            data.org.diff.deletions,
            data.org.diff_percent.deletions,
        ),
        (
            "Deploys",
            data.org.period1.activity.deploys,
            data.org.period2.activity.deploys,
            data.org.diff.deploys,
            data.org.diff_percent.deploys,
        ),
    ];

    rsx! {
        div { class: "comparison-table",
            table {
                thead {
                    tr {
                        th { "Metric" }
                        th { "Period 1" }
                        th { "Period 2" }
                        th { "Change" }
                    }
                }
                tbody {
                    for (label, p1, p2, diff, percent) in rows {
                        tr { key: "{label}",
                            td { "{label}" }
                            td { {format_count(p1)} }
                            td { {format_count(p2)} }
                            td { DiffCell { value: diff, percent } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberComparisonCard(comparison: MemberComparison) -> Element {
    let rows = [
        (
            "Commits",
            comparison.period1.commits,
            comparison.period2.commits,
            comparison.diff.commits,
            comparison.diff_percent.commits,
        ),
        (
            "Pull Requests",
            comparison.period1.prs,
            comparison.period2.prs,
            comparison.diff.prs,
            comparison.diff_percent.prs,
        ),
        (
            "Additions",
            comparison.period1.additions,
            comparison.period2.additions,
            comparison.diff.additions,
            comparison.diff_percent.additions,
        ),
        (
            "Deletions",
            comparison.period1.deletions,
            comparison.period2.deletions,
            comparison.diff.deletions,
            comparison.diff_percent.deletions,
        ),
        (
            "Deploys",
            comparison.period1.deploys,
            comparison.period2.deploys,
            comparison.diff.deploys,
            comparison.diff_percent.deploys,
        ),
    ];

    rsx! {
        div { class: "member-comparison-card",
            h3 { "{comparison.member}" }
            div { class: "member-metrics",
                for (label, p1, p2, diff, percent) in rows {
                    div { key: "{label}", class: "metric-row",
                        span { class: "metric-label", "{label}" }
                        span { class: "metric-value", {format_count(p1)} }
                        span { class: "metric-arrow", "→" }
                        span { class: "metric-value", {format_count(p2)} }
                        span { class: "metric-diff", DiffCell { value: diff, percent } }
                    }
                }
            }
        }
    }
}
