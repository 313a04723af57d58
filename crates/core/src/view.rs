//! Immutable page queries and pure assembly of fetched payloads.
//!
//! Each page builds one query object describing everything a refresh depends
//! on; the dashboard's fetch layer gathers the raw responses and the
//! `assemble_*` functions here turn them into render-ready data. Keeping the
//! reshaping pure means the whole refresh cycle is testable without a UI
//! harness or a network.

use chrono::NaiveDate;
use serde_json::Value;

use crate::aggregate::{aggregate_member_rankings, merge_timeseries, sum_counters};
use crate::compare::{build_member_comparisons, MemberComparison, OrgComparison};
use crate::dates::{end_of_window, format_day};
use crate::decode;
use crate::metrics::{
    Granularity, OrgMetrics, RankingItem, RankingKind, RankingType, TimeseriesPoint,
};

/// Rows shown in each ranking table.
pub const RANKING_LIMIT: usize = 10;

/// Limit that is effectively unbounded, used when a full member or
/// repository list is needed.
pub const MEMBER_LIST_LIMIT: u32 = 1000;

/// Everything one dashboard refresh depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardQuery {
    pub org: String,
    pub start: String,
    pub end: String,
    pub ranking: RankingType,
    pub granularity: Granularity,
    pub repos: Vec<String>,
}

impl DashboardQuery {
    pub fn is_filtered(&self) -> bool {
        !self.repos.is_empty()
    }
}

/// Render-ready dashboard state for one refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub metrics: OrgMetrics,
    pub timeseries: Vec<TimeseriesPoint>,
    pub member_ranking: Vec<RankingItem>,
    pub repo_ranking: Vec<RankingItem>,
}

/// Assemble the unfiltered dashboard from org-scoped payloads.
pub fn assemble_org_dashboard(
    query: &DashboardQuery,
    org_snapshot: &Value,
    timeseries: &Value,
    member_ranking: &Value,
    repo_ranking: &Value,
) -> DashboardData {
    DashboardData {
        metrics: decode::org_metrics(org_snapshot, &query.org),
        timeseries: decode::timeseries(timeseries),
        member_ranking: decode::ranking_items(member_ranking, RankingKind::Member),
        repo_ranking: decode::ranking_items(repo_ranking, RankingKind::Repo),
    }
}

/// Assemble the repo-filtered dashboard: counters summed across the selected
/// repositories, day series merged by date, member ranking recomputed
/// locally. The repo ranking still comes from the ranking endpoint, and the
/// two organization totals still come from the unfiltered snapshot, so those
/// figures stay org-wide regardless of filter state.
pub fn assemble_filtered_dashboard(
    query: &DashboardQuery,
    org_snapshot: &Value,
    repo_metrics: &[Value],
    repo_timeseries: &[Value],
    repo_members: &[Value],
    repo_ranking: &Value,
) -> DashboardData {
    let snapshot = decode::org_metrics(org_snapshot, &query.org);
    let per_repo: Vec<OrgMetrics> = repo_metrics
        .iter()
        .map(|body| decode::org_metrics(body, &query.org))
        .collect();
    let activity = sum_counters(per_repo.iter().map(|m| &m.activity));

    let series: Vec<Vec<TimeseriesPoint>> =
        repo_timeseries.iter().map(decode::timeseries).collect();
    let members: Vec<Vec<RankingItem>> = repo_members
        .iter()
        .map(|body| decode::ranking_items(body, RankingKind::Member))
        .collect();

    DashboardData {
        metrics: OrgMetrics {
            org: snapshot.org,
            total_repos: snapshot.total_repos,
            total_members: snapshot.total_members,
            activity,
        },
        timeseries: merge_timeseries(&series),
        member_ranking: aggregate_member_rankings(&members, query.ranking, RANKING_LIMIT),
        repo_ranking: decode::ranking_items(repo_ranking, RankingKind::Repo),
    }
}

/// An inclusive start/end day pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DateWindow {
    pub start: String,
    pub end: String,
}

impl DateWindow {
    /// Window starting at `start` and spanning `days` days inclusive.
    pub fn from_days(start: NaiveDate, days: u32) -> Self {
        DateWindow {
            start: format_day(start),
            end: format_day(end_of_window(start, days)),
        }
    }
}

/// Everything one comparison refresh depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonQuery {
    pub org: String,
    pub period1: DateWindow,
    pub period2: DateWindow,
    pub members: Vec<String>,
}

impl ComparisonQuery {
    /// Union span of both windows, used to populate the member list.
    pub fn union_window(&self) -> DateWindow {
        let start = if self.period1.start <= self.period2.start {
            &self.period1.start
        } else {
            &self.period2.start
        };
        let end = if self.period1.end >= self.period2.end {
            &self.period1.end
        } else {
            &self.period2.end
        };
        DateWindow {
            start: start.clone(),
            end: end.clone(),
        }
    }
}

/// Render-ready comparison state for one refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonData {
    pub org: OrgComparison,
    pub members: Vec<MemberComparison>,
}

/// Assemble the comparison page. Member rankings are only consulted when at
/// least one member is selected.
pub fn assemble_comparison(
    query: &ComparisonQuery,
    metrics1: &Value,
    metrics2: &Value,
    member_rankings: Option<(&Value, &Value)>,
) -> ComparisonData {
    let period1 = decode::org_metrics(metrics1, &query.org);
    let period2 = decode::org_metrics(metrics2, &query.org);
    let members = match member_rankings {
        Some((rank1, rank2)) if !query.members.is_empty() => {
            let items1 = decode::ranking_items(rank1, RankingKind::Member);
            let items2 = decode::ranking_items(rank2, RankingKind::Member);
            build_member_comparisons(&query.members, &items1, &items2)
        }
        _ => Vec::new(),
    };
    ComparisonData {
        org: OrgComparison::new(period1, period2),
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(repos: &[&str]) -> DashboardQuery {
        DashboardQuery {
            org: "acme".to_string(),
            start: "2024-01-01".to_string(),
            end: "2024-01-31".to_string(),
            ranking: RankingType::Commits,
            granularity: Granularity::Day,
            repos: repos.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_assemble_org_dashboard() {
        let data = assemble_org_dashboard(
            &query(&[]),
            &json!({ "data": { "TotalRepos": 4, "TotalMembers": 9, "Commits": 50 } }),
            &json!({ "data": { "DataPoints": [
                { "timestamp": "2024-01-02T00:00:00Z", "Commits": 5 }
            ] } }),
            &json!([{ "Rank": 1, "Member": "alice", "Value": 30, "Commits": 30 }]),
            &json!([{ "Rank": 1, "Repo": "web", "Value": 40, "Commits": 40 }]),
        );
        assert_eq!(data.metrics.total_repos, 4);
        assert_eq!(data.metrics.activity.commits, 50);
        assert_eq!(data.timeseries.len(), 1);
        assert_eq!(data.timeseries[0].date, "2024-01-02");
        assert_eq!(data.member_ranking[0].name, "alice");
        assert_eq!(data.repo_ranking[0].name, "web");
    }

    #[test]
    fn test_assemble_filtered_dashboard() {
        let data = assemble_filtered_dashboard(
            &query(&["web", "api"]),
            &json!({ "TotalRepos": 40, "TotalMembers": 90, "Commits": 999 }),
            &[
                json!({ "data": { "Commits": 2, "PRs": 1 } }),
                json!({ "Commits": 3, "Deploys": 4 }),
            ],
            &[
                json!([{ "date": "2024-01-01", "commits": 2 }]),
                json!([{ "date": "2024-01-01", "commits": 3 }]),
            ],
            &[
                json!([{ "Member": "a", "Commits": 10 }]),
                json!([{ "Member": "b", "Commits": 20 }, { "Member": "a", "Commits": 5 }]),
            ],
            &json!([{ "Rank": 1, "Repo": "web", "Value": 5 }]),
        );

        // Counters summed across selected repos; totals stay org-wide.
        assert_eq!(data.metrics.activity.commits, 5);
        assert_eq!(data.metrics.activity.prs, 1);
        assert_eq!(data.metrics.activity.deploys, 4);
        assert_eq!(data.metrics.total_repos, 40);
        assert_eq!(data.metrics.total_members, 90);

        // Same-day buckets merged.
        assert_eq!(data.timeseries.len(), 1);
        assert_eq!(data.timeseries[0].activity.commits, 5);

        // Member ranking recomputed locally; repo ranking passed through.
        assert_eq!(data.member_ranking[0].name, "a");
        assert_eq!(data.member_ranking[0].value, 15);
        assert_eq!(data.member_ranking[0].rank, 1);
        assert_eq!(data.member_ranking[1].name, "b");
        assert_eq!(data.repo_ranking[0].name, "web");
    }

    #[test]
    fn test_union_window() {
        let q = ComparisonQuery {
            org: "acme".to_string(),
            period1: DateWindow {
                start: "2024-02-01".to_string(),
                end: "2024-03-01".to_string(),
            },
            period2: DateWindow {
                start: "2024-01-15".to_string(),
                end: "2024-02-14".to_string(),
            },
            members: Vec::new(),
        };
        let union = q.union_window();
        assert_eq!(union.start, "2024-01-15");
        assert_eq!(union.end, "2024-03-01");
    }

    #[test]
    fn test_date_window_from_days() {
        let w = DateWindow::from_days(crate::dates::parse_day("2024-01-01").unwrap(), 7);
        assert_eq!(w.start, "2024-01-01");
        assert_eq!(w.end, "2024-01-07");
    }

    #[test]
    fn test_assemble_comparison_without_members() {
        let q = ComparisonQuery {
            org: "acme".to_string(),
            period1: DateWindow {
                start: "2024-01-01".to_string(),
                end: "2024-01-30".to_string(),
            },
            period2: DateWindow {
                start: "2024-02-01".to_string(),
                end: "2024-03-01".to_string(),
            },
            members: Vec::new(),
        };
        let data = assemble_comparison(
            &q,
            &json!({ "Commits": 10 }),
            &json!({ "Commits": 15 }),
            None,
        );
        assert_eq!(data.org.diff.commits, 5);
        assert_eq!(data.org.diff_percent.commits, 50.0);
        assert!(data.members.is_empty());
    }

    #[test]
    fn test_assemble_comparison_with_members() {
        let q = ComparisonQuery {
            org: "acme".to_string(),
            period1: DateWindow {
                start: "2024-01-01".to_string(),
                end: "2024-01-30".to_string(),
            },
            period2: DateWindow {
                start: "2024-02-01".to_string(),
                end: "2024-03-01".to_string(),
            },
            members: vec!["alice".to_string()],
        };
        let data = assemble_comparison(
            &q,
            &json!({}),
            &json!({}),
            Some((
                &json!([{ "Member": "alice", "Commits": 0 }]),
                &json!([{ "Member": "alice", "Commits": 5 }]),
            )),
        );
        assert_eq!(data.members.len(), 1);
        assert_eq!(data.members[0].diff.commits, 5);
        assert_eq!(data.members[0].diff_percent.commits, 100.0);
    }
}
