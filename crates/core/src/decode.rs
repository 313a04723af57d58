//! Casing-tolerant decoding of backend payloads.
//!
//! The backend emits fields in several casings (`Commits`/`commits`,
//! `TotalRepos`/`total_repos`, ...), and some endpoints wrap their body in a
//! `{ "data": ... }` envelope. Each response type gets exactly one decode
//! function with a fixed field-priority list; nothing outside this module
//! touches the raw casing. Missing numeric fields decode to zero, missing
//! sequences to empty, never to an error.

use serde_json::Value;

use crate::dates::normalize_timestamp;
use crate::metrics::{Counters, OrgMetrics, RankingItem, RankingKind, TimeseriesPoint};

const COMMITS: &[&str] = &["Commits", "commits"];
const PRS: &[&str] = &["PRs", "Prs", "prs"];
const ADDITIONS: &[&str] = &["Additions", "additions"];
const DELETIONS: &[&str] = &["Deletions", "deletions"];
const DEPLOYS: &[&str] = &["Deploys", "deploys"];
const TOTAL_REPOS: &[&str] = &["TotalRepos", "Total_Repos", "total_repos"];
const TOTAL_MEMBERS: &[&str] = &["TotalMembers", "Total_Members", "total_members"];
const ORG: &[&str] = &["Org", "org"];
const RANK: &[&str] = &["Rank", "rank"];
const VALUE: &[&str] = &["Value", "value"];
const MEMBER: &[&str] = &["Member", "member", "name"];
const REPO: &[&str] = &["Repo", "repo", "name"];
const TIMESTAMP: &[&str] = &["timestamp", "Timestamp", "Date", "date", "period", "Period"];
const DATA_POINTS: &[&str] = &["DataPoints", "dataPoints"];
/// Metadata keys skipped when a time-series arrives as a date-keyed object.
const TS_META_KEYS: &[&str] = &[
    "Type",
    "Granularity",
    "DataPoints",
    "type",
    "granularity",
    "dataPoints",
];

/// Unwrap the `{ "data": ... }` envelope some endpoints use.
pub fn payload(body: &Value) -> &Value {
    body.get("data").unwrap_or(body)
}

/// First present field wins, regardless of its value.
fn field_u64(obj: &Value, names: &[&str]) -> u64 {
    for name in names {
        if let Some(v) = obj.get(name) {
            if let Some(n) = v.as_u64() {
                return n;
            }
            if let Some(f) = v.as_f64() {
                return f.max(0.0) as u64;
            }
        }
    }
    0
}

fn field_str<'a>(obj: &'a Value, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|n| obj.get(*n).and_then(Value::as_str))
}

/// The five activity counters, from any of the known casings.
pub fn counters(obj: &Value) -> Counters {
    Counters {
        commits: field_u64(obj, COMMITS),
        prs: field_u64(obj, PRS),
        additions: field_u64(obj, ADDITIONS),
        deletions: field_u64(obj, DELETIONS),
        deploys: field_u64(obj, DEPLOYS),
    }
}

/// Decode an org (or single-repo) metrics payload. `fallback_org` fills in
/// when the body carries no organization name.
pub fn org_metrics(body: &Value, fallback_org: &str) -> OrgMetrics {
    let obj = payload(body);
    OrgMetrics {
        org: field_str(obj, ORG).unwrap_or(fallback_org).to_string(),
        total_repos: field_u64(obj, TOTAL_REPOS),
        total_members: field_u64(obj, TOTAL_MEMBERS),
        activity: counters(obj),
    }
}

/// Decode a ranking payload. Items without a subject name are dropped.
pub fn ranking_items(body: &Value, kind: RankingKind) -> Vec<RankingItem> {
    let names: &[&str] = match kind {
        RankingKind::Member => MEMBER,
        RankingKind::Repo => REPO,
    };
    let Some(items) = payload(body).as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let name = field_str(item, names)?;
            if name.is_empty() {
                return None;
            }
            Some(RankingItem {
                rank: field_u64(item, RANK),
                name: name.to_string(),
                value: field_u64(item, VALUE),
                activity: counters(item),
            })
        })
        .collect()
}

/// Subject names of a ranking payload, deduplicated in provider order.
pub fn name_list(body: &Value, kind: RankingKind) -> Vec<String> {
    let mut seen = Vec::new();
    for item in ranking_items(body, kind) {
        if !seen.contains(&item.name) {
            seen.push(item.name);
        }
    }
    seen
}

/// Decode a time-series payload in any of the shapes the backend produces:
/// a bare array of points, an object with a `DataPoints`/`dataPoints` list,
/// or an object keyed by date. Missing or empty payloads decode to an empty
/// vec. Points whose normalized date is empty are dropped.
pub fn timeseries(body: &Value) -> Vec<TimeseriesPoint> {
    let data = payload(body);
    if let Some(items) = data.as_array() {
        return items.iter().filter_map(point_from_value).collect();
    }
    let Some(obj) = data.as_object() else {
        return Vec::new();
    };
    for key in DATA_POINTS {
        if let Some(items) = obj.get(*key).and_then(Value::as_array) {
            return items.iter().filter_map(point_from_value).collect();
        }
    }
    // Date-keyed object: { "2024-01-01": { "Commits": 2, ... }, ... }
    obj.iter()
        .filter(|(key, _)| !TS_META_KEYS.contains(&key.as_str()))
        .filter_map(|(key, value)| {
            let date = normalize_timestamp(key);
            if date.is_empty() {
                return None;
            }
            Some(TimeseriesPoint {
                date,
                activity: counters(value),
            })
        })
        .collect()
}

fn point_from_value(item: &Value) -> Option<TimeseriesPoint> {
    let raw = field_str(item, TIMESTAMP)?;
    let date = normalize_timestamp(raw);
    if date.is_empty() {
        return None;
    }
    Some(TimeseriesPoint {
        date,
        activity: counters(item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_counters_casing_priority() {
        assert_eq!(counters(&json!({ "Commits": 5 })).commits, 5);
        assert_eq!(counters(&json!({ "commits": 5 })).commits, 5);
        // First present field wins, even when it is zero.
        assert_eq!(counters(&json!({ "Commits": 0, "commits": 9 })).commits, 0);
        assert_eq!(counters(&json!({})).commits, 0);

        assert_eq!(counters(&json!({ "Prs": 3 })).prs, 3);
        assert_eq!(counters(&json!({ "PRs": 4, "prs": 1 })).prs, 4);
    }

    #[test]
    fn test_org_metrics_envelope_and_fallback() {
        let body = json!({
            "data": {
                "Org": "acme",
                "TotalRepos": 12,
                "total_members": 34,
                "Commits": 100,
                "prs": 7
            }
        });
        let m = org_metrics(&body, "fallback");
        assert_eq!(m.org, "acme");
        assert_eq!(m.total_repos, 12);
        assert_eq!(m.total_members, 34);
        assert_eq!(m.activity.commits, 100);
        assert_eq!(m.activity.prs, 7);
        assert_eq!(m.activity.deploys, 0);

        let bare = org_metrics(&json!({ "commits": 1 }), "fallback");
        assert_eq!(bare.org, "fallback");
        assert_eq!(bare.activity.commits, 1);
    }

    #[test]
    fn test_ranking_items_member_and_repo() {
        let body = json!([
            { "Rank": 1, "Member": "alice", "Value": 20, "Commits": 20 },
            { "rank": 2, "member": "bob", "value": 10, "commits": 10 },
            { "Value": 5 }
        ]);
        let members = ranking_items(&body, RankingKind::Member);
        assert_eq!(members.len(), 2); // nameless item dropped
        assert_eq!(members[0].name, "alice");
        assert_eq!(members[0].value, 20);
        assert_eq!(members[1].rank, 2);

        let body = json!({ "data": [{ "Repo": "web", "Value": 3 }] });
        let repos = ranking_items(&body, RankingKind::Repo);
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "web");
    }

    #[test]
    fn test_name_list_dedups_in_order() {
        let body = json!([
            { "Repo": "web" },
            { "repo": "api" },
            { "Repo": "web" }
        ]);
        assert_eq!(name_list(&body, RankingKind::Repo), vec!["web", "api"]);
    }

    #[test]
    fn test_timeseries_bare_array() {
        let body = json!([
            { "timestamp": "2024-03-05T10:00:00Z", "Commits": 2, "PRs": 1 },
            { "date": "2024-03-06", "commits": 3 },
            { "Commits": 9 }
        ]);
        let ts = timeseries(&body);
        assert_eq!(ts.len(), 2); // point without a timestamp dropped
        assert_eq!(ts[0].date, "2024-03-05");
        assert_eq!(ts[0].activity.commits, 2);
        assert_eq!(ts[1].date, "2024-03-06");
    }

    #[test]
    fn test_timeseries_data_points_object() {
        let body = json!({
            "data": {
                "Granularity": "day",
                "DataPoints": [
                    { "Timestamp": "2024-01-01 00:00:00", "Deploys": 1 }
                ]
            }
        });
        let ts = timeseries(&body);
        assert_eq!(ts.len(), 1);
        assert_eq!(ts[0].date, "2024-01-01");
        assert_eq!(ts[0].activity.deploys, 1);

        let camel = json!({ "dataPoints": [{ "period": "2024-01-02", "prs": 4 }] });
        let ts = timeseries(&camel);
        assert_eq!(ts[0].date, "2024-01-02");
        assert_eq!(ts[0].activity.prs, 4);
    }

    #[test]
    fn test_timeseries_date_keyed_object() {
        let body = json!({
            "Type": "detailed",
            "granularity": "day",
            "2024-02-01": { "Commits": 1 },
            "2024-02-02": { "commits": 2 }
        });
        let mut ts = timeseries(&body);
        ts.sort_by(|a, b| a.date.cmp(&b.date));
        assert_eq!(ts.len(), 2);
        assert_eq!(ts[0].date, "2024-02-01");
        assert_eq!(ts[1].activity.commits, 2);
    }

    #[test]
    fn test_timeseries_empty_or_missing() {
        assert!(timeseries(&json!(null)).is_empty());
        assert!(timeseries(&json!({})).is_empty());
        assert!(timeseries(&json!({ "data": [] })).is_empty());
        assert!(timeseries(&json!({ "data": {} })).is_empty());
    }
}
