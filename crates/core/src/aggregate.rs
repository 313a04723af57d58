//! Aggregation of per-repository responses into organization-level views.
//!
//! When a repository filter is active there is no org-scoped filtered
//! endpoint; the dashboard fetches per repository and sums here instead.

use std::collections::{BTreeMap, HashMap};

use crate::metrics::{Counters, RankingItem, RankingType, TimeseriesPoint};

/// Sum activity counters across snapshots.
pub fn sum_counters<'a, I>(items: I) -> Counters
where
    I: IntoIterator<Item = &'a Counters>,
{
    let mut total = Counters::default();
    for c in items {
        total.merge(c);
    }
    total
}

/// Merge per-repository series into one, summing counters per normalized
/// date. Output is ascending by date string; points with an empty date are
/// skipped.
pub fn merge_timeseries(series: &[Vec<TimeseriesPoint>]) -> Vec<TimeseriesPoint> {
    let mut buckets: BTreeMap<&str, Counters> = BTreeMap::new();
    for points in series {
        for point in points {
            if point.date.is_empty() {
                continue;
            }
            buckets
                .entry(point.date.as_str())
                .or_default()
                .merge(&point.activity);
        }
    }
    buckets
        .into_iter()
        .map(|(date, activity)| TimeseriesPoint {
            date: date.to_string(),
            activity,
        })
        .collect()
}

/// Sum each member's counters across repositories, then rank by the selected
/// metric. Sorting is stable, so ties keep first-seen provider order. The
/// top `limit` members get ranks 1..N.
pub fn aggregate_member_rankings(
    per_repo: &[Vec<RankingItem>],
    ty: RankingType,
    limit: usize,
) -> Vec<RankingItem> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Counters> = HashMap::new();
    for items in per_repo {
        for item in items {
            if item.name.is_empty() {
                continue;
            }
            totals
                .entry(item.name.clone())
                .or_insert_with(|| {
                    order.push(item.name.clone());
                    Counters::default()
                })
                .merge(&item.activity);
        }
    }

    let mut members: Vec<RankingItem> = order
        .into_iter()
        .map(|name| {
            let activity = totals.remove(&name).unwrap_or_default();
            RankingItem {
                rank: 0,
                name,
                value: activity.ranking_value(ty),
                activity,
            }
        })
        .collect();
    members.sort_by(|a, b| b.value.cmp(&a.value));
    members.truncate(limit);
    for (i, item) in members.iter_mut().enumerate() {
        item.rank = (i + 1) as u64;
    }
    members
}
