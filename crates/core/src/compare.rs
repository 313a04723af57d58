//! Period comparison math.

use std::collections::HashMap;

use crate::metrics::{Counters, OrgMetrics, RankingItem};

/// Arithmetic difference between two periods (period 2 minus period 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountersDiff {
    pub commits: i64,
    pub prs: i64,
    pub additions: i64,
    pub deletions: i64,
    pub deploys: i64,
}

/// Percentage difference relative to period 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CountersPercent {
    pub commits: f64,
    pub prs: f64,
    pub additions: f64,
    pub deletions: f64,
    pub deploys: f64,
}

/// `(p2 - p1) / p1 * 100`. Growth from a zero baseline reads as 100%, and
/// zero-to-zero as 0%, so the division never blows up.
pub fn percent_change(p1: u64, p2: u64) -> f64 {
    if p1 != 0 {
        (p2 as f64 - p1 as f64) / p1 as f64 * 100.0
    } else if p2 > 0 {
        100.0
    } else {
        0.0
    }
}

pub fn diff_counters(p1: &Counters, p2: &Counters) -> CountersDiff {
    CountersDiff {
        commits: p2.commits as i64 - p1.commits as i64,
        prs: p2.prs as i64 - p1.prs as i64,
        additions: p2.additions as i64 - p1.additions as i64,
        deletions: p2.deletions as i64 - p1.deletions as i64,
        deploys: p2.deploys as i64 - p1.deploys as i64,
    }
}

pub fn percent_diff_counters(p1: &Counters, p2: &Counters) -> CountersPercent {
    CountersPercent {
        commits: percent_change(p1.commits, p2.commits),
        prs: percent_change(p1.prs, p2.prs),
        additions: percent_change(p1.additions, p2.additions),
        deletions: percent_change(p1.deletions, p2.deletions),
        deploys: percent_change(p1.deploys, p2.deploys),
    }
}

/// Organization-level head-to-head for the comparison page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrgComparison {
    pub period1: OrgMetrics,
    pub period2: OrgMetrics,
    pub diff: CountersDiff,
    pub diff_percent: CountersPercent,
}

impl OrgComparison {
    pub fn new(period1: OrgMetrics, period2: OrgMetrics) -> Self {
        let diff = diff_counters(&period1.activity, &period2.activity);
        let diff_percent = percent_diff_counters(&period1.activity, &period2.activity);
        OrgComparison {
            period1,
            period2,
            diff,
            diff_percent,
        }
    }
}

/// Head-to-head comparison for one member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberComparison {
    pub member: String,
    pub period1: Counters,
    pub period2: Counters,
    pub diff: CountersDiff,
    pub diff_percent: CountersPercent,
}

fn by_name(items: &[RankingItem]) -> HashMap<&str, Counters> {
    items
        .iter()
        .map(|item| (item.name.as_str(), item.activity))
        .collect()
}

/// Build a comparison per selected member. A member absent from a window
/// counts as all zeros rather than being dropped.
pub fn build_member_comparisons(
    selected: &[String],
    period1: &[RankingItem],
    period2: &[RankingItem],
) -> Vec<MemberComparison> {
    let first = by_name(period1);
    let second = by_name(period2);
    selected
        .iter()
        .map(|member| {
            let p1 = first.get(member.as_str()).copied().unwrap_or_default();
            let p2 = second.get(member.as_str()).copied().unwrap_or_default();
            MemberComparison {
                member: member.clone(),
                period1: p1,
                period2: p2,
                diff: diff_counters(&p1, &p2),
                diff_percent: percent_diff_counters(&p1, &p2),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, commits: u64, prs: u64) -> RankingItem {
        RankingItem {
            rank: 0,
            name: name.to_string(),
            value: commits,
            activity: Counters {
                commits,
                prs,
                ..Counters::default()
            },
        }
    }

    #[test]
    fn test_percent_change_zero_baseline() {
        assert_eq!(percent_change(0, 5), 100.0);
        assert_eq!(percent_change(0, 0), 0.0);
        assert_eq!(percent_change(10, 15), 50.0);
        assert_eq!(percent_change(10, 5), -50.0);
    }

    #[test]
    fn test_diff_counters_can_go_negative() {
        let p1 = Counters {
            commits: 10,
            deploys: 2,
            ..Counters::default()
        };
        let p2 = Counters {
            commits: 4,
            deploys: 3,
            ..Counters::default()
        };
        let diff = diff_counters(&p1, &p2);
        assert_eq!(diff.commits, -6);
        assert_eq!(diff.deploys, 1);
    }

    #[test]
    fn test_member_comparisons_default_missing_windows_to_zero() {
        let selected = vec!["alice".to_string(), "bob".to_string()];
        let period1 = vec![item("alice", 10, 2)];
        let period2 = vec![item("alice", 15, 2), item("bob", 5, 1)];

        let comparisons = build_member_comparisons(&selected, &period1, &period2);
        assert_eq!(comparisons.len(), 2);

        let alice = &comparisons[0];
        assert_eq!(alice.diff.commits, 5);
        assert_eq!(alice.diff_percent.commits, 50.0);
        assert_eq!(alice.diff_percent.prs, 0.0);

        // Bob has no period-1 data; zero baseline reads as +100%.
        let bob = &comparisons[1];
        assert_eq!(bob.period1, Counters::default());
        assert_eq!(bob.diff.commits, 5);
        assert_eq!(bob.diff_percent.commits, 100.0);
    }

    #[test]
    fn test_org_comparison() {
        let p1 = OrgMetrics {
            org: "acme".to_string(),
            activity: Counters {
                commits: 100,
                ..Counters::default()
            },
            ..OrgMetrics::default()
        };
        let p2 = OrgMetrics {
            org: "acme".to_string(),
            activity: Counters {
                commits: 150,
                ..Counters::default()
            },
            ..OrgMetrics::default()
        };
        let cmp = OrgComparison::new(p1, p2);
        assert_eq!(cmp.diff.commits, 50);
        assert_eq!(cmp.diff_percent.commits, 50.0);
    }
}
