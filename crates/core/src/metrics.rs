//! Data model for organization activity metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five activity counters every backend payload reports.
///
/// Counters are non-negative in the API contract; missing fields decode to
/// zero rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub commits: u64,
    pub prs: u64,
    pub additions: u64,
    pub deletions: u64,
    pub deploys: u64,
}

impl Counters {
    /// Add another set of counters into this one.
    pub fn merge(&mut self, other: &Counters) {
        self.commits += other.commits;
        self.prs += other.prs;
        self.additions += other.additions;
        self.deletions += other.deletions;
        self.deploys += other.deploys;
    }

    /// The value a ranking of the given type orders by.
    pub fn ranking_value(&self, ty: RankingType) -> u64 {
        match ty {
            RankingType::Commits => self.commits,
            RankingType::Prs => self.prs,
            RankingType::CodeChanges => self.additions + self.deletions,
            RankingType::Deploys => self.deploys,
        }
    }
}

/// Organization-wide snapshot scoped to one date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgMetrics {
    pub org: String,
    pub total_repos: u64,
    pub total_members: u64,
    pub activity: Counters,
}

/// One calendar bucket of a time-series, keyed by a `YYYY-MM-DD` date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesPoint {
    pub date: String,
    pub activity: Counters,
}

/// A ranked member or repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingItem {
    pub rank: u64,
    pub name: String,
    pub value: u64,
    pub activity: Counters,
}

/// Whether a ranking payload names members or repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingKind {
    Member,
    Repo,
}

/// Metric a ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingType {
    Commits,
    Prs,
    CodeChanges,
    Deploys,
}

impl RankingType {
    pub const ALL: [RankingType; 4] = [
        RankingType::Commits,
        RankingType::Prs,
        RankingType::CodeChanges,
        RankingType::Deploys,
    ];

    /// Wire value used in ranking endpoint paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingType::Commits => "commits",
            RankingType::Prs => "prs",
            RankingType::CodeChanges => "code-changes",
            RankingType::Deploys => "deploys",
        }
    }

    /// Human-readable label for select controls and headings.
    pub fn label(&self) -> &'static str {
        match self {
            RankingType::Commits => "Commits",
            RankingType::Prs => "Pull Requests",
            RankingType::CodeChanges => "Code Changes",
            RankingType::Deploys => "Deploys",
        }
    }

    pub fn parse(s: &str) -> Option<RankingType> {
        Self::ALL.iter().copied().find(|ty| ty.as_str() == s)
    }
}

impl fmt::Display for RankingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket size of a time-series request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_counters() {
        let mut a = Counters {
            commits: 2,
            prs: 1,
            additions: 10,
            deletions: 5,
            deploys: 0,
        };
        let b = Counters {
            commits: 3,
            prs: 0,
            additions: 1,
            deletions: 1,
            deploys: 2,
        };
        a.merge(&b);
        assert_eq!(a.commits, 5);
        assert_eq!(a.prs, 1);
        assert_eq!(a.additions, 11);
        assert_eq!(a.deletions, 6);
        assert_eq!(a.deploys, 2);
    }

    #[test]
    fn test_ranking_value_code_changes() {
        let c = Counters {
            commits: 7,
            prs: 2,
            additions: 100,
            deletions: 40,
            deploys: 1,
        };
        assert_eq!(c.ranking_value(RankingType::Commits), 7);
        assert_eq!(c.ranking_value(RankingType::Prs), 2);
        assert_eq!(c.ranking_value(RankingType::CodeChanges), 140);
        assert_eq!(c.ranking_value(RankingType::Deploys), 1);
    }

    #[test]
    fn test_ranking_type_roundtrip() {
        for ty in RankingType::ALL {
            assert_eq!(RankingType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(RankingType::parse("lines"), None);
    }
}
