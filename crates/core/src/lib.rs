//! gitpulse-core - Shared domain logic for the GitPulse dashboard
//!
//! This crate contains WASM-compatible code shared by the web dashboard and
//! its tests: decoding the backend's loosely-cased JSON payloads, calendar
//! math, repository-filtered aggregation, period comparison, and the pure
//! assembly of page data from raw responses.

pub mod aggregate;
pub mod compare;
pub mod dates;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod view;

pub use compare::{CountersDiff, CountersPercent, MemberComparison, OrgComparison};
pub use dates::PeriodPreset;
pub use endpoints::QueryParams;
pub use error::{Error, Result};
pub use metrics::{
    Counters, Granularity, OrgMetrics, RankingItem, RankingKind, RankingType, TimeseriesPoint,
};
pub use view::{
    ComparisonData, ComparisonQuery, DashboardData, DashboardQuery, DateWindow, MEMBER_LIST_LIMIT,
    RANKING_LIMIT,
};
