//! Fetch orchestration for the two pages.
//!
//! Each page builds one immutable query object; the loaders here issue the
//! constituent requests, await them jointly, and hand the raw payloads to
//! the core assembly functions. A refresh only completes once every call has
//! settled.

use futures::future::join_all;
use serde_json::Value;
use tracing::warn;

use gitpulse_core::view::{
    assemble_comparison, assemble_filtered_dashboard, assemble_org_dashboard,
};
use gitpulse_core::{
    decode, ComparisonData, ComparisonQuery, DashboardData, DashboardQuery, DateWindow,
    QueryParams, RankingKind, RankingType, Result, MEMBER_LIST_LIMIT, RANKING_LIMIT,
};

use crate::api::ApiClient;

/// Per-repository calls tolerate individual failures: a repository that
/// errors is logged and dropped from the aggregate while the rest still
/// render. Top-level calls propagate their error instead.
fn keep_ok(results: Vec<Result<Value>>, what: &'static str) -> Vec<Value> {
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%err, what, "skipping failed per-repository request");
                None
            }
        })
        .collect()
}

pub async fn load_dashboard(client: &ApiClient, query: &DashboardQuery) -> Result<DashboardData> {
    let params = QueryParams::range(&query.start, &query.end);
    // Unfiltered org snapshot: repository and member totals stay org-wide
    // even when a repository filter is active.
    let org_snapshot = client.org_metrics(&query.org, &params).await?;

    let limited = params.clone().with_limit(RANKING_LIMIT as u32);
    if query.is_filtered() {
        // Per-repository metrics and day-granularity series, aggregated
        // locally. Member rankings are recomputed from per-repo member
        // metrics; the repo ranking still comes from its endpoint.
        let day_params = params.clone().with_granularity(query.granularity);
        let metrics = join_all(
            query
                .repos
                .iter()
                .map(|repo| client.repo_metrics(&query.org, repo, &params)),
        );
        let series = join_all(
            query
                .repos
                .iter()
                .map(|repo| client.repo_timeseries(&query.org, repo, &day_params)),
        );
        let members = join_all(
            query
                .repos
                .iter()
                .map(|repo| client.repo_member_metrics(&query.org, repo, &params)),
        );
        let ranking = client.repo_ranking(&query.org, query.ranking, &limited);

        let (metrics, series, members, ranking) = futures::join!(metrics, series, members, ranking);
        Ok(assemble_filtered_dashboard(
            query,
            &org_snapshot,
            &keep_ok(metrics, "repo metrics"),
            &keep_ok(series, "repo timeseries"),
            &keep_ok(members, "repo member metrics"),
            &ranking?,
        ))
    } else {
        let day_params = params.with_granularity(query.granularity);
        let (timeseries, members, repos) = futures::join!(
            client.detailed_timeseries(&query.org, &day_params),
            client.member_ranking(&query.org, query.ranking, &limited),
            client.repo_ranking(&query.org, query.ranking, &limited),
        );
        Ok(assemble_org_dashboard(
            query,
            &org_snapshot,
            &timeseries?,
            &members?,
            &repos?,
        ))
    }
}

/// All repository names, from an effectively unbounded repo ranking.
pub async fn load_repo_list(
    client: &ApiClient,
    org: &str,
    start: &str,
    end: &str,
) -> Result<Vec<String>> {
    let params = QueryParams::range(start, end).with_limit(MEMBER_LIST_LIMIT);
    let body = client
        .repo_ranking(org, RankingType::Commits, &params)
        .await?;
    Ok(decode::name_list(&body, RankingKind::Repo))
}

/// All member names active in the given window.
pub async fn load_member_list(
    client: &ApiClient,
    org: &str,
    window: &DateWindow,
) -> Result<Vec<String>> {
    let params = QueryParams::range(&window.start, &window.end).with_limit(MEMBER_LIST_LIMIT);
    let body = client
        .member_ranking(org, RankingType::Commits, &params)
        .await?;
    Ok(decode::name_list(&body, RankingKind::Member))
}

pub async fn load_comparison(
    client: &ApiClient,
    query: &ComparisonQuery,
) -> Result<ComparisonData> {
    let params1 = QueryParams::range(&query.period1.start, &query.period1.end);
    let params2 = QueryParams::range(&query.period2.start, &query.period2.end);
    let (metrics1, metrics2) = futures::join!(
        client.org_metrics(&query.org, &params1),
        client.org_metrics(&query.org, &params2),
    );
    let (metrics1, metrics2) = (metrics1?, metrics2?);

    if query.members.is_empty() {
        return Ok(assemble_comparison(query, &metrics1, &metrics2, None));
    }

    // Full member rankings for both windows; the limit is effectively
    // unbounded so the name lookup covers every selected member.
    let (rank1, rank2) = futures::join!(
        client.member_ranking(
            &query.org,
            RankingType::Commits,
            &params1.with_limit(MEMBER_LIST_LIMIT),
        ),
        client.member_ranking(
            &query.org,
            RankingType::Commits,
            &params2.with_limit(MEMBER_LIST_LIMIT),
        ),
    );
    let (rank1, rank2) = (rank1?, rank2?);
    Ok(assemble_comparison(
        query,
        &metrics1,
        &metrics2,
        Some((&rank1, &rank2)),
    ))
}
