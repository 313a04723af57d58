//! Backend endpoint URLs and query-string construction.

use url::form_urlencoded::Serializer;

use crate::metrics::{Granularity, RankingType};

pub const API_BASE: &str = "/api/v1";

/// Query parameters shared by every endpoint. The `repo` parameter repeats
/// once per selected repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub start: Option<String>,
    pub end: Option<String>,
    pub granularity: Option<Granularity>,
    pub limit: Option<u32>,
    pub repos: Vec<String>,
}

impl QueryParams {
    pub fn range(start: &str, end: &str) -> Self {
        QueryParams {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            ..QueryParams::default()
        }
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_repos(mut self, repos: &[String]) -> Self {
        self.repos = repos.to_vec();
        self
    }

    pub fn query_string(&self) -> String {
        let mut ser = Serializer::new(String::new());
        if let Some(start) = &self.start {
            ser.append_pair("start", start);
        }
        if let Some(end) = &self.end {
            ser.append_pair("end", end);
        }
        if let Some(granularity) = self.granularity {
            ser.append_pair("granularity", granularity.as_str());
        }
        if let Some(limit) = self.limit {
            ser.append_pair("limit", &limit.to_string());
        }
        for repo in &self.repos {
            ser.append_pair("repo", repo);
        }
        ser.finish()
    }
}

fn with_query(path: String, params: &QueryParams) -> String {
    let query = params.query_string();
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

pub fn org_metrics(org: &str, params: &QueryParams) -> String {
    with_query(format!("{API_BASE}/orgs/{org}/metrics"), params)
}

pub fn org_timeseries(org: &str, params: &QueryParams) -> String {
    with_query(format!("{API_BASE}/orgs/{org}/metrics/timeseries"), params)
}

pub fn detailed_timeseries(org: &str, params: &QueryParams) -> String {
    with_query(
        format!("{API_BASE}/orgs/{org}/metrics/timeseries/detailed"),
        params,
    )
}

pub fn member_ranking(org: &str, ty: RankingType, params: &QueryParams) -> String {
    with_query(
        format!("{API_BASE}/orgs/{org}/rankings/members/{ty}"),
        params,
    )
}

pub fn repo_ranking(org: &str, ty: RankingType, params: &QueryParams) -> String {
    with_query(format!("{API_BASE}/orgs/{org}/rankings/repos/{ty}"), params)
}

pub fn repo_metrics(org: &str, repo: &str, params: &QueryParams) -> String {
    with_query(format!("{API_BASE}/orgs/{org}/repos/{repo}/metrics"), params)
}

pub fn repo_timeseries(org: &str, repo: &str, params: &QueryParams) -> String {
    with_query(
        format!("{API_BASE}/orgs/{org}/repos/{repo}/metrics/timeseries"),
        params,
    )
}

pub fn repo_member_metrics(org: &str, repo: &str, params: &QueryParams) -> String {
    with_query(
        format!("{API_BASE}/orgs/{org}/repos/{repo}/members/metrics"),
        params,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_repeats_repo() {
        let params = QueryParams::range("2024-01-01", "2024-01-31")
            .with_repos(&["web".to_string(), "api".to_string()]);
        assert_eq!(
            params.query_string(),
            "start=2024-01-01&end=2024-01-31&repo=web&repo=api"
        );
    }

    #[test]
    fn test_query_string_full_parameter_set() {
        let params = QueryParams::range("2024-01-01", "2024-01-31")
            .with_granularity(Granularity::Day)
            .with_limit(10);
        assert_eq!(
            params.query_string(),
            "start=2024-01-01&end=2024-01-31&granularity=day&limit=10"
        );
    }

    #[test]
    fn test_empty_params_yield_bare_path() {
        assert_eq!(
            org_metrics("acme", &QueryParams::default()),
            "/api/v1/orgs/acme/metrics"
        );
    }

    #[test]
    fn test_endpoint_paths() {
        let params = QueryParams::default();
        assert_eq!(
            member_ranking("acme", RankingType::CodeChanges, &params),
            "/api/v1/orgs/acme/rankings/members/code-changes"
        );
        assert_eq!(
            repo_ranking("acme", RankingType::Commits, &params),
            "/api/v1/orgs/acme/rankings/repos/commits"
        );
        assert_eq!(
            repo_member_metrics("acme", "web", &params),
            "/api/v1/orgs/acme/repos/web/members/metrics"
        );
        assert_eq!(
            detailed_timeseries("acme", &params),
            "/api/v1/orgs/acme/metrics/timeseries/detailed"
        );
        assert_eq!(
            repo_timeseries("acme", "web", &params),
            "/api/v1/orgs/acme/repos/web/metrics/timeseries"
        );
        assert_eq!(
            org_timeseries("acme", &params),
            "/api/v1/orgs/acme/metrics/timeseries"
        );
        assert_eq!(
            repo_metrics("acme", "web", &params),
            "/api/v1/orgs/acme/repos/web/metrics"
        );
    }
}
