//! HTTP client for the activity backend.
//!
//! One method per endpoint. Every method resolves to the raw JSON body as a
//! `serde_json::Value`; decoding into typed data happens in gitpulse-core so
//! the casing tolerance lives in one place.

use gloo_net::http::Request;
use serde_json::Value;
use tracing::debug;

use gitpulse_core::{endpoints, Error, QueryParams, RankingType, Result};

/// Thin wrapper over browser `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiClient;

impl ApiClient {
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "api request");
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        if !response.ok() {
            return Err(Error::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn org_metrics(&self, org: &str, params: &QueryParams) -> Result<Value> {
        self.get_json(&endpoints::org_metrics(org, params)).await
    }

    pub async fn org_timeseries(&self, org: &str, params: &QueryParams) -> Result<Value> {
        self.get_json(&endpoints::org_timeseries(org, params)).await
    }

    pub async fn detailed_timeseries(&self, org: &str, params: &QueryParams) -> Result<Value> {
        self.get_json(&endpoints::detailed_timeseries(org, params))
            .await
    }

    pub async fn member_ranking(
        &self,
        org: &str,
        ty: RankingType,
        params: &QueryParams,
    ) -> Result<Value> {
        self.get_json(&endpoints::member_ranking(org, ty, params))
            .await
    }

    pub async fn repo_ranking(
        &self,
        org: &str,
        ty: RankingType,
        params: &QueryParams,
    ) -> Result<Value> {
        self.get_json(&endpoints::repo_ranking(org, ty, params))
            .await
    }

    pub async fn repo_metrics(&self, org: &str, repo: &str, params: &QueryParams) -> Result<Value> {
        self.get_json(&endpoints::repo_metrics(org, repo, params))
            .await
    }

    pub async fn repo_timeseries(
        &self,
        org: &str,
        repo: &str,
        params: &QueryParams,
    ) -> Result<Value> {
        self.get_json(&endpoints::repo_timeseries(org, repo, params))
            .await
    }

    pub async fn repo_member_metrics(
        &self,
        org: &str,
        repo: &str,
        params: &QueryParams,
    ) -> Result<Value> {
        self.get_json(&endpoints::repo_member_metrics(org, repo, params))
            .await
    }
}
