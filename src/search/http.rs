//! 基于reqwest的搜索后端

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::{Value, json};
use std::time::Duration;

use super::SearchClient;
use crate::config::SearchConfig;

/// HTTP搜索客户端：Tavily网页搜索、Kaggle与HuggingFace数据集搜索
#[derive(Clone)]
pub struct HttpSearchClient {
    http: Client,
    config: SearchConfig,
}

impl HttpSearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let mut builder = Client::builder();
        // 未配置时沿用传输层默认超时
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http = builder
            .build()
            .context("Failed to build search HTTP client")?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    async fn send(&self, source: &str, request: RequestBuilder) -> Result<Value> {
        let response = request
            .send()
            .await
            .with_context(|| format!("{} request failed", source))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("{} returned status {}: {}", source, status, body));
        }

        response
            .json::<Value>()
            .await
            .with_context(|| format!("{} returned an invalid JSON payload", source))
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn web_search(&self, query: &str) -> Result<Value> {
        let url = format!("{}/search", self.config.tavily_base_url.trim_end_matches('/'));
        let request = self
            .http
            .post(url)
            .bearer_auth(&self.config.tavily_api_key)
            .json(&json!({ "query": query }));
        self.send("Tavily", request).await
    }

    async fn kaggle_datasets(&self, query: &str) -> Result<Value> {
        let url = format!(
            "{}/search/datasets",
            self.config.kaggle_base_url.trim_end_matches('/')
        );
        let request = self
            .http
            .get(url)
            .query(&[("search", query)])
            .bearer_auth(&self.config.kaggle_api_token);
        self.send("Kaggle", request).await
    }

    async fn huggingface_datasets(&self, query: &str) -> Result<Value> {
        let url = format!(
            "{}/datasets",
            self.config.huggingface_base_url.trim_end_matches('/')
        );
        let request = self.http.get(url).query(&[("search", query)]);
        self.send("HuggingFace", request).await
    }
}
