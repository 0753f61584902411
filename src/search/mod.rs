//! 搜索服务 - 为Agent工具提供统一的网页搜索与数据集搜索能力

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

mod http;

pub use http::HttpSearchClient;

/// 工具调用失败时嵌入结果文本的前缀
pub const SEARCH_ERROR_PREFIX: &str = "Error performing search";

/// 搜索后端 - 每个方法对应一次独立的外部调用
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// 通用网页搜索
    async fn web_search(&self, query: &str) -> Result<Value>;

    /// Kaggle数据集搜索
    async fn kaggle_datasets(&self, query: &str) -> Result<Value>;

    /// HuggingFace数据集搜索
    async fn huggingface_datasets(&self, query: &str) -> Result<Value>;
}

/// 搜索提供者
///
/// 所有操作都返回文本：成功时为格式化后的JSON，失败时为内联的错误描述，
/// 从而保证单个工具失败不会中断整个流程。
#[derive(Clone)]
pub struct SearchProvider {
    client: Arc<dyn SearchClient>,
}

impl SearchProvider {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self { client }
    }

    /// 网页搜索
    pub async fn search(&self, query: &str) -> String {
        render("web", query, self.client.web_search(query).await)
    }

    /// 在Kaggle上搜索数据集
    pub async fn search_kaggle(&self, query: &str) -> String {
        render("kaggle", query, self.client.kaggle_datasets(query).await)
    }

    /// 在HuggingFace上搜索数据集
    pub async fn search_huggingface(&self, query: &str) -> String {
        render(
            "huggingface",
            query,
            self.client.huggingface_datasets(query).await,
        )
    }
}

fn render(source: &str, query: &str, result: Result<Value>) -> String {
    let rendered = result.and_then(|value| Ok(serde_json::to_string_pretty(&value)?));
    match rendered {
        Ok(text) => {
            tracing::debug!(source, query, bytes = text.len(), "search completed");
            text
        }
        Err(err) => {
            tracing::warn!(source, query, error = %err, "search failed, embedding error text");
            format!("{}: {:#}", SEARCH_ERROR_PREFIX, err)
        }
    }
}
