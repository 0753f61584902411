//! Agent可用的工具能力

use serde::{Deserialize, Serialize};

use crate::search::SearchProvider;

pub mod search;

/// 工具能力的封闭集合，在构造Agent时选定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    WebSearch,
    KaggleSearch,
    HuggingFaceSearch,
}

impl ToolKind {
    /// 暴露给模型的函数名
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::WebSearch => "web_search",
            ToolKind::KaggleSearch => "kaggle_search",
            ToolKind::HuggingFaceSearch => "huggingface_search",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::WebSearch => "Web Search",
            ToolKind::KaggleSearch => "Kaggle Search",
            ToolKind::HuggingFaceSearch => "HuggingFace Search",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::WebSearch => "Search the web for company, industry and AI/ML trend information",
            ToolKind::KaggleSearch => "Search for datasets on Kaggle",
            ToolKind::HuggingFaceSearch => "Search for models and datasets on HuggingFace",
        }
    }

    /// 执行工具，失败时返回内联错误文本
    pub async fn invoke(&self, provider: &SearchProvider, query: &str) -> String {
        match self {
            ToolKind::WebSearch => provider.search(query).await,
            ToolKind::KaggleSearch => provider.search_kaggle(query).await,
            ToolKind::HuggingFaceSearch => provider.search_huggingface(query).await,
        }
    }
}
