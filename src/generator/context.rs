use std::sync::Arc;

use anyhow::Result;

use crate::{
    config::Config,
    llm::client::{CompletionBackend, LLMClient},
    search::{HttpSearchClient, SearchProvider},
};

/// 单次提案生成所需的共享资源，整个运行期间只读
#[derive(Clone)]
pub struct GeneratorContext {
    /// LLM调用器，四个Agent共用
    pub llm_client: Arc<dyn CompletionBackend>,
    /// 配置
    pub config: Config,
}

impl GeneratorContext {
    /// 基于配置创建搜索服务与LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let search = SearchProvider::new(Arc::new(HttpSearchClient::new(&config.search)?));
        let llm_client = LLMClient::new(config.clone(), search)?;

        Ok(Self::with_backend(config, Arc::new(llm_client)))
    }

    /// 使用指定的模型后端
    pub fn with_backend(config: Config, llm_client: Arc<dyn CompletionBackend>) -> Self {
        Self { llm_client, config }
    }
}
