//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;

use crate::{config::Config, search::SearchProvider};

mod providers;
mod react;
mod react_executor;
pub mod types;

pub use react::{ReActConfig, ReActResponse};
pub use types::AgentExecuteParams;

use providers::ProviderClient;
use react_executor::ReActExecutor;

/// 语言模型边界：一次Agent调用输入提示词，输出自由文本
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, params: AgentExecuteParams) -> Result<String>;
}

/// LLM客户端 - 基于rig的Provider实现
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
    search: SearchProvider,
}

impl LLMClient {
    /// 创建新的LLM客户端，search为工具调用时使用的搜索服务
    pub fn new(config: Config, search: SearchProvider) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self {
            config,
            client,
            search,
        })
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    async fn retry_with_backoff<T, F, Fut>(&self, log_tag: &str, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let llm_config = &self.config.llm;
        let max_retries = llm_config.retry_attempts.max(1);
        let retry_delay_ms = llm_config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    tracing::warn!(
                        agent = log_tag,
                        attempt = retries,
                        max_retries,
                        error = %err,
                        "model call failed"
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }

    /// 使用ReAct模式进行多轮对话（带工具）
    pub async fn prompt_with_react(
        &self,
        params: &AgentExecuteParams,
        react_config: ReActConfig,
    ) -> Result<ReActResponse> {
        let agent = self.client.create_agent(
            &params.prompt_sys,
            &self.config.llm,
            &params.tools,
            &self.search,
        );

        let response = self
            .retry_with_backoff(&params.log_tag, || async {
                ReActExecutor::execute(&agent, &params.prompt_user, &react_config).await
            })
            .await?;

        if response.stopped_by_max_depth {
            println!(
                "   ⚠️ [{}] 达到最大迭代次数 ({})，使用部分结果",
                params.log_tag, response.iterations_used
            );
        }
        tracing::debug!(
            agent = %params.log_tag,
            tool_calls = response.tool_calls_history.len(),
            stopped_by_max_depth = response.stopped_by_max_depth,
            "ReAct run finished"
        );

        Ok(response)
    }

    /// 简化的单轮对话方法（不使用工具）
    pub async fn prompt_without_react(&self, params: &AgentExecuteParams) -> Result<String> {
        let agent = self
            .client
            .create_agent(&params.prompt_sys, &self.config.llm, &[], &self.search);

        self.retry_with_backoff(&params.log_tag, || async {
            agent.prompt(&params.prompt_user).await
        })
        .await
    }
}

#[async_trait]
impl CompletionBackend for LLMClient {
    async fn complete(&self, params: AgentExecuteParams) -> Result<String> {
        if params.tools.is_empty() {
            return self.prompt_without_react(&params).await;
        }

        let react_config = ReActConfig {
            max_iterations: self.config.llm.max_iterations,
            return_partial_on_max_depth: self.config.pipeline.return_partial_on_max_depth,
        };
        let response = self.prompt_with_react(&params, react_config).await?;
        Ok(response.content)
    }
}
