//! LLM Provider支持模块

use anyhow::Result;
use rig::{
    agent::{Agent, AgentBuilder},
    client::CompletionClient,
    completion::{CompletionModel, Prompt, PromptError},
};

use crate::{
    config::{LLMConfig, LLMProvider},
    llm::tools::{ToolKind, search::AgentToolSearch},
    search::SearchProvider,
};

/// 统一的Provider客户端枚举
#[derive(Clone)]
pub enum ProviderClient {
    OpenAI(rig::providers::openai::Client),
    Anthropic(rig::providers::anthropic::Client),
    DeepSeek(rig::providers::deepseek::Client),
    OpenRouter(rig::providers::openrouter::Client),
    Ollama(rig::providers::ollama::Client),
}

impl ProviderClient {
    /// 根据配置创建相应的provider客户端
    pub fn new(config: &LLMConfig) -> Result<Self> {
        // 未配置base_url时使用各provider自身的默认地址
        let base_url = config.api_base_url.as_deref();
        match config.provider {
            LLMProvider::OpenAI => {
                let mut builder = rig::providers::openai::Client::builder(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::OpenAI(builder.build()))
            }
            LLMProvider::Anthropic => {
                let mut builder = rig::providers::anthropic::ClientBuilder::new(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::Anthropic(builder.build()?))
            }
            LLMProvider::DeepSeek => {
                let mut builder = rig::providers::deepseek::Client::builder(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::DeepSeek(builder.build()))
            }
            LLMProvider::OpenRouter => {
                let mut builder = rig::providers::openrouter::Client::builder(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::OpenRouter(builder.build()))
            }
            LLMProvider::Ollama => {
                let mut builder = rig::providers::ollama::Client::builder();
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::Ollama(builder.build()))
            }
        }
    }

    /// 创建Agent，并挂载指定的工具
    pub fn create_agent(
        &self,
        system_prompt: &str,
        config: &LLMConfig,
        tools: &[ToolKind],
        search: &SearchProvider,
    ) -> ProviderAgent {
        let model = config.model.as_str();
        match self {
            ProviderClient::OpenAI(client) => {
                let builder = client
                    .completion_model(model)
                    .completions_api()
                    .into_agent_builder()
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature);
                ProviderAgent::OpenAI(with_tools(builder, tools, search))
            }
            ProviderClient::Anthropic(client) => {
                let builder = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature);
                ProviderAgent::Anthropic(with_tools(builder, tools, search))
            }
            ProviderClient::DeepSeek(client) => {
                let builder = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature);
                ProviderAgent::DeepSeek(with_tools(builder, tools, search))
            }
            ProviderClient::OpenRouter(client) => {
                let builder = client
                    .agent(model)
                    .preamble(system_prompt)
                    .temperature(config.temperature);
                ProviderAgent::OpenRouter(with_tools(builder, tools, search))
            }
            ProviderClient::Ollama(client) => {
                let builder = client
                    .agent(model)
                    .preamble(system_prompt)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature);
                ProviderAgent::Ollama(with_tools(builder, tools, search))
            }
        }
    }
}

/// 按顺序挂载工具并构建Agent
///
/// 挂载第一个工具后builder变为AgentBuilderSimple，因此无工具时单独构建。
fn with_tools<M>(
    builder: AgentBuilder<M>,
    tools: &[ToolKind],
    search: &SearchProvider,
) -> Agent<M>
where
    M: CompletionModel,
{
    let Some((first, rest)) = tools.split_first() else {
        return builder.build();
    };

    rest.iter()
        .fold(
            builder.tool(AgentToolSearch::new(*first, search.clone())),
            |builder, kind| builder.tool(AgentToolSearch::new(*kind, search.clone())),
        )
        .build()
}

/// 统一的Agent枚举
pub enum ProviderAgent {
    OpenAI(Agent<rig::providers::openai::CompletionModel>),
    Anthropic(Agent<rig::providers::anthropic::completion::CompletionModel>),
    DeepSeek(Agent<rig::providers::deepseek::CompletionModel>),
    OpenRouter(Agent<rig::providers::openrouter::CompletionModel>),
    Ollama(Agent<rig::providers::ollama::CompletionModel<reqwest::Client>>),
}

impl ProviderAgent {
    /// 执行单轮prompt
    pub async fn prompt(&self, prompt: &str) -> Result<String> {
        match self {
            ProviderAgent::OpenAI(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::Anthropic(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::DeepSeek(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::OpenRouter(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::Ollama(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
        }
    }

    /// 执行多轮对话，允许模型在轮次内调用工具
    pub async fn multi_turn(
        &self,
        prompt: &str,
        max_iterations: usize,
    ) -> Result<String, PromptError> {
        match self {
            ProviderAgent::OpenAI(agent) => agent.prompt(prompt).multi_turn(max_iterations).await,
            ProviderAgent::Anthropic(agent) => {
                agent.prompt(prompt).multi_turn(max_iterations).await
            }
            ProviderAgent::DeepSeek(agent) => agent.prompt(prompt).multi_turn(max_iterations).await,
            ProviderAgent::OpenRouter(agent) => {
                agent.prompt(prompt).multi_turn(max_iterations).await
            }
            ProviderAgent::Ollama(agent) => agent.prompt(prompt).multi_turn(max_iterations).await,
        }
    }
}
