use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::i18n::TargetLanguage;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 提案文档输出目录
    pub output_path: PathBuf,

    /// 提案语言
    pub target_language: TargetLanguage,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 搜索服务配置
    pub search: SearchConfig,

    /// 流水线配置
    pub pipeline: PipelineConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址，未设置时使用provider的默认地址
    pub api_base_url: Option<String>,

    /// 所有Agent共用的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 重试次数
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 带工具Agent的最大对话轮次
    pub max_iterations: usize,
}

/// 搜索服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Tavily API KEY
    pub tavily_api_key: String,

    /// Kaggle API TOKEN
    pub kaggle_api_token: String,

    pub tavily_base_url: String,

    pub kaggle_base_url: String,

    pub huggingface_base_url: String,

    /// 请求超时（秒），为空时使用HTTP客户端默认值
    pub timeout_seconds: Option<u64>,
}

/// 流水线配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct PipelineConfig {
    /// 传递给后续阶段的上下文最大字符数
    pub max_context_chars: usize,

    /// 工具调用轮次耗尽时是否返回已有的部分结果
    pub return_partial_on_max_depth: bool,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 返回缺失的凭据名称，为空表示可以启动
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.llm.provider != LLMProvider::Ollama && self.llm.api_key.trim().is_empty() {
            missing.push("llm.api_key");
        }
        if self.search.tavily_api_key.trim().is_empty() {
            missing.push("search.tavily_api_key");
        }
        if self.search.kaggle_api_token.trim().is_empty() {
            missing.push("search.kaggle_api_token");
        }
        missing
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("."),
            target_language: TargetLanguage::default(),
            llm: LLMConfig::default(),
            search: SearchConfig::default(),
            pipeline: PipelineConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_base_url: None,
            model: String::from("gpt-4-turbo-preview"),
            max_tokens: 4096,
            temperature: 0.7,
            retry_attempts: 3,
            retry_delay_ms: 5000,
            max_iterations: 8,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tavily_api_key: std::env::var("TAVILY_API_KEY").unwrap_or_default(),
            kaggle_api_token: std::env::var("KAGGLE_API_TOKEN").unwrap_or_default(),
            tavily_base_url: String::from("https://api.tavily.com"),
            kaggle_base_url: String::from("https://www.kaggle.com/api/v1"),
            huggingface_base_url: String::from("https://huggingface.co/api"),
            timeout_seconds: None,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_context_chars: 48_000,
            return_partial_on_max_depth: true,
        }
    }
}
