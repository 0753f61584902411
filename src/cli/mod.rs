use crate::config::{Config, LLMProvider};
use crate::i18n::TargetLanguage;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};

/// 默认配置文件名，位于当前工作目录
const DEFAULT_CONFIG_FILE: &str = "proposal.toml";

/// Proposal Crew - 多智能体协作的AI/ML实施提案生成器
#[derive(Parser, Debug)]
#[command(name = "proposal-crew")]
#[command(
    about = "Researches a company with a crew of AI agents and writes a Markdown AI/ML implementation proposal."
)]
#[command(version)]
pub struct Args {
    /// 公司名称
    pub company: String,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 提案输出目录
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// LLM Provider (openai, anthropic, deepseek, openrouter, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 模型名称
    #[arg(short, long)]
    pub model: Option<String>,

    /// Tavily网页搜索 API KEY
    #[arg(long)]
    pub tavily_api_key: Option<String>,

    /// Kaggle API Token
    #[arg(long)]
    pub kaggle_api_token: Option<String>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 目标语言 (en, zh, ja, de, fr)
    #[arg(long)]
    pub target_language: Option<String>,

    /// 生成后在终端输出提案全文
    #[arg(long)]
    pub print: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置，命令行参数优先于配置文件
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(config_path) => load_config(config_path)?,
            None => {
                let default_config_path = std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(DEFAULT_CONFIG_FILE);

                if default_config_path.exists() {
                    load_config(&default_config_path)?
                } else {
                    Config::default()
                }
            }
        };

        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            config.llm.provider = provider_str.parse::<LLMProvider>().map_err(|e| anyhow!(e))?;
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = Some(llm_api_base_url);
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 覆盖搜索凭据
        if let Some(tavily_api_key) = self.tavily_api_key {
            config.search.tavily_api_key = tavily_api_key;
        }
        if let Some(kaggle_api_token) = self.kaggle_api_token {
            config.search.kaggle_api_token = kaggle_api_token;
        }

        // 目标语言配置
        if let Some(target_language_str) = self.target_language {
            if let Ok(target_language) = target_language_str.parse::<TargetLanguage>() {
                config.target_language = target_language;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的目标语言: {}，使用默认语言 (English)",
                    target_language_str
                );
            }
        }

        config.verbose = config.verbose || self.verbose;

        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<Config> {
    Config::from_file(path).with_context(|| format!("无法读取配置文件 {}", path.display()))
}
