use std::fs;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use proposal_crew::config::Config;
use proposal_crew::generator::context::GeneratorContext;
use proposal_crew::llm::client::{AgentExecuteParams, CompletionBackend};
use proposal_crew::search::{SearchClient, SearchProvider};
use proposal_crew::{ProposalError, generate_proposal, launch};
use serde_json::Value;
use tempfile::TempDir;

/// 所有搜索都失败的客户端
struct OfflineSearch;

#[async_trait]
impl SearchClient for OfflineSearch {
    async fn web_search(&self, _query: &str) -> Result<Value> {
        Err(anyhow!("connection refused"))
    }

    async fn kaggle_datasets(&self, _query: &str) -> Result<Value> {
        Err(anyhow!("403 Forbidden"))
    }

    async fn huggingface_datasets(&self, _query: &str) -> Result<Value> {
        Err(anyhow!("timed out"))
    }
}

/// 模拟模型：有工具时调用每个工具一次，把工具结果和收到的提示词摘要写进输出
struct ToolUsingBackend {
    search: SearchProvider,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ToolUsingBackend {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            search: SearchProvider::new(Arc::new(OfflineSearch)),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for ToolUsingBackend {
    async fn complete(&self, params: AgentExecuteParams) -> Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((params.log_tag.clone(), params.prompt_user.clone()));

        let mut output = format!("[{} output]", params.log_tag);
        for tool in &params.tools {
            let observation = tool.invoke(&self.search, "Acme").await;
            output.push_str(&format!("\n{}: {}", tool.name(), observation));
        }
        Ok(output)
    }
}

fn create_test_config(temp_dir: &TempDir) -> Config {
    let mut config = Config {
        output_path: temp_dir.path().to_path_buf(),
        ..Default::default()
    };
    config.llm.api_key = "sk-test".to_string();
    config.search.tavily_api_key = "tvly-test".to_string();
    config.search.kaggle_api_token = "kaggle-test".to_string();
    config
}

#[tokio::test]
async fn test_failed_searches_do_not_abort_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let backend = ToolUsingBackend::new();
    let context = GeneratorContext::with_backend(create_test_config(&temp_dir), backend.clone());

    let outcome = generate_proposal(&context, "Acme").await.unwrap();

    let prompts = backend.prompts();
    let tags: Vec<_> = prompts.iter().map(|(tag, _)| tag.as_str()).collect();
    assert_eq!(tags, vec!["research", "market", "resource", "proposal"]);

    // 最后一个阶段看到了前面所有工具的错误文本
    let final_prompt = &prompts[3].1;
    assert!(final_prompt.contains("web_search: Error performing search: connection refused"));
    assert!(final_prompt.contains("kaggle_search: Error performing search: 403 Forbidden"));
    assert!(final_prompt.contains("huggingface_search: Error performing search: timed out"));

    assert_eq!(outcome.document.body, "[proposal output]");
    assert_eq!(fs::read_to_string(&outcome.path).unwrap(), "[proposal output]");
}

#[tokio::test]
async fn test_two_companies_produce_two_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);

    let first = generate_proposal(
        &GeneratorContext::with_backend(config.clone(), ToolUsingBackend::new()),
        "Acme",
    )
    .await
    .unwrap();
    let second = generate_proposal(
        &GeneratorContext::with_backend(config, ToolUsingBackend::new()),
        "Globex",
    )
    .await
    .unwrap();

    assert_ne!(first.path, second.path);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[tokio::test]
async fn test_launch_without_credentials_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir);
    config.llm.api_key = String::new();
    config.search.tavily_api_key = "  ".to_string();

    let err = launch(&config, "Acme").await.unwrap_err();

    assert!(matches!(
        &err,
        ProposalError::MissingCredentials(missing)
            if missing == &vec!["llm.api_key", "search.tavily_api_key"]
    ));
    assert!(err.to_string().contains("llm.api_key, search.tavily_api_key"));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
