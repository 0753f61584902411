//! 测试用的模型后端

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::llm::client::{AgentExecuteParams, CompletionBackend};

/// 按顺序返回预设结果，并记录每次调用的参数
#[derive(Default)]
pub struct ScriptedBackend {
    responses: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<AgentExecuteParams>>,
}

impl ScriptedBackend {
    pub fn new(responses: Vec<Result<&str, &str>>) -> Arc<Self> {
        let responses = responses
            .into_iter()
            .map(|r| r.map(str::to_string).map_err(str::to_string))
            .collect();
        Arc::new(Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<AgentExecuteParams> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_order(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.log_tag).collect()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, params: AgentExecuteParams) -> Result<String> {
        self.calls.lock().unwrap().push(params);
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("no scripted response left")),
        }
    }
}

/// 使用脚本后端构建上下文
pub fn scripted_context(config: Config, backend: Arc<ScriptedBackend>) -> GeneratorContext {
    GeneratorContext::with_backend(config, backend)
}
