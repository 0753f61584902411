//! 搜索工具 - 将ToolKind适配为rig工具

use rig::tool::Tool;
use serde::Deserialize;
use std::convert::Infallible;

use super::ToolKind;
use crate::search::SearchProvider;

/// 搜索工具，具体能力由kind决定
#[derive(Clone)]
pub struct AgentToolSearch {
    kind: ToolKind,
    provider: SearchProvider,
}

/// 搜索参数
#[derive(Debug, Deserialize)]
pub struct SearchArgs {
    pub query: String,
}

impl AgentToolSearch {
    pub fn new(kind: ToolKind, provider: SearchProvider) -> Self {
        Self { kind, provider }
    }
}

impl Tool for AgentToolSearch {
    const NAME: &'static str = "search";

    // 搜索失败以文本形式返回给模型
    type Error = Infallible;
    type Args = SearchArgs;
    type Output = String;

    fn name(&self) -> String {
        self.kind.name().to_string()
    }

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: self.kind.name().to_string(),
            description: self.kind.description().to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        println!("   🔧 tool called...{}@{:?}", self.kind.name(), args.query);
        tracing::info!(tool = self.kind.name(), query = %args.query, "agent invoked tool");

        Ok(self.kind.invoke(&self.provider, &args.query).await)
    }
}
