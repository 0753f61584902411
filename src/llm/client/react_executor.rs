//! ReAct执行器 - 负责带工具Agent的多轮对话逻辑

use anyhow::{Result, anyhow};
use rig::completion::{AssistantContent, Message, PromptError};

use super::providers::ProviderAgent;
use super::react::{ReActConfig, ReActResponse};

/// ReAct执行器
pub struct ReActExecutor;

impl ReActExecutor {
    /// 执行ReAct循环逻辑
    pub async fn execute(
        agent: &ProviderAgent,
        user_prompt: &str,
        config: &ReActConfig,
    ) -> Result<ReActResponse> {
        tracing::debug!(max_iterations = config.max_iterations, "starting ReAct loop");

        match agent.multi_turn(user_prompt, config.max_iterations).await {
            Ok(response) => Ok(ReActResponse::success(response, config.max_iterations)),
            Err(PromptError::MaxDepthError {
                max_depth,
                chat_history,
                ..
            }) => {
                tracing::warn!(max_depth, "ReAct loop hit the iteration limit");

                let content = last_assistant_text(&chat_history);
                if !config.return_partial_on_max_depth || content.trim().is_empty() {
                    return Err(anyhow!(
                        "agent did not finish within {} tool iterations",
                        max_depth
                    ));
                }

                Ok(ReActResponse::partial(
                    content,
                    max_depth,
                    tool_call_trace(&chat_history),
                ))
            }
            Err(e) => Err(anyhow!("agent execution failed: {}", e)),
        }
    }
}

/// 助手消息中的文本片段，按消息顺序展开
fn assistant_items(history: &[Message]) -> impl Iterator<Item = &AssistantContent> {
    history.iter().flat_map(|msg| match msg {
        Message::Assistant { content, .. } => content.iter().collect::<Vec<_>>(),
        _ => Vec::new(),
    })
}

/// 最近一条含文本的助手消息
fn last_assistant_text(history: &[Message]) -> String {
    history
        .iter()
        .rev()
        .filter_map(|msg| match msg {
            Message::Assistant { content, .. } => Some(
                content
                    .iter()
                    .filter_map(|c| match c {
                        AssistantContent::Text(text) => Some(text.text.as_str()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            _ => None,
        })
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn tool_call_trace(history: &[Message]) -> Vec<String> {
    assistant_items(history)
        .filter_map(|c| match c {
            AssistantContent::ToolCall(call) => Some(format!(
                "{}({})",
                call.function.name, call.function.arguments
            )),
            _ => None,
        })
        .collect()
}
