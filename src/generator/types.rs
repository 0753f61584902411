use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::llm::tools::ToolKind;

/// 流水线阶段，按执行顺序声明
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Research,
    MarketAnalysis,
    ResourceDiscovery,
    ProposalSynthesis,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Research,
        Stage::MarketAnalysis,
        Stage::ResourceDiscovery,
        Stage::ProposalSynthesis,
    ];

    /// 稳定的阶段标识，用于日志与调用记录
    pub fn id(&self) -> &'static str {
        match self {
            Stage::Research => "research",
            Stage::MarketAnalysis => "market",
            Stage::ResourceDiscovery => "resource",
            Stage::ProposalSynthesis => "proposal",
        }
    }

    /// 进度展示文案
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Research => "Researching company and industry...",
            Stage::MarketAnalysis => "Analyzing AI/ML opportunities...",
            Stage::ResourceDiscovery => "Collecting resources and datasets...",
            Stage::ProposalSynthesis => "Generating comprehensive proposal...",
        }
    }

    /// 从1开始的序号
    pub fn ordinal(&self) -> usize {
        match self {
            Stage::Research => 1,
            Stage::MarketAnalysis => 2,
            Stage::ResourceDiscovery => 3,
            Stage::ProposalSynthesis => 4,
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Agent角色定义
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSpec {
    pub role: String,
    pub goal: String,
    /// 角色背景设定
    pub persona: String,
    pub tools: Vec<ToolKind>,
}

impl AgentSpec {
    /// 由角色、目标与背景拼出系统提示词
    pub fn system_prompt(&self) -> String {
        let mut prompt = format!(
            "You are {}.\n\n{}\n\nYour personal goal is: {}",
            self.role,
            self.persona.trim(),
            self.goal
        );
        if !self.tools.is_empty() {
            prompt.push_str("\n\nYou can use the following tools when you need fresh information:\n");
            for tool in &self.tools {
                prompt.push_str(&format!("- {}: {}\n", tool.label(), tool.description()));
            }
        }
        prompt
    }
}

/// 绑定到某个Agent的一次性任务
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSpec {
    pub stage: Stage,
    pub instruction: String,
    pub agent: AgentSpec,
}
