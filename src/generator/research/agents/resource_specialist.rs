use crate::generator::step_forward_agent::StepForwardAgent;
use crate::generator::types::{AgentSpec, Stage};
use crate::llm::tools::ToolKind;

/// 技术资源专家 - 为已识别的用例查找数据集与参考实现
#[derive(Default)]
pub struct ResourceSpecialist;

impl StepForwardAgent for ResourceSpecialist {
    fn stage(&self) -> Stage {
        Stage::ResourceDiscovery
    }

    fn agent_spec(&self) -> AgentSpec {
        AgentSpec {
            role: "Technical Resource Specialist".to_string(),
            goal: "Identify and validate AI/ML resources and datasets".to_string(),
            persona: r#"Technical expert in AI/ML resources with deep knowledge
of available datasets, models, and implementations."#
                .to_string(),
            tools: vec![ToolKind::KaggleSearch, ToolKind::HuggingFaceSearch],
        }
    }

    // 用例来自上一阶段的输出，指令本身不含公司名称
    fn instruction(&self, _company: &str) -> String {
        r#"For each identified use case:
1. Find relevant datasets (Kaggle/HuggingFace)
2. Identify similar implementations
3. List required technologies
4. Estimate resource requirements

Create a comprehensive JSON report with links."#
            .to_string()
    }
}
