use crate::generator::step_forward_agent::StepForwardAgent;
use crate::generator::types::{AgentSpec, Stage};
use crate::llm::tools::ToolKind;

/// 行业调研员 - 调研公司及其所在行业
#[derive(Default)]
pub struct IndustryResearcher;

impl StepForwardAgent for IndustryResearcher {
    fn stage(&self) -> Stage {
        Stage::Research
    }

    fn agent_spec(&self) -> AgentSpec {
        AgentSpec {
            role: "Industry Research Specialist".to_string(),
            goal: "Conduct comprehensive industry and company research".to_string(),
            persona: r#"Expert in market research and industry analysis with
extensive experience in technology sector analysis."#
                .to_string(),
            tools: vec![ToolKind::WebSearch],
        }
    }

    fn instruction(&self, company: &str) -> String {
        format!(
            r#"Thoroughly research {company} and their industry:
1. Industry classification and market position
2. Core products/services and target markets
3. Technology stack and digital maturity
4. Key competitors and their AI initiatives
5. Strategic focus areas and challenges

Provide a detailed JSON report covering all aspects."#
        )
    }
}
