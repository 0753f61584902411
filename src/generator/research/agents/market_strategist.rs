use crate::generator::step_forward_agent::StepForwardAgent;
use crate::generator::types::{AgentSpec, Stage};
use crate::llm::tools::ToolKind;

/// AI/ML策略顾问 - 结合行业趋势给出候选用例
#[derive(Default)]
pub struct MarketStrategist;

impl StepForwardAgent for MarketStrategist {
    fn stage(&self) -> Stage {
        Stage::MarketAnalysis
    }

    fn agent_spec(&self) -> AgentSpec {
        AgentSpec {
            role: "AI/ML Strategy Consultant".to_string(),
            goal: "Analyze market trends and generate relevant AI/ML use cases".to_string(),
            persona: r#"Senior AI consultant specializing in identifying and
evaluating AI/ML opportunities across industries."#
                .to_string(),
            tools: vec![ToolKind::WebSearch],
        }
    }

    fn instruction(&self, company: &str) -> String {
        format!(
            r#"Analyze AI/ML opportunities for {company}:
1. Current industry AI/ML trends
2. Generate 5 specific use cases with:
   - Detailed description
   - Expected benefits
   - Required technologies
   - Implementation complexity
   - ROI estimation
   - Priority level
3. Competitive analysis of AI adoption

Format as structured JSON with clear sections."#
        )
    }
}
