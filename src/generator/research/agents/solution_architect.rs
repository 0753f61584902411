use crate::generator::step_forward_agent::StepForwardAgent;
use crate::generator::types::{AgentSpec, Stage};

/// AI解决方案架构师 - 汇总全部调研结果，撰写最终提案
#[derive(Default)]
pub struct SolutionArchitect;

impl StepForwardAgent for SolutionArchitect {
    fn stage(&self) -> Stage {
        Stage::ProposalSynthesis
    }

    fn agent_spec(&self) -> AgentSpec {
        AgentSpec {
            role: "AI Solution Architect".to_string(),
            goal: "Create comprehensive AI implementation proposals".to_string(),
            persona: r#"Senior solution architect specializing in creating
detailed and actionable AI implementation plans."#
                .to_string(),
            tools: vec![],
        }
    }

    fn instruction(&self, _company: &str) -> String {
        r#"Generate a detailed implementation proposal:
1. Executive Summary
2. Company & Industry Analysis
3. AI/ML Opportunity Assessment
4. Detailed Use Cases
   - Implementation requirements
   - Resource needs
   - Timeline
5. Risk Analysis
6. ROI Projections
7. Next Steps

Format in professional Markdown with all resources linked."#
            .to_string()
    }
}
