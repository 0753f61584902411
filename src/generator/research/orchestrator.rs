use std::time::Instant;

use crate::error::ProposalError;
use crate::generator::context::GeneratorContext;
use crate::generator::research::agents::industry_researcher::IndustryResearcher;
use crate::generator::research::agents::market_strategist::MarketStrategist;
use crate::generator::research::agents::resource_specialist::ResourceSpecialist;
use crate::generator::research::agents::solution_architect::SolutionArchitect;
use crate::generator::research::memory::RunContext;
use crate::generator::step_forward_agent::{StepForwardAgent, execute_task};
use crate::generator::types::TaskSpec;

/// 多智能体提案编排器
#[derive(Default)]
pub struct ProposalOrchestrator;

impl ProposalOrchestrator {
    /// 按固定顺序构建四个任务：调研 → 市场分析 → 资源发现 → 提案撰写
    pub fn build_tasks(&self, company: &str) -> Vec<TaskSpec> {
        let agents: [&dyn StepForwardAgent; 4] = [
            &IndustryResearcher,
            &MarketStrategist,
            &ResourceSpecialist,
            &SolutionArchitect,
        ];
        agents.iter().map(|agent| agent.task_spec(company)).collect()
    }

    /// 顺序执行全部任务，返回最后一个任务的输出
    ///
    /// 任一阶段失败即中止整个流程，不产生部分结果。
    pub async fn execute_pipeline(
        &self,
        context: &GeneratorContext,
        company: &str,
    ) -> Result<String, ProposalError> {
        println!(
            "🚀 开始为 {} 生成AI/ML提案 (输出语言: {})...",
            company,
            context.config.target_language.display_name()
        );

        let tasks = self.build_tasks(company);
        let total = tasks.len();
        let mut run_context = RunContext::new();

        for task in tasks {
            let stage = task.stage;
            println!("🤖 [{}/{}] {}", stage.ordinal(), total, stage.label());

            let started = Instant::now();
            let output = execute_task(context, &task, &run_context)
                .await
                .map_err(|e| {
                    tracing::error!(%stage, error = %e, "stage failed, aborting pipeline");
                    ProposalError::stage_failed(stage, e)
                })?;

            tracing::info!(
                %stage,
                elapsed_ms = started.elapsed().as_millis() as u64,
                output_chars = output.len(),
                "stage completed"
            );
            println!("✓ {} 完成", task.agent.role);

            run_context.record(task, output);
        }

        println!("✓ 提案流程执行完毕");

        run_context
            .into_final_output()
            .ok_or_else(|| ProposalError::Configuration("no stages were executed".to_string()))
    }
}
