use anyhow::Result;

use crate::generator::context::GeneratorContext;
use crate::generator::research::memory::RunContext;
use crate::generator::types::{AgentSpec, Stage, TaskSpec};
use crate::llm::client::AgentExecuteParams;

/// 流水线中的一个角色：给出Agent定义与任务指令模板
pub trait StepForwardAgent: Send + Sync {
    /// 所属阶段
    fn stage(&self) -> Stage;

    /// Agent角色定义
    fn agent_spec(&self) -> AgentSpec;

    /// 任务指令，部分阶段会嵌入公司名称
    fn instruction(&self, company: &str) -> String;

    /// 构建绑定到本Agent的任务
    fn task_spec(&self, company: &str) -> TaskSpec {
        TaskSpec {
            stage: self.stage(),
            instruction: self.instruction(company),
            agent: self.agent_spec(),
        }
    }
}

/// 任务Prompt构建器
pub struct TaskPromptBuilder<'a> {
    context: &'a GeneratorContext,
}

impl<'a> TaskPromptBuilder<'a> {
    pub fn new(context: &'a GeneratorContext) -> Self {
        Self { context }
    }

    /// 构建系统提示词与用户提示词，先前阶段的输出作为上下文附加在任务之后
    pub fn build(&self, task: &TaskSpec, run_context: &RunContext) -> AgentExecuteParams {
        let config = &self.context.config;
        let prompt_sys = format!(
            "{}\n\n{}",
            task.agent.system_prompt(),
            config.target_language.prompt_instruction()
        );

        let mut prompt_user = format!("## Current Task\n{}\n\n", task.instruction.trim());
        if !run_context.is_empty() {
            prompt_user.push_str("## Context from previous stages\n");
            prompt_user.push_str(&run_context.render(config.pipeline.max_context_chars));
            prompt_user.push_str("Build on the context above. ");
        }
        prompt_user.push_str("Respond with your complete final answer.");

        AgentExecuteParams {
            prompt_sys,
            prompt_user,
            tools: task.agent.tools.clone(),
            log_tag: task.stage.id().to_string(),
        }
    }
}

/// 执行单个任务，返回模型输出的原始文本
pub async fn execute_task(
    context: &GeneratorContext,
    task: &TaskSpec,
    run_context: &RunContext,
) -> Result<String> {
    let params = TaskPromptBuilder::new(context).build(task, run_context);
    tracing::debug!(
        stage = %task.stage,
        prompt_chars = params.prompt_user.len(),
        tools = params.tools.len(),
        "dispatching task to model"
    );

    context.llm_client.complete(params).await
}
