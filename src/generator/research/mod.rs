// 四阶段提案流水线
// A 行业调研：IndustryResearcher = 公司名称 + 网页搜索
// B 机会分析：MarketStrategist = 公司名称 + A + 网页搜索
// C 资源发现：ResourceSpecialist = A + B + Kaggle/HuggingFace数据集搜索
// D 提案撰写：SolutionArchitect = A + B + C

use crate::error::ProposalError;
use crate::generator::context::GeneratorContext;
use crate::generator::research::orchestrator::ProposalOrchestrator;

pub mod agents;
pub mod memory;
pub mod orchestrator;

/// 执行提案流水线，返回最终的Markdown正文
pub async fn execute(context: &GeneratorContext, company: &str) -> Result<String, ProposalError> {
    let orchestrator = ProposalOrchestrator;
    orchestrator.execute_pipeline(context, company).await
}

#[cfg(test)]
mod tests;
