use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::error::ProposalError;
use crate::generator::context::GeneratorContext;
use crate::generator::outlet::{self, ProposalDocument};

/// 一次成功运行的结果
#[derive(Debug, Clone)]
pub struct ProposalOutcome {
    /// 提案文件路径
    pub path: PathBuf,
    pub document: ProposalDocument,
}

/// 启动提案生成工作流
///
/// 公司名称与凭据在创建任何客户端之前校验，校验失败时不会发起网络请求。
pub async fn launch(config: &Config, company: &str) -> Result<ProposalOutcome, ProposalError> {
    let company = company.trim();
    if company.is_empty() {
        return Err(ProposalError::MissingCompany);
    }

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        tracing::error!(?missing, "required credentials are not configured");
        return Err(ProposalError::MissingCredentials(missing));
    }

    let context = GeneratorContext::new(config.clone())
        .map_err(|e| ProposalError::Configuration(format!("{e:#}")))?;

    generate_proposal(&context, company).await
}

/// 执行四阶段流水线并保存最终提案
///
/// 流水线失败时不写入任何文件。
pub async fn generate_proposal(
    context: &GeneratorContext,
    company: &str,
) -> Result<ProposalOutcome, ProposalError> {
    let started = Instant::now();

    let body = crate::generator::research::execute(context, company).await?;
    let document = ProposalDocument::new(company, body);
    let path = outlet::save(&context.config.output_path, &document)?;

    println!("⏱️ 总执行时间: {:.2}秒", started.elapsed().as_secs_f64());

    Ok(ProposalOutcome { path, document })
}
