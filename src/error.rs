use std::path::PathBuf;

use thiserror::Error;

use crate::generator::types::Stage;

/// 提案生成流程的错误类型
///
/// 工具调用失败不会出现在这里：搜索错误以文本形式嵌入工具结果，流程继续执行。
#[derive(Debug, Error)]
pub enum ProposalError {
    #[error("company name must not be empty")]
    MissingCompany,
    #[error("missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("stage `{stage}` failed: {source:#}")]
    StageFailed {
        stage: Stage,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to write proposal to {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProposalError {
    pub fn stage_failed(stage: Stage, source: anyhow::Error) -> Self {
        Self::StageFailed { stage, source }
    }

    pub fn persistence(path: PathBuf, source: std::io::Error) -> Self {
        Self::Persistence { path, source }
    }

    /// 失败所在的阶段（仅阶段失败时存在）
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            Self::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
