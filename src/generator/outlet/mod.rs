use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProposalError;

/// 文件名中不允许出现的字符
const INVALID_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// 保存提案到配置的输出目录
pub fn save(output_dir: &Path, document: &ProposalDocument) -> Result<PathBuf, ProposalError> {
    DiskOutlet::new(output_dir).save(document)
}

pub trait Outlet {
    fn save(&self, document: &ProposalDocument) -> Result<PathBuf, ProposalError>;
}

/// 最终交付的提案文档，创建后不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalDocument {
    pub company: String,
    pub generated_at: DateTime<Local>,
    /// Markdown正文，原样写入文件
    pub body: String,
}

impl ProposalDocument {
    pub fn new(company: &str, body: String) -> Self {
        Self::with_timestamp(company, body, Local::now())
    }

    pub fn with_timestamp(company: &str, body: String, generated_at: DateTime<Local>) -> Self {
        Self {
            company: company.to_string(),
            generated_at,
            body,
        }
    }

    /// ai_proposal_<公司>_<YYYYMMDD_HHMMSS>.md
    pub fn file_name(&self) -> String {
        format!(
            "ai_proposal_{}_{}.md",
            sanitize_company(&self.company),
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}

fn sanitize_company(company: &str) -> String {
    company
        .chars()
        .map(|c| {
            if INVALID_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

pub struct DiskOutlet {
    output_dir: PathBuf,
}

impl DiskOutlet {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Outlet for DiskOutlet {
    fn save(&self, document: &ProposalDocument) -> Result<PathBuf, ProposalError> {
        println!("\n🖊️ 提案存储中...");

        let output_file_path = self.output_dir.join(document.file_name());

        if !self.output_dir.as_os_str().is_empty() && !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)
                .map_err(|e| ProposalError::persistence(self.output_dir.clone(), e))?;
        }

        // 同名文件直接覆盖
        fs::write(&output_file_path, &document.body)
            .map_err(|e| ProposalError::persistence(output_file_path.clone(), e))?;

        tracing::info!(
            path = %output_file_path.display(),
            bytes = document.body.len(),
            "proposal written"
        );
        println!("💾 已保存提案: {}", output_file_path.display());

        Ok(output_file_path)
    }
}

#[cfg(test)]
mod tests;
