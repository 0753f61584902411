use crate::llm::tools::ToolKind;

/// 单次Agent调用的参数
#[derive(Debug, Clone)]
pub struct AgentExecuteParams {
    pub prompt_sys: String,
    pub prompt_user: String,
    /// 本次调用可用的工具
    pub tools: Vec<ToolKind>,
    /// 日志标签，通常为阶段标识
    pub log_tag: String,
}
