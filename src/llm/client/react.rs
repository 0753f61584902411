//! ReAct模式配置与响应

/// ReAct多轮对话配置
#[derive(Debug, Clone)]
pub struct ReActConfig {
    /// 最大迭代次数（工具调用轮次）
    pub max_iterations: usize,
    /// 达到最大迭代次数时是否返回部分结果
    pub return_partial_on_max_depth: bool,
}

/// ReAct执行结果
#[derive(Debug, Clone)]
pub struct ReActResponse {
    pub content: String,
    pub iterations_used: usize,
    pub stopped_by_max_depth: bool,
    /// 形如 name(arguments) 的工具调用记录
    pub tool_calls_history: Vec<String>,
}

impl ReActResponse {
    pub fn success(content: String, iterations_used: usize) -> Self {
        Self {
            content,
            iterations_used,
            stopped_by_max_depth: false,
            tool_calls_history: Vec::new(),
        }
    }

    pub fn partial(content: String, max_depth: usize, tool_calls_history: Vec<String>) -> Self {
        Self {
            content,
            iterations_used: max_depth,
            stopped_by_max_depth: true,
            tool_calls_history,
        }
    }
}
