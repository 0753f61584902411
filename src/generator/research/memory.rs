use crate::generator::types::TaskSpec;

const TRUNCATION_MARKER: &str = "...(truncated)";
const RECORD_SEPARATOR: &str = "\n\n";

/// 已完成阶段的记录
#[derive(Debug, Clone)]
pub struct StageRecord {
    pub task: TaskSpec,
    pub output: String,
}

/// 单次运行的上下文：按执行顺序追加的阶段输出，记录后不再修改
#[derive(Debug, Default)]
pub struct RunContext {
    records: Vec<StageRecord>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个阶段的输出
    pub fn record(&mut self, task: TaskSpec, output: String) {
        self.records.push(StageRecord { task, output });
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 最后一个阶段的输出即为交付物
    pub fn into_final_output(mut self) -> Option<String> {
        self.records.pop().map(|r| r.output)
    }

    /// 将已有输出按执行顺序拼接为后续阶段的上下文
    ///
    /// 结果（含标题、分隔符与截断标记）不超过max_chars个字符；标题本身超出预算时只保留标题。
    /// 超出预算时保留较新的输出，从最早的输出开始截断尾部。
    pub fn render(&self, max_chars: usize) -> String {
        let headers: Vec<String> = self
            .records
            .iter()
            .map(|r| format!("### {} ({})\n", r.task.agent.role, r.task.stage))
            .collect();
        let overhead: usize = headers
            .iter()
            .map(|h| h.chars().count() + RECORD_SEPARATOR.len())
            .sum();
        let marker_chars = TRUNCATION_MARKER.chars().count();
        let mut remaining = max_chars.saturating_sub(overhead);

        // 从最新的记录开始分配预算
        let mut fits = vec![Fit::Whole; self.records.len()];
        for (idx, record) in self.records.iter().enumerate().rev() {
            let len = record.output.chars().count();
            if len <= remaining {
                remaining -= len;
                continue;
            }
            fits[idx] = if remaining >= marker_chars {
                Fit::Cut(remaining - marker_chars)
            } else {
                Fit::Dropped
            };
            remaining = 0;
        }

        let mut rendered = String::new();
        let mut truncated = 0;
        for ((record, header), fit) in self.records.iter().zip(&headers).zip(fits) {
            rendered.push_str(header);
            match fit {
                Fit::Whole => rendered.push_str(&record.output),
                Fit::Cut(keep) => {
                    truncated += 1;
                    rendered.extend(record.output.chars().take(keep));
                    rendered.push_str(TRUNCATION_MARKER);
                }
                Fit::Dropped => truncated += 1,
            }
            rendered.push_str(RECORD_SEPARATOR);
        }

        if truncated > 0 {
            tracing::info!(truncated, max_chars, "prior stage outputs truncated to fit context budget");
        }
        rendered
    }
}

/// 单条输出在预算内的保留方式
#[derive(Debug, Clone, Copy)]
enum Fit {
    Whole,
    /// 保留前n个字符并追加截断标记
    Cut(usize),
    /// 连截断标记也放不下
    Dropped,
}
