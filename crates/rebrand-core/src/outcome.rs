//! 单文件终态与运行统计

/// 单个文件在一次运行中的终态
/// 每个文件恰好落入其中之一：`发现 → {不合格 | 不可解码 | 未变更 | 已重写}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 扩展名不在固定集合内（或为工具自身产物），未做任何内容 I/O
    Ineligible,
    /// 内容疑似二进制或所有编码解码失败，跳过并保持原样
    Undecodable,
    /// 已读取但无命中，内容保持字节级原样
    Unchanged,
    /// 已就地重写为 UTF-8，记录替换次数
    Rewritten { occurrences: usize },
}

/// 运行统计（供 CLI 结束时打印）
#[derive(Debug, Default, Clone)]
pub struct RewriteStats {
    /// 通过资格判定并读取了内容的文件数
    pub files_visited: usize,
    /// 实际发生写回的文件数
    pub files_rewritten: usize,
    /// 因不可解码而跳过的文件数
    pub files_skipped: usize,
    /// 全部文件累计的替换次数
    pub occurrences_replaced: usize,
}

impl RewriteStats {
    /// 累加单文件终态
    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Ineligible => {}
            FileOutcome::Undecodable => {
                self.files_visited += 1;
                self.files_skipped += 1;
            }
            FileOutcome::Unchanged => {
                self.files_visited += 1;
            }
            FileOutcome::Rewritten { occurrences } => {
                self.files_visited += 1;
                self.files_rewritten += 1;
                self.occurrences_replaced += occurrences;
            }
        }
    }
}
