//! 目录遍历与就地重写主流程
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::decode::decode_text;
use crate::matcher::TokenMatcher;
use crate::outcome::{FileOutcome, RewriteStats};
use crate::rules::{is_eligible, is_pruned_dir, is_self_artifact};

/// 遍历 root 下全部文件并就地执行字面量替换
/// 行为要点：
/// - 任意深度的 `.git` 目录在下降前整体剪枝（根目录自身不剪）
/// - 目录项按文件名排序，保证诊断输出顺序可复现
/// - 不可解码文件记一条 warn 后继续；其余 I/O 错误带路径上下文向上传播
pub fn rewrite_tree(root: &Path) -> Result<RewriteStats> {
    let matcher = TokenMatcher::new()?;
    let mut stats = RewriteStats::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(e));

    for entry in walker {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let outcome = rewrite_file(entry.path(), &matcher)?;
        stats.record(outcome);
    }

    Ok(stats)
}

/// 目录项是否应剪枝（仅目录参与；文件交由扩展名判定）
fn should_prune(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(is_pruned_dir)
            .unwrap_or(false)
}

/// 处理单个文件：资格判定 → 整读 → 字节预筛 → 解码 → 替换 → 条件写回
pub(crate) fn rewrite_file(path: &Path, matcher: &TokenMatcher) -> Result<FileOutcome> {
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(s) => s,
        None => return Ok(FileOutcome::Ineligible),
    };
    if is_self_artifact(file_name) || !is_eligible(file_name) {
        return Ok(FileOutcome::Ineligible);
    }

    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .with_context(|| format!("read {}", path.display()))?;

    // 字节预筛：没有源字面量的字节序列就不可能有文本命中，直接跳过解码
    if !matcher.hits_bytes(&buf) {
        return Ok(FileOutcome::Unchanged);
    }

    let (text, encoding) = match decode_text(&buf) {
        Ok(v) => v,
        Err(err) => {
            warn!(path = %path.display(), reason = %err, "skipped file with unknown encoding");
            return Ok(FileOutcome::Undecodable);
        }
    };

    // 预筛可能在 GBK 双字节序列内部误中，以解码文本的命中数为准
    let occurrences = matcher.count(&text);
    if occurrences == 0 {
        return Ok(FileOutcome::Unchanged);
    }

    let new_text = matcher.replace(&text);
    std::fs::write(path, new_text.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), occurrences, encoding = encoding.name(), "replaced");

    Ok(FileOutcome::Rewritten { occurrences })
}
