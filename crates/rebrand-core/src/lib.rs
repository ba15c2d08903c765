//! 目录树字面量重写库
//!
//! 行为契约：
//! - 仅处理固定扩展名集合内的文本文件，后缀匹配大小写敏感。
//! - 按 utf-8 → gbk → latin1 → cp1252 的优先级回退解码，首个成功者生效。
//! - 对解码文本做 "DominoNext" → "Lumino" 的全局字面量替换（非正则）。
//! - 仅当内容发生变化时以 UTF-8 就地写回；未命中文件保持字节级原样。
//! - 任意深度的 `.git` 目录在下降前剪枝；工具自身产物按文件名排除。

mod decode;
mod matcher;
mod outcome;
mod rewrite;
mod rules;

pub use outcome::{FileOutcome, RewriteStats};
pub use rewrite::rewrite_tree;
pub use rules::{SOURCE_TOKEN, TARGET_TOKEN};
