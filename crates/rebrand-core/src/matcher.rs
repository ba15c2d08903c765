//! 源字面量匹配器（单模式 Aho-Corasick）
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use anyhow::Result;

use crate::rules::{SOURCE_TOKEN, TARGET_TOKEN};

/// 固定源字面量编译后的自动机
/// 同一自动机同时服务于字节级预筛与文本级计数/替换：
/// 优先级列表内的编码均保持 ASCII 字节原样，文本命中必有字节命中。
pub(crate) struct TokenMatcher {
    ac: AhoCorasick,
}

impl TokenMatcher {
    /// 编译固定源字面量
    pub(crate) fn new() -> Result<Self> {
        let ac = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build([SOURCE_TOKEN])?;
        Ok(Self { ac })
    }

    /// 字节级预筛：原始内容不含源字面量字节序列时，文件必然不变
    pub(crate) fn hits_bytes(&self, buf: &[u8]) -> bool {
        self.ac.is_match(buf)
    }

    /// 统计解码文本中的命中次数（非重叠、自左向右）
    pub(crate) fn count(&self, text: &str) -> usize {
        self.ac.find_iter(text).count()
    }

    /// 对解码文本执行全局字面量替换
    pub(crate) fn replace(&self, text: &str) -> String {
        self.ac.replace_all(text, &[TARGET_TOKEN])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_replaces_all_occurrences() {
        let m = TokenMatcher::new().unwrap();
        let text = "DominoNext build of DominoNext";
        assert_eq!(m.count(text), 2);
        assert_eq!(m.replace(text), "Lumino build of Lumino");
    }

    #[test]
    fn adjacent_occurrences_do_not_overlap() {
        let m = TokenMatcher::new().unwrap();
        assert_eq!(m.count("DominoNextDominoNext"), 2);
        assert_eq!(m.replace("DominoNextDominoNext"), "LuminoLumino");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let m = TokenMatcher::new().unwrap();
        assert_eq!(m.count("dominonext DOMINONEXT"), 0);
        assert_eq!(m.replace("nothing here"), "nothing here");
    }

    #[test]
    fn byte_prefilter_sees_raw_content() {
        let m = TokenMatcher::new().unwrap();
        assert!(m.hits_bytes(b"xx DominoNext yy"));
        assert!(!m.hits_bytes(b"xx Lumino yy"));
    }
}
