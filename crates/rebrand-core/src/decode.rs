//! 编码回退解码（按优先级逐一尝试）
//!
//! 解码按 utf-8 → gbk → latin1 → cp1252 的固定顺序逐一严格尝试，标签经
//! encoding_rs 的 WHATWG 规则解析。注意 latin1 与 cp1252 在 WHATWG 下
//! 解析到同一个 windows-1252 解码器，且该解码器对任意字节序列都解码
//! 成功，因此末位条目实际不可达，属有意保留的宽容尾部。
//!
//! 在进入优先级列表之前先做一次内容守卫：含 NUL 字节的内容按二进制
//! 跳过，避免真正的二进制文件被尾部的宽容解码器误解码后改写。守卫
//! 刻意不做可打印比例判定，纯中文 GBK 文本的字节大多落在 ASCII 可打印
//! 区之外，比例判定会误杀。
use encoding_rs::Encoding;
use thiserror::Error;

/// 编码优先级标签（顺序即尝试顺序）
pub(crate) const ENCODING_LABELS: &[&str] = &["utf-8", "gbk", "latin1", "cp1252"];

/// 解码失败的可恢复原因（均按“跳过该文件”处理，不中断遍历）
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DecodeError {
    /// 内容含 NUL 字节，疑似二进制，不进入解码尝试
    #[error("content looks binary")]
    Binary,
    /// 优先级列表内所有编码都解码失败
    #[error("no encoding in the priority list decoded the content")]
    UnknownEncoding,
}

/// 按优先级将字节内容解码为文本
/// - 先做二进制守卫，再逐一尝试严格解码（不做 BOM 嗅探、不做有损替换，
///   UTF-8 BOM 会作为 U+FEFF 保留在文本里，改写后随正文原样写回）
/// - 返回首个成功的文本与所用编码（供诊断输出）
pub(crate) fn decode_text(bytes: &[u8]) -> Result<(String, &'static Encoding), DecodeError> {
    if is_probably_binary(bytes) {
        return Err(DecodeError::Binary);
    }
    for label in ENCODING_LABELS {
        let enc = match Encoding::for_label(label.as_bytes()) {
            Some(e) => e,
            None => continue,
        };
        if let Some(text) = enc.decode_without_bom_handling_and_without_replacement(bytes) {
            return Ok((text.into_owned(), enc));
        }
    }
    Err(DecodeError::UnknownEncoding)
}

/// 判定内容是否“明显是二进制”：只要包含任何 NUL 字节（0x00）即是。
/// NUL 在优先级列表内的任何文本编码中都不会合法出现在正常文本里。
fn is_probably_binary(buf: &[u8]) -> bool {
    buf.iter().any(|&b| b == 0)
}
