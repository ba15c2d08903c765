//! 固定替换规则（字面量、扩展名、剪枝目录、自排除文件）
//!
//! 本工具面向一次性的整树改名，所有规则均为进程生命周期内的固定
//! 常量，不提供外部配置入口。

/// 替换源字面量（旧项目名）
pub const SOURCE_TOKEN: &str = "DominoNext";

/// 替换目标字面量（新项目名）
pub const TARGET_TOKEN: &str = "Lumino";

/// 参与替换的文本文件扩展名（大小写敏感，按后缀精确匹配）
pub(crate) const TEXT_EXTENSIONS: &[&str] = &[
    ".cs", ".axaml", ".md", ".txt", ".json", ".xml", ".sln", ".csproj", ".xaml", ".config",
    ".manifest", ".log",
];

/// 遍历时整体剪掉的目录名（版本控制元数据）
pub(crate) const PRUNED_DIRS: &[&str] = &[".git"];

/// 按文件名排除的工具自身产物（编译后的二进制可能就放在待处理树里）
pub(crate) const SELF_ARTIFACTS: &[&str] = &["rebrand", "rebrand.exe"];

/// 文件名是否命中固定扩展名集合
pub(crate) fn is_eligible(file_name: &str) -> bool {
    TEXT_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// 目录名是否应在下降前剪枝
pub(crate) fn is_pruned_dir(dir_name: &str) -> bool {
    PRUNED_DIRS.iter().any(|d| dir_name == *d)
}

/// 文件名是否为工具自身产物
pub(crate) fn is_self_artifact(file_name: &str) -> bool {
    SELF_ARTIFACTS.iter().any(|n| file_name == *n)
}
