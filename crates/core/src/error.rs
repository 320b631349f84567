use thiserror::Error;

/// 边界操作（快照解析、导出序列化）的错误
///
/// 转换流程本身不会失败：无法解析的变量只会被跳过
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse input: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize export: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
