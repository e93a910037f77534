//! PhotoMark 错误处理模块
//!
//! 定义应用程序错误类型

use serde::Serialize;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 数据库错误
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 唯一约束冲突（分类名或媒体库 URI 已存在）
    #[error("记录已存在: {0}")]
    Duplicate(String),

    /// 记录不存在
    #[error("记录不存在: {0}")]
    NotFound(String),

    /// 输入无效
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 通用错误
    #[error("{0}")]
    General(String),
}

impl AppError {
    /// 稳定错误码，前端按类别分支而不是解析错误文本
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "E_DB_ERROR",
            AppError::Io(_) => "E_IO_ERROR",
            AppError::Duplicate(_) => "E_DUPLICATE",
            AppError::NotFound(_) => "E_NOT_FOUND",
            AppError::InvalidInput(_) => "E_INVALID_INPUT",
            AppError::General(_) => "E_GENERAL",
        }
    }
}

/// 用于前端命令返回的错误包装
#[derive(Debug, Serialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
}

impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        CommandError {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

// 实现 Serialize 以便错误可以直接序列化返回前端
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let cmd_error = CommandError {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        cmd_error.serialize(serializer)
    }
}

/// 应用程序结果类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Duplicate("Sunsets".to_string());
        assert_eq!(err.to_string(), "记录已存在: Sunsets");

        let err = AppError::NotFound("分类 42".to_string());
        assert_eq!(err.to_string(), "记录不存在: 分类 42");
    }

    #[test]
    fn test_command_error_conversion() {
        let err = AppError::Duplicate("file://a.png".to_string());
        let cmd_err: CommandError = err.into();
        assert_eq!(cmd_err.code, "E_DUPLICATE");

        let err = AppError::NotFound("7".to_string());
        let cmd_err: CommandError = err.into();
        assert_eq!(cmd_err.code, "E_NOT_FOUND");
    }

    #[test]
    fn test_error_serializes_with_code() {
        let err = AppError::InvalidInput("分类名称不能为空".to_string());
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["code"], "E_INVALID_INPUT");
        assert!(value["message"].as_str().unwrap().contains("分类名称"));
    }
}
