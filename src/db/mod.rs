//! PhotoMark 数据库模块
//!
//! 包含数据库连接管理和数据访问层

use rusqlite::ErrorCode;

use crate::utils::error::AppError;

pub mod schema;
pub mod connection;
pub mod category_dao;
pub mod image_dao;

// 重新导出常用类型
pub use connection::{default_db_path, CatalogStats, Database};

/// 将 UNIQUE 约束冲突转换为 Duplicate 错误
///
/// 依据 SQLite 错误码判断，不解析错误消息文本
pub(crate) fn map_unique_violation(err: rusqlite::Error, what: &str) -> AppError {
    if err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
        AppError::Duplicate(what.to_string())
    } else {
        AppError::Database(err)
    }
}
