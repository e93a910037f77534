//! 文本输入校验工具

use crate::utils::error::{AppError, AppResult};

/// 去除首尾空白并要求非空
///
/// 写入类操作的文本字段在到达数据库之前统一经过此校验，
/// 入库的是去除空白后的值
pub fn require_trimmed<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!("{}不能为空", field)));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trimmed_rejects_blank() {
        assert!(require_trimmed("分类名称", "").is_err());
        assert!(require_trimmed("分类名称", "   ").is_err());
        assert!(require_trimmed("分类名称", "\t\n").is_err());
    }

    #[test]
    fn require_trimmed_returns_trimmed_value() {
        assert_eq!(require_trimmed("分类名称", "  Sunsets ").unwrap(), "Sunsets");
        assert_eq!(require_trimmed("分类名称", "风景").unwrap(), "风景");
    }
}
