//! 已分类图片数据模型

use serde::{Deserialize, Serialize};

/// 已分类图片记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedImage {
    /// 记录ID
    pub id: i64,
    /// 媒体库资源 URI（唯一）
    pub media_library_uri: String,
    /// 分类名称（自由文本，与分类表仅按名称关联，无外键）
    pub category: String,
    /// 描述（可为空字符串）
    pub description: String,
    /// 保存时间（毫秒时间戳，插入时由存储层写入）
    pub saved_at: i64,
}

/// 用于插入新图片记录的输入结构
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategorizedImage {
    pub media_library_uri: String,
    pub category: String,
    pub description: String,
}

/// 按分类浏览时返回的图片条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryImage {
    /// 媒体库资源 URI
    pub uri: String,
    /// 描述
    pub description: String,
}
