//! 分类数据模型

use serde::{Deserialize, Serialize};

/// 用户自定义分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// 分类ID
    pub id: i64,
    /// 分类名称（唯一，区分大小写）
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_camel_case() {
        let category = Category {
            id: 1,
            name: "风景".to_string(),
        };

        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "风景");
    }
}
