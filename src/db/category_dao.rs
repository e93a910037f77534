//! 分类数据访问层

use rusqlite::{params, Row};

use crate::models::Category;
use crate::utils::error::{AppError, AppResult};

use super::connection::Database;
use super::map_unique_violation;

/// 从数据库行映射到 Category 结构
fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

impl Database {
    // ==================== Category CRUD ====================

    /// 创建分类
    pub fn insert_category(&self, name: &str) -> AppResult<i64> {
        let conn = self.connection()?;

        conn.execute("INSERT INTO categories (name) VALUES (?1)", params![name])
            .map_err(|e| map_unique_violation(e, name))?;

        Ok(conn.last_insert_rowid())
    }

    /// 根据 ID 获取分类
    pub fn get_category(&self, id: i64) -> AppResult<Option<Category>> {
        let conn = self.connection()?;

        let result = conn.query_row(
            "SELECT id, name FROM categories WHERE id = ?1",
            params![id],
            row_to_category,
        );

        match result {
            Ok(category) => Ok(Some(category)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    /// 根据名称获取分类（名称区分大小写）
    pub fn get_category_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        let conn = self.connection()?;

        let result = conn.query_row(
            "SELECT id, name FROM categories WHERE name = ?1",
            params![name],
            row_to_category,
        );

        match result {
            Ok(category) => Ok(Some(category)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    /// 获取所有分类（按名称升序）
    pub fn get_all_categories(&self) -> AppResult<Vec<Category>> {
        let conn = self.connection()?;

        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY name ASC")?;
        let categories: Vec<Category> = stmt
            .query_map([], row_to_category)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(categories)
    }

    /// 重命名分类
    ///
    /// 重命名为自身当前名称同样成功（同一行不触发 UNIQUE 冲突）
    pub fn update_category(&self, id: i64, new_name: &str) -> AppResult<()> {
        let conn = self.connection()?;

        let rows = conn
            .execute(
                "UPDATE categories SET name = ?1 WHERE id = ?2",
                params![new_name, id],
            )
            .map_err(|e| map_unique_violation(e, new_name))?;

        if rows == 0 {
            return Err(AppError::NotFound(format!("分类 {}", id)));
        }

        Ok(())
    }

    /// 删除分类
    ///
    /// 删除不存在的 ID 视为成功（返回 false）；
    /// 不级联修改 categorized_images，已打标图片保留原分类文本
    pub fn delete_category(&self, id: i64) -> AppResult<bool> {
        let conn = self.connection()?;
        let rows = conn.execute("DELETE FROM categories WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }
}
