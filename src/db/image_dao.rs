//! 已分类图片数据访问层

use rusqlite::{params, Row};

use crate::models::{CategorizedImage, CategoryImage, CreateCategorizedImage};
use crate::utils::error::{AppError, AppResult};

use super::connection::Database;
use super::map_unique_violation;

/// 从数据库行映射到 CategorizedImage 结构
fn row_to_image(row: &Row<'_>) -> rusqlite::Result<CategorizedImage> {
    Ok(CategorizedImage {
        id: row.get("id")?,
        media_library_uri: row.get("media_library_uri")?,
        category: row.get::<_, Option<String>>("category")?.unwrap_or_default(),
        description: row
            .get::<_, Option<String>>("description")?
            .unwrap_or_default(),
        saved_at: row.get("saved_at")?,
    })
}

impl Database {
    // ==================== CategorizedImage 操作 ====================

    /// 插入已分类图片记录
    ///
    /// saved_at 由存储层在插入时写入当前毫秒时间戳，不由调用方提供
    pub fn insert_categorized_image(&self, image: &CreateCategorizedImage) -> AppResult<i64> {
        let conn = self.connection()?;
        let saved_at = chrono::Utc::now().timestamp_millis();

        conn.execute(
            r#"
            INSERT INTO categorized_images (media_library_uri, category, description, saved_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                image.media_library_uri,
                image.category,
                image.description,
                saved_at,
            ],
        )
        .map_err(|e| map_unique_violation(e, &image.media_library_uri))?;

        Ok(conn.last_insert_rowid())
    }

    /// 获取指定分类下的所有图片（精确匹配，顺序不作保证）
    pub fn get_images_by_category(&self, category: &str) -> AppResult<Vec<CategoryImage>> {
        let conn = self.connection()?;

        let mut stmt = conn.prepare(
            "SELECT media_library_uri, description FROM categorized_images WHERE category = ?1",
        )?;

        let images: Vec<CategoryImage> = stmt
            .query_map(params![category], |row| {
                Ok(CategoryImage {
                    uri: row.get(0)?,
                    description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(images)
    }

    /// 根据媒体库 URI 获取图片记录
    pub fn get_categorized_image_by_uri(&self, uri: &str) -> AppResult<Option<CategorizedImage>> {
        let conn = self.connection()?;

        let result = conn.query_row(
            "SELECT * FROM categorized_images WHERE media_library_uri = ?1",
            params![uri],
            row_to_image,
        );

        match result {
            Ok(image) => Ok(Some(image)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    /// 获取实际使用中的分类列表（排除空分类，用于浏览索引）
    pub fn get_distinct_categories(&self) -> AppResult<Vec<String>> {
        let conn = self.connection()?;

        let mut stmt = conn.prepare(
            "SELECT DISTINCT category FROM categorized_images WHERE category IS NOT NULL AND category != '' ORDER BY category",
        )?;

        let categories: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.init().unwrap();
        db
    }

    fn create_image(uri: &str, category: &str, description: &str) -> CreateCategorizedImage {
        CreateCategorizedImage {
            media_library_uri: uri.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get_by_category() {
        let db = open_db();

        let id = db
            .insert_categorized_image(&create_image("file://a.png", "Sunsets", "nice"))
            .unwrap();
        assert!(id > 0);

        let images = db.get_images_by_category("Sunsets").unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].uri, "file://a.png");
        assert_eq!(images[0].description, "nice");
    }

    #[test]
    fn test_insert_duplicate_uri_fails() {
        let db = open_db();

        db.insert_categorized_image(&create_image("file://a.png", "Sunsets", "nice"))
            .unwrap();
        let err = db
            .insert_categorized_image(&create_image("file://a.png", "Pets", ""))
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));

        // 失败的插入不产生新行
        let images = db.get_images_by_category("Sunsets").unwrap();
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_get_images_by_unknown_category_is_empty() {
        let db = open_db();

        let images = db.get_images_by_category("NoSuchCategory").unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_saved_at_is_assigned_on_insert() {
        let db = open_db();

        db.insert_categorized_image(&create_image("ph://XYZ", "旅行", ""))
            .unwrap();

        let image = db.get_categorized_image_by_uri("ph://XYZ").unwrap().unwrap();
        assert!(image.saved_at > 0);
        assert_eq!(image.category, "旅行");
        assert_eq!(image.description, "");

        assert!(db.get_categorized_image_by_uri("ph://none").unwrap().is_none());
    }

    #[test]
    fn test_distinct_categories_excludes_empty() {
        let db = open_db();

        db.insert_categorized_image(&create_image("file://a.png", "Sunsets", ""))
            .unwrap();
        db.insert_categorized_image(&create_image("file://b.png", "Pets", ""))
            .unwrap();
        db.insert_categorized_image(&create_image("file://c.png", "Sunsets", "again"))
            .unwrap();
        db.insert_categorized_image(&create_image("file://d.png", "", ""))
            .unwrap();

        let categories = db.get_distinct_categories().unwrap();
        assert_eq!(categories, vec!["Pets", "Sunsets"]);
    }
}
