//! 数据库 Schema 定义
//!
//! 所有建表语句均为幂等的 IF NOT EXISTS，可在每次启动时重复执行

/// 初始化 Schema SQL
pub const INIT_SCHEMA: &str = r#"
-- 分类表
CREATE TABLE IF NOT EXISTS categories (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT UNIQUE
);

-- 已分类图片表
CREATE TABLE IF NOT EXISTS categorized_images (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    media_library_uri   TEXT UNIQUE,
    category            TEXT,
    description         TEXT,
    saved_at            INTEGER
);

-- 索引
CREATE INDEX IF NOT EXISTS idx_categories_name ON categories(name);
CREATE INDEX IF NOT EXISTS idx_categorized_images_category ON categorized_images(category);
"#;
