//! 异步目录存储
//!
//! 面向 UI 层的公开接口。每个操作把底层 SQL 语句提交到 tokio
//! 阻塞线程池执行，调用方在语句完成前挂起；操作之间不提供顺序
//! 保证，唯一性竞争由数据库约束裁决（恰好一个成功，其余返回
//! Duplicate 错误）。

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task;

use crate::db::{CatalogStats, Database};
use crate::models::{Category, CategoryImage, CreateCategorizedImage};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validate::require_trimmed;

/// 本地目录存储
///
/// 进程启动时构造一次，注入给各个界面使用，避免全局可变句柄
#[derive(Clone)]
pub struct CatalogStore {
    db: Arc<Database>,
}

impl CatalogStore {
    /// 基于已打开的数据库构造存储
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 打开数据库并确保 Schema 就绪
    pub async fn open(path: PathBuf) -> AppResult<Self> {
        let db = task::spawn_blocking(move || -> AppResult<Database> {
            let db = Database::open(path)?;
            db.init()?;
            Ok(db)
        })
        .await
        .map_err(join_error)??;

        Ok(Self { db: Arc::new(db) })
    }

    /// 确保 Schema 存在（幂等，可在每次启动时调用）
    pub async fn initialize(&self) -> AppResult<()> {
        self.run(|db| db.init()).await
    }

    /// 插入已分类图片记录，返回新行 ID
    ///
    /// uri 与分类名去除首尾空白后不能为空；描述可为空字符串
    pub async fn insert_categorized_image(
        &self,
        uri: &str,
        category: &str,
        description: &str,
    ) -> AppResult<i64> {
        let image = CreateCategorizedImage {
            media_library_uri: require_trimmed("媒体库 URI", uri)?.to_string(),
            category: require_trimmed("分类名称", category)?.to_string(),
            description: description.to_string(),
        };

        self.run(move |db| db.insert_categorized_image(&image)).await
    }

    /// 获取指定分类下的所有图片
    pub async fn get_images_by_category(&self, category: &str) -> AppResult<Vec<CategoryImage>> {
        let category = category.to_string();
        self.run(move |db| db.get_images_by_category(&category)).await
    }

    /// 创建分类，返回新行 ID
    pub async fn insert_category(&self, name: &str) -> AppResult<i64> {
        let name = require_trimmed("分类名称", name)?.to_string();
        self.run(move |db| db.insert_category(&name)).await
    }

    /// 获取所有分类（按名称升序）
    pub async fn get_all_categories(&self) -> AppResult<Vec<Category>> {
        self.run(|db| db.get_all_categories()).await
    }

    /// 重命名分类
    pub async fn update_category(&self, id: i64, new_name: &str) -> AppResult<()> {
        let new_name = require_trimmed("分类名称", new_name)?.to_string();
        self.run(move |db| db.update_category(id, &new_name)).await
    }

    /// 删除分类
    ///
    /// 删除不存在的 ID 视为成功；已打标图片保留原分类文本
    pub async fn delete_category(&self, id: i64) -> AppResult<bool> {
        self.run(move |db| db.delete_category(id)).await
    }

    /// 获取实际使用中的分类集合（排除空分类）
    pub async fn get_distinct_categories_from_images(&self) -> AppResult<Vec<String>> {
        self.run(|db| db.get_distinct_categories()).await
    }

    /// 获取目录统计信息
    pub async fn stats(&self) -> AppResult<CatalogStats> {
        self.run(|db| db.stats()).await
    }

    /// 在阻塞线程池上执行一条数据库操作
    async fn run<T, F>(&self, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || f(&db)).await.map_err(join_error)?
    }
}

fn join_error(err: task::JoinError) -> AppError {
    AppError::General(format!("后台任务执行失败: {}", err))
}
