//! 数据库连接管理
//!
//! 提供 SQLite 数据库连接和初始化功能

use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::utils::error::{AppError, AppResult};

use super::schema::INIT_SCHEMA;

/// 数据库连接管理器
///
/// 进程内唯一的共享资源，所有操作复用同一个连接；
/// 语句级别的串行化由 SQLite 自身保证
#[derive(Clone)]
pub struct Database {
    /// 数据库连接（使用 Arc<Mutex> 实现线程安全）
    conn: Arc<Mutex<Connection>>,
    /// 数据库文件路径
    path: PathBuf,
}

impl Database {
    /// 打开或创建数据库
    pub fn open(path: PathBuf) -> AppResult<Self> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_FULL_MUTEX,
        )?;

        tracing::info!("数据库已打开: {:?}", path);

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        };

        db.configure()?;

        Ok(db)
    }

    /// 打开内存数据库（用于测试）
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: PathBuf::from(":memory:"),
        };

        db.configure()?;

        Ok(db)
    }

    /// 配置数据库连接
    fn configure(&self) -> AppResult<()> {
        let conn = self.connection()?;

        // 启用 WAL 模式（提高并发性能）
        conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
            "#,
        )?;

        Ok(())
    }

    /// 初始化数据库 Schema
    ///
    /// 建表语句均为 IF NOT EXISTS，重复调用不会出错也不会产生重复表
    pub fn init(&self) -> AppResult<()> {
        let conn = self.connection()?;

        conn.execute_batch(INIT_SCHEMA)?;

        tracing::info!("数据库 Schema 就绪");

        Ok(())
    }

    /// 获取数据库连接（用于执行查询）
    pub fn connection(&self) -> AppResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            AppError::Database(rusqlite::Error::InvalidParameterName(e.to_string()))
        })
    }

    /// 获取数据库文件路径
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// 获取数据库统计信息
    pub fn stats(&self) -> AppResult<CatalogStats> {
        let conn = self.connection()?;

        let category_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .unwrap_or(0);

        let image_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM categorized_images", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        let db_size = std::fs::metadata(&self.path)
            .map(|m| m.len() as i64)
            .unwrap_or(0);

        Ok(CatalogStats {
            category_count,
            image_count,
            db_size,
        })
    }
}

/// 数据库统计信息
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub category_count: i64,
    pub image_count: i64,
    pub db_size: i64,
}

/// 获取默认数据库路径
///
/// Windows: %APPDATA%/PhotoMark/photomark.db
/// macOS: ~/Library/Application Support/PhotoMark/photomark.db
/// Linux: ~/.local/share/PhotoMark/photomark.db
pub fn default_db_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("PhotoMark").join("photomark.db")
}
