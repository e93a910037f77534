//! PhotoMark 数据模型模块
//!
//! 包含所有数据结构定义

pub mod category;
pub mod image;

// 重新导出常用类型
pub use category::Category;
pub use image::{CategorizedImage, CategoryImage, CreateCategorizedImage};
