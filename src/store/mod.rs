//! PhotoMark 存储模块
//!
//! 面向前端的异步目录存储接口

pub mod catalog;

pub use catalog::CatalogStore;
