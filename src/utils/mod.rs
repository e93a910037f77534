//! PhotoMark 工具模块
//!
//! 包含通用工具函数

pub mod error;
pub mod validate;

pub use error::*;
pub use validate::*;
