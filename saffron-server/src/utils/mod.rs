//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - 日志、校验等工具

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
