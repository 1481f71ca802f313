//! 授权模块
//!
//! Role 检查与路由层授权守卫。没有会话协议：调用方的角色通过
//! `x-staff-role` 请求头声明，缺省为 Basic。

pub mod extractor;
pub mod permissions;

pub use extractor::{CurrentStaff, STAFF_ROLE_HEADER, role_from_headers};
pub use permissions::{AccessDecision, authorize, has_permission};
