//! Saffron Server - 餐厅后台管理服务
//!
//! # 架构概述
//!
//! Back-office server for a restaurant point-of-sale: menu and order entry,
//! inventory, reservations, team/CRM administration and an upsell suggestion
//! integration. Domain data lives in an in-memory fixture store; only the
//! external connection settings are persisted (redb).
//!
//! # 模块结构
//!
//! ```text
//! saffron-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── auth/          # 角色与授权守卫
//! ├── api/           # HTTP 路由和处理器
//! ├── pricing/       # 订单金额推导
//! ├── orders/        # 订单校验
//! ├── store/         # 内存数据存储 (fixtures)
//! ├── settings/      # 连接设置持久化 (redb)
//! ├── services/      # 外部服务客户端 (upsell, geocode)
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod orders;
pub mod pricing;
pub mod services;
pub mod settings;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use auth::{AccessDecision, CurrentStaff, has_permission};
pub use core::{Config, Server, ServerState};
pub use pricing::{OrderTotals, calculate_order_totals};
pub use store::MemStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   _____        __  __
  / ___/____ _ / _|/ _|_____ ___  ____
  \__ \/ __ `/| |_| |_/ ___// _ \/ __ \
 ___/ / /_/ / |  _|  _/ /  / /_/ / / / /
/____/\__,_/  |_| |_|/_/   \____/_/ /_/
    "#
    );
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
