//! Heron Admin Server - RBAC 管理后台
//!
//! # 架构概述
//!
//! 本模块是 Admin Server 的主入口，提供以下核心功能：
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系、权限解析与授权判定
//! - **数据库** (`db`): SQLite (sqlx) 存储、仓库层、种子数据
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、服务器生命周期
//! ├── auth/          # JWT 认证、凭证校验、授权门
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装与中间件栈
//! ├── utils/         # 错误、日志、校验
//! └── db/            # 数据库层与种子数据
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    __
   / /_  ___  _________  ____
  / __ \/ _ \/ ___/ __ \/ __ \
 / / / /  __/ /  / /_/ / / / /
/_/ /_/\___/_/   \____/_/ /_/
"#
    );
}

/// 设置环境 (dotenv, 工作目录, 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json_logs = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);
    let log_dir = std::env::var("LOG_DIR").ok();

    init_logger_with_file(&log_level, json_logs, log_dir.as_deref())?;
    Ok(())
}
