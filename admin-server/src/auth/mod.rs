//! 认证授权模块
//!
//! 提供 JWT 认证、权限解析和中间件：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文 (已解析的 principal)
//! - [`gate`] - 纯函数授权判定 (allow/deny)
//! - [`require_auth`] / [`require_permission`] - Axum 中间件

pub mod credentials;
pub mod gate;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod permissions;

pub use credentials::{AuthenticatedUser, authenticate};
pub use gate::{AuthzError, authorize, require};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{CurrentUserExt, require_auth, require_permission};
