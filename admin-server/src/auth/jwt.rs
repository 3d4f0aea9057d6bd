//! JWT 令牌服务
//!
//! 处理 JWT 令牌的生成、验证和解析。令牌携带登录时解析好的 principal
//! （用户身份 + 角色 + 有效权限集），请求期间不再查库。

use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// JWT 密钥 (应至少 32 字节)
    pub secret: String,
    /// 令牌过期时间 (分钟)
    pub expiration_minutes: i64,
    /// 令牌签发者
    pub issuer: String,
    /// 令牌受众
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = match load_jwt_secret() {
            Ok(secret) => secret,
            Err(e) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("JWT configuration error: {}, using generated dev key", e);
                    generate_dev_jwt_secret()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("FATAL: JWT_SECRET configuration failed: {}", e);
                }
            }
        };

        Self {
            secret,
            expiration_minutes: 8 * 60,
            issuer: "heron-admin".to_string(),
            audience: "heron-clients".to_string(),
        }
    }
}

/// JWT 错误类型
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("JWT configuration error: {0}")]
    ConfigError(String),
}

/// 生成开发环境临时密钥 (base64 编码的 48 随机字节)
fn generate_dev_jwt_secret() -> String {
    let mut bytes = [0u8; 48];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// 从环境变量安全地加载 JWT 密钥
fn load_jwt_secret() -> Result<String, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) => {
            if secret.len() < 32 {
                return Err(JwtError::ConfigError(
                    "JWT_SECRET must be at least 32 characters long".to_string(),
                ));
            }
            Ok(secret)
        }
        Err(_) => Err(JwtError::ConfigError(
            "JWT_SECRET environment variable not set".to_string(),
        )),
    }
}

/// JWT Claims - the serialized principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 用户 ID
    pub sub: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    /// 角色 ID
    pub role_id: i64,
    /// 角色名称
    pub role: String,
    /// 逗号分隔的有效权限码
    pub permissions: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

/// JWT 令牌服务
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// 使用默认配置创建新的 JWT 服务
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    /// 使用指定配置创建新的 JWT 服务
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 为用户生成新令牌
    #[allow(clippy::too_many_arguments)]
    pub fn generate_token(
        &self,
        user_id: i64,
        email: &str,
        username: &str,
        display_name: &str,
        role_id: i64,
        role_name: &str,
        permissions: &[String],
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            role_id,
            role: role_name.to_string(),
            permissions: permissions.join(","),
            token_type: "access".to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// 验证并解码令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {e}")),
            }
        })?;

        Ok(token_data.claims)
    }

    /// 从 Authorization 头提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// 当前用户上下文 - 请求范围内的 principal
///
/// 由认证中间件从 JWT Claims 解析并注入请求扩展。
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub role_id: i64,
    pub role_name: String,
    /// 登录时解析的有效权限码
    pub permissions: Vec<String>,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidToken(format!("Invalid subject '{}'", claims.sub)))?;

        let permissions = if claims.permissions.is_empty() {
            vec![]
        } else {
            claims
                .permissions
                .split(',')
                .map(|s| s.to_string())
                .collect()
        };

        Ok(Self {
            id,
            email: claims.email,
            username: claims.username,
            display_name: claims.display_name,
            role_id: claims.role_id,
            role_name: claims.role,
            permissions,
        })
    }
}

impl CurrentUser {
    /// 检查是否拥有指定权限（哨兵权限 `admin:all` 放行一切）
    pub fn has_permission(&self, permission: &str) -> bool {
        crate::auth::gate::permits(&self.permissions, &[permission])
    }

    /// 检查是否拥有任一指定权限
    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        crate::auth::gate::permits(&self.permissions, permissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "test-secret-key-that-is-long-enough!".to_string(),
            expiration_minutes: 60,
            issuer: "heron-admin".to_string(),
            audience: "heron-clients".to_string(),
        })
    }

    #[test]
    fn generation_and_validation_roundtrip() {
        let service = test_service();
        let permissions = vec!["manage:employees".to_string(), "manage:reports".to_string()];

        let token = service
            .generate_token(42, "hr@example.com", "hr", "HR User", 2, "EMPLOYEE", &permissions)
            .expect("generate");

        let claims = service.validate_token(&token).expect("validate");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "EMPLOYEE");
        assert_eq!(claims.permissions, "manage:employees,manage:reports");

        let user = CurrentUser::try_from(claims).expect("principal");
        assert_eq!(user.id, 42);
        assert_eq!(user.role_id, 2);
        assert_eq!(user.permissions.len(), 2);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = test_service();
        let token = service
            .generate_token(1, "a@example.com", "a", "A", 1, "ADMIN", &[])
            .expect("generate");

        let other = JwtService::with_config(JwtConfig {
            secret: "another-secret-key-that-is-long-enough".to_string(),
            ..service.config.clone()
        });
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn empty_permission_claim_parses_to_empty_set() {
        let service = test_service();
        let token = service
            .generate_token(7, "x@example.com", "x", "X", 3, "AUDITOR", &[])
            .expect("generate");
        let claims = service.validate_token(&token).expect("validate");
        let user = CurrentUser::try_from(claims).expect("principal");
        assert!(user.permissions.is_empty());
    }

    #[test]
    fn bearer_header_extraction() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
