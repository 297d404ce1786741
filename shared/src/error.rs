use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 错误状态枚举
// =========================================================

/// 登录失败的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthErrorKind {
    /// 凭据无效
    InvalidCredentials,
    /// 无法连接认证服务
    NetworkUnreachable,
    /// 认证服务返回错误
    Server,
    /// 已有登录请求在进行中
    Busy,
    /// 登录完成前会话已被注销，结果被丢弃
    Cancelled,
}

impl AuthErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthErrorKind::NetworkUnreachable => "NETWORK_UNREACHABLE",
            AuthErrorKind::Server => "SERVER_ERROR",
            AuthErrorKind::Busy => "LOGIN_IN_PROGRESS",
            AuthErrorKind::Cancelled => "LOGIN_CANCELLED",
        }
    }

    /// 是否值得稍后重试
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AuthErrorKind::NetworkUnreachable | AuthErrorKind::Server
        )
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 登录失败
///
/// - kind: 失败种类
/// - message: 面向用户的消息
/// - source: 原始错误（可选，用于错误链）
#[derive(Debug)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    // --- Convenience constructors ---

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::InvalidCredentials, message)
    }

    pub fn network_unreachable(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::NetworkUnreachable, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Server, message)
    }

    pub fn busy() -> Self {
        Self::new(AuthErrorKind::Busy, "a login request is already in progress")
    }

    pub fn cancelled() -> Self {
        Self::new(AuthErrorKind::Cancelled, "login was cancelled by logout")
    }

    /// 设置原始错误源
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = AuthError::invalid_credentials("wrong password");
        assert_eq!(err.to_string(), "[INVALID_CREDENTIALS] wrong password");
        assert_eq!(
            AuthError::busy().to_string(),
            "[LOGIN_IN_PROGRESS] a login request is already in progress"
        );
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(AuthError::network_unreachable("offline").is_retryable());
        assert!(AuthError::server("502").is_retryable());
        assert!(!AuthError::invalid_credentials("nope").is_retryable());
        assert!(!AuthError::busy().is_retryable());
        assert!(!AuthError::cancelled().is_retryable());
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AuthError::network_unreachable("cannot reach auth service").with_source(io);
        assert_eq!(err.source().unwrap().to_string(), "refused");
        assert!(AuthError::server("x").source().is_none());
    }
}
