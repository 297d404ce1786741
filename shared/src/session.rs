//! 会话模型
//!
//! `Session` 保证 "已认证 ⇔ 用户与令牌同时存在"：
//! 内部只保存一个 `Option<(User, AuthToken)>`，认证标志由它推导，
//! 因此不存在只更新了一半的会话。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AuthError, AuthResult};
use crate::user::{Role, User};

// =========================================================
// 令牌 (AuthToken)
// =========================================================

/// 不透明的会话令牌
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// 令牌不进日志
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

// =========================================================
// 会话 (Session)
// =========================================================

/// 当前会话
///
/// 只能通过 [`Session::default`]（空会话）和 [`Session::established`]
/// （完整会话）构造；序列化形式保留 `user` / `token` / `authenticated` 三个字段。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SessionFields", into = "SessionFields")]
pub struct Session {
    inner: Option<(User, AuthToken)>,
}

impl Session {
    /// 创建已认证会话（用户与令牌一起设置）
    pub fn established(user: User, token: AuthToken) -> Self {
        Self {
            inner: Some((user, token)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.inner.as_ref().map(|(user, _)| user)
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.inner.as_ref().map(|(_, token)| token)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    /// 清空会话，三个字段同时复位
    pub fn clear(&mut self) {
        self.inner = None;
    }
}

/// 会话的线上形式
#[derive(Serialize, Deserialize)]
struct SessionFields {
    user: Option<User>,
    token: Option<AuthToken>,
    authenticated: bool,
}

/// 反序列化时发现的字段不一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistentSession;

impl fmt::Display for InconsistentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("authenticated flag must match presence of both user and token")
    }
}

impl std::error::Error for InconsistentSession {}

impl TryFrom<SessionFields> for Session {
    type Error = InconsistentSession;

    fn try_from(fields: SessionFields) -> Result<Self, Self::Error> {
        match (fields.user, fields.token, fields.authenticated) {
            (Some(user), Some(token), true) => Ok(Session::established(user, token)),
            (None, None, false) => Ok(Session::default()),
            _ => Err(InconsistentSession),
        }
    }
}

impl From<Session> for SessionFields {
    fn from(session: Session) -> Self {
        match session.inner {
            Some((user, token)) => SessionFields {
                user: Some(user),
                token: Some(token),
                authenticated: true,
            },
            None => SessionFields {
                user: None,
                token: None,
                authenticated: false,
            },
        }
    }
}

// =========================================================
// 登录闸门 (LoginGate)
// =========================================================

/// 串行化登录与注销
///
/// 同一时刻只允许一个登录请求；注销会使进行中的登录作废，
/// 晚到的登录结果不能覆盖注销。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginGate {
    generation: u64,
    pending: bool,
}

/// 一次登录请求的凭证，完成时交回闸门
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginTicket {
    generation: u64,
}

impl LoginGate {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// 开始登录；已有请求在进行中时返回 `Busy`
    pub fn begin(&mut self) -> AuthResult<LoginTicket> {
        if self.pending {
            return Err(AuthError::busy());
        }
        self.pending = true;
        Ok(LoginTicket {
            generation: self.generation,
        })
    }

    /// 登录请求返回；期间发生过注销则返回 `Cancelled`，结果应丢弃
    pub fn finish(&mut self, ticket: LoginTicket) -> AuthResult<()> {
        if ticket.generation != self.generation {
            return Err(AuthError::cancelled());
        }
        self.pending = false;
        Ok(())
    }

    /// 注销：作废所有进行中的登录
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AuthErrorKind;

    use super::*;

    fn sample_user() -> User {
        User {
            id: "1".to_string(),
            email: "doc@example.com".to_string(),
            name: "John Doe".to_string(),
            role: Role::Doctor,
            profile_image: None,
        }
    }

    #[test]
    fn test_default_session_is_empty() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(session.role().is_none());
    }

    #[test]
    fn test_established_session_sets_all_fields() {
        let session = Session::established(sample_user(), AuthToken::new("t"));
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "doc@example.com");
        assert_eq!(session.token().unwrap().as_str(), "t");
        assert_eq!(session.role(), Some(Role::Doctor));
    }

    #[test]
    fn test_clear_resets_to_initial_state() {
        let mut session = Session::established(sample_user(), AuthToken::new("t"));
        session.clear();
        assert_eq!(session, Session::default());

        // 对空会话再清一次也保持初始状态
        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_serialized_form_has_three_fields() {
        let json = serde_json::to_value(Session::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "user": null, "token": null, "authenticated": false })
        );

        let json =
            serde_json::to_value(Session::established(sample_user(), AuthToken::new("t"))).unwrap();
        assert_eq!(json["authenticated"], true);
        assert_eq!(json["token"], "t");
        assert_eq!(json["user"]["role"], "doctor");
    }

    #[test]
    fn test_deserialize_rejects_partial_session() {
        let partial = serde_json::json!({ "user": null, "token": "t", "authenticated": true });
        assert!(serde_json::from_value::<Session>(partial).is_err());

        let flag_only = serde_json::json!({ "user": null, "token": null, "authenticated": true });
        assert!(serde_json::from_value::<Session>(flag_only).is_err());
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("secret-value");
        assert_eq!(format!("{:?}", token), "AuthToken(***)");
    }

    #[test]
    fn test_gate_rejects_concurrent_login() {
        let mut gate = LoginGate::default();
        let ticket = gate.begin().unwrap();
        assert!(gate.is_pending());
        assert_eq!(gate.begin().unwrap_err().kind, AuthErrorKind::Busy);

        gate.finish(ticket).unwrap();
        assert!(!gate.is_pending());
        assert!(gate.begin().is_ok());
    }

    #[test]
    fn test_logout_cancels_pending_login() {
        let mut gate = LoginGate::default();
        let ticket = gate.begin().unwrap();
        gate.cancel();
        assert!(!gate.is_pending());
        assert_eq!(gate.finish(ticket).unwrap_err().kind, AuthErrorKind::Cancelled);

        // 注销后的新登录不受旧凭证影响
        let fresh = gate.begin().unwrap();
        assert_eq!(gate.finish(ticket).unwrap_err().kind, AuthErrorKind::Cancelled);
        assert!(gate.is_pending());
        assert!(gate.finish(fresh).is_ok());
    }
}
