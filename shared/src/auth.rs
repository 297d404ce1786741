//! 认证边界
//!
//! 会话存储只依赖 [`AuthClient`]，不知道背后是模拟实现还是真正的网络请求。
//! 目前唯一的实现是 [`MockAuthClient`]：不校验凭据，按固定规则构造用户。

use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::config::{DashboardConfig, RoleAssignment};
use crate::error::AuthResult;
use crate::session::{AuthToken, Session};
use crate::user::{Role, User};

const MOCK_USER_ID: &str = "1";
const MOCK_TOKEN_PREFIX: &str = "mock-jwt-";

/// 登录表单提交的凭据
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// 登录页选中的角色标签
    pub requested_role: Role,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>, requested_role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            requested_role,
        }
    }

    /// 两个字段都已填写
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .field("requested_role", &self.requested_role)
            .finish()
    }
}

/// 认证客户端抽象
///
/// 成功时返回一个完整建立的会话；失败时返回带种类的 [`crate::AuthError`]。
#[async_trait(?Send)]
pub trait AuthClient {
    async fn login(&self, credentials: &Credentials) -> AuthResult<Session>;
}

// =========================================================
// 实现层: 模拟客户端
// =========================================================

/// 模拟认证客户端
///
/// 任意凭据都会成功。用户的 id、姓名和头像是固定占位值，邮箱取自凭据；
/// 角色由 [`RoleAssignment`] 决定，默认总是医生。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockAuthClient {
    display_name: String,
    profile_image: Option<String>,
    role_assignment: RoleAssignment,
}

impl MockAuthClient {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            display_name: config.mock_name.clone(),
            profile_image: config.mock_avatar.clone(),
            role_assignment: config.role_assignment,
        }
    }

    fn assign_role(&self, credentials: &Credentials) -> Role {
        match self.role_assignment {
            RoleAssignment::FixedDoctor => Role::Doctor,
            RoleAssignment::Requested => credentials.requested_role,
        }
    }

    fn issue_token() -> AuthToken {
        AuthToken::new(format!("{}{}", MOCK_TOKEN_PREFIX, Uuid::new_v4().simple()))
    }
}

impl Default for MockAuthClient {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

#[async_trait(?Send)]
impl AuthClient for MockAuthClient {
    async fn login(&self, credentials: &Credentials) -> AuthResult<Session> {
        let user = User {
            id: MOCK_USER_ID.to_string(),
            email: credentials.email.clone(),
            name: self.display_name.clone(),
            role: self.assign_role(credentials),
            profile_image: self.profile_image.clone(),
        };
        Ok(Session::established(user, Self::issue_token()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::AppRoute;

    #[tokio::test]
    async fn test_login_establishes_session_with_given_email() {
        let client = MockAuthClient::default();
        for email in ["doc@example.com", "a@b.c", "  spaced@example.com "] {
            let creds = Credentials::new(email, "pw", Role::Doctor);
            let session = client.login(&creds).await.unwrap();
            assert!(session.is_authenticated());
            assert_eq!(session.user().unwrap().email, email);
            assert!(session.token().is_some());
        }
    }

    #[tokio::test]
    async fn test_mock_user_placeholders() {
        let client = MockAuthClient::default();
        let session = client
            .login(&Credentials::new("doc@example.com", "pw", Role::Doctor))
            .await
            .unwrap();
        let user = session.user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "John Doe");
        assert_eq!(
            user.profile_image.as_deref(),
            Some(crate::config::DEFAULT_MOCK_AVATAR)
        );
        assert!(session.token().unwrap().as_str().starts_with("mock-jwt-"));
    }

    #[tokio::test]
    async fn test_doctor_tab_lands_on_doctor_dashboard() {
        let client = MockAuthClient::default();
        let session = client
            .login(&Credentials::new("doc@example.com", "secret", Role::Doctor))
            .await
            .unwrap();
        assert_eq!(session.user().unwrap().email, "doc@example.com");
        assert_eq!(session.role(), Some(Role::Doctor));
        assert_eq!(
            AppRoute::DoctorDashboard.guard(session.is_authenticated(), session.role()),
            crate::route::GuardOutcome::Render(AppRoute::DoctorDashboard)
        );
    }

    #[tokio::test]
    async fn test_patient_tab_still_assigns_doctor_by_default() {
        let client = MockAuthClient::default();
        let session = client
            .login(&Credentials::new("pat@example.com", "pw", Role::Patient))
            .await
            .unwrap();
        assert_eq!(session.role(), Some(Role::Doctor));
    }

    #[tokio::test]
    async fn test_requested_assignment_honours_tab() {
        let config = DashboardConfig {
            role_assignment: RoleAssignment::Requested,
            ..DashboardConfig::default()
        };
        let client = MockAuthClient::from_config(&config);
        let session = client
            .login(&Credentials::new("pat@example.com", "pw", Role::Patient))
            .await
            .unwrap();
        assert_eq!(session.role(), Some(Role::Patient));
    }

    #[tokio::test]
    async fn test_tokens_are_unique_per_login() {
        let client = MockAuthClient::default();
        let creds = Credentials::new("doc@example.com", "pw", Role::Doctor);
        let a = client.login(&creds).await.unwrap();
        let b = client.login(&creds).await.unwrap();
        assert_ne!(a.token(), b.token());
    }

    #[test]
    fn test_credentials_completeness_and_debug() {
        assert!(Credentials::new("a@b.c", "pw", Role::Doctor).is_complete());
        assert!(!Credentials::new("  ", "pw", Role::Doctor).is_complete());
        assert!(!Credentials::new("a@b.c", "", Role::Patient).is_complete());

        let debug = format!("{:?}", Credentials::new("a@b.c", "hunter2", Role::Doctor));
        assert!(!debug.contains("hunter2"));
    }
}
