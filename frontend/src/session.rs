//! 会话存储模块
//!
//! 管理当前登录用户，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use std::sync::Arc;

use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use medchain_shared::{
    AuthClient, AuthError, AuthErrorKind, AuthResult, Credentials, LoginGate, Role, Session, User,
};

/// 注入到会话存储中的认证客户端
pub type SharedAuthClient = Arc<dyn AuthClient + Send + Sync>;

/// 会话存储
///
/// 包含会话信号与认证客户端，通过 Context 在组件间共享。
/// 每次状态变化都是一次完整的信号写入，订阅者不会看到半更新的会话。
#[derive(Clone, Copy)]
pub struct SessionStore {
    /// 当前会话
    session: RwSignal<Session>,
    /// 登录串行化状态
    gate: RwSignal<LoginGate>,
    /// 最近一次登录失败的消息
    last_error: RwSignal<Option<String>>,
    client: StoredValue<SharedAuthClient>,
}

impl SessionStore {
    /// 创建空会话的存储
    pub fn new(client: SharedAuthClient) -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            gate: RwSignal::new(LoginGate::default()),
            last_error: RwSignal::new(None),
            client: StoredValue::new(client),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_authenticated))
    }

    /// 当前用户角色信号（用于路由服务注入）
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let session = self.session;
        Signal::derive(move || session.with(Session::role))
    }

    pub fn user(&self) -> Signal<Option<User>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.user().cloned()))
    }

    /// 是否有登录请求在进行中
    pub fn pending(&self) -> Signal<bool> {
        let gate = self.gate;
        Signal::derive(move || gate.with(LoginGate::is_pending))
    }

    pub fn last_error(&self) -> ReadSignal<Option<String>> {
        self.last_error.read_only()
    }

    /// 登录
    ///
    /// 成功后会话一次性切换为已认证；失败时记录日志并把错误返回给调用方。
    pub async fn login(&self, credentials: Credentials) -> AuthResult<()> {
        let ticket = match self.gate.try_update(LoginGate::begin) {
            Some(ticket) => ticket?,
            None => return Err(AuthError::cancelled()),
        };
        self.last_error.set(None);

        let client = self.client.get_value();
        let result = client.login(&credentials).await;

        // 期间发生过注销：丢弃结果，不触碰任何状态
        if let Some(Err(e)) = self.gate.try_update(|gate| gate.finish(ticket)) {
            warn!("[Session] Discarding login result for {}: {}", credentials.email, e);
            return Err(e);
        }

        match result {
            Ok(session) => {
                log!(
                    "[Session] Logged in as {} ({})",
                    credentials.email,
                    session.role().map(|r| r.as_str()).unwrap_or("unknown")
                );
                self.session.set(session);
                Ok(())
            }
            Err(e) => {
                error!("[Session] Login failed: {}", e);
                if e.kind != AuthErrorKind::Cancelled {
                    self.last_error.set(Some(e.message().to_string()));
                }
                Err(e)
            }
        }
    }

    /// 注销并清除状态
    ///
    /// 导航将由路由服务的认证状态监听自动处理。
    pub fn logout(&self) {
        self.gate.update(LoginGate::cancel);
        self.session.set(Session::default());
        self.last_error.set(None);
        log!("[Session] Logged out");
    }
}

/// 从 Context 获取会话存储
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use medchain_shared::MockAuthClient;
    use tokio::sync::Notify;

    /// 在收到放行通知之前一直挂起的客户端
    struct HeldClient {
        release: Arc<Notify>,
    }

    #[async_trait(?Send)]
    impl AuthClient for HeldClient {
        async fn login(&self, credentials: &Credentials) -> AuthResult<Session> {
            self.release.notified().await;
            MockAuthClient::default().login(credentials).await
        }
    }

    struct RejectingClient;

    #[async_trait(?Send)]
    impl AuthClient for RejectingClient {
        async fn login(&self, _credentials: &Credentials) -> AuthResult<Session> {
            Err(AuthError::invalid_credentials("Wrong password"))
        }
    }

    fn doctor() -> Credentials {
        Credentials::new("doc@example.com", "pw", Role::Doctor)
    }

    fn held_store() -> (SessionStore, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        let store = SessionStore::new(Arc::new(HeldClient {
            release: release.clone(),
        }));
        (store, release)
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let owner = Owner::new();
        owner.set();

        let store = SessionStore::new(Arc::new(MockAuthClient::default()));
        assert!(!store.is_authenticated_signal().get_untracked());

        store.login(doctor()).await.unwrap();
        let session = store.session.get_untracked();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "doc@example.com");
        assert!(session.token().is_some());
        assert_eq!(store.role_signal().get_untracked(), Some(Role::Doctor));
        assert!(!store.pending().get_untracked());

        store.logout();
        assert_eq!(store.session.get_untracked(), Session::default());
        assert_eq!(store.user().get_untracked(), None);
        assert_eq!(store.role_signal().get_untracked(), None);
    }

    #[tokio::test]
    async fn test_second_login_while_pending_is_busy() {
        let owner = Owner::new();
        owner.set();
        let (store, release) = held_store();

        let (first, ()) = tokio::join!(store.login(doctor()), async {
            tokio::task::yield_now().await;
            assert!(store.pending().get_untracked());

            let second = store.login(doctor()).await.unwrap_err();
            assert_eq!(second.kind, AuthErrorKind::Busy);
            // 被拒绝的请求不算失败消息
            assert_eq!(store.last_error().get_untracked(), None);

            release.notify_one();
        });

        first.unwrap();
        assert!(store.is_authenticated_signal().get_untracked());
        assert!(!store.pending().get_untracked());
    }

    #[tokio::test]
    async fn test_logout_discards_late_login() {
        let owner = Owner::new();
        owner.set();
        let (store, release) = held_store();

        let (late, ()) = tokio::join!(store.login(doctor()), async {
            tokio::task::yield_now().await;
            assert!(store.pending().get_untracked());
            store.logout();
            release.notify_one();
        });

        let err = late.unwrap_err();
        assert_eq!(err.kind, AuthErrorKind::Cancelled);
        assert!(!store.is_authenticated_signal().get_untracked());
        assert_eq!(store.session.get_untracked(), Session::default());
        assert!(!store.pending().get_untracked());
        assert_eq!(store.last_error().get_untracked(), None);

        // 注销后可以重新登录
        release.notify_one();
        store.login(doctor()).await.unwrap();
        assert!(store.is_authenticated_signal().get_untracked());
    }

    #[tokio::test]
    async fn test_rejected_login_records_message() {
        let owner = Owner::new();
        owner.set();

        let store = SessionStore::new(Arc::new(RejectingClient));
        let err = store.login(doctor()).await.unwrap_err();
        assert_eq!(err.kind, AuthErrorKind::InvalidCredentials);
        assert_eq!(
            store.last_error().get_untracked().as_deref(),
            Some("Wrong password")
        );
        assert!(!store.is_authenticated_signal().get_untracked());
        assert!(!store.pending().get_untracked());

        // 下一次尝试开始时清除旧消息
        let store_ok = SessionStore::new(Arc::new(MockAuthClient::default()));
        store_ok.last_error.set(Some("stale".to_string()));
        store_ok.login(doctor()).await.unwrap();
        assert_eq!(store_ok.last_error().get_untracked(), None);
    }
}
