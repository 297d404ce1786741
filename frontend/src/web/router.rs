//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 守卫 -> 处理 -> 加载"的导航流程，守卫判定本身由
//! `AppRoute::guard` 完成。

use leptos::logging::log;
use leptos::prelude::*;
use medchain_shared::{AppRoute, GuardOutcome, Role};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 一次导航如何写入浏览器历史
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryUpdate {
    Push,
    Replace,
    Keep,
}

/// 守卫重定向总是替换当前记录，后退时不会回到被拒绝的地址；
/// 只有用户主动跳转且通过守卫时才新增记录。
fn history_update(outcome: GuardOutcome, user_initiated: bool) -> HistoryUpdate {
    match outcome {
        GuardOutcome::Redirect(_) => HistoryUpdate::Replace,
        GuardOutcome::Render(_) if user_initiated => HistoryUpdate::Push,
        GuardOutcome::Render(_) => HistoryUpdate::Keep,
    }
}

fn write_history(outcome: GuardOutcome, user_initiated: bool) {
    let path = outcome.route().to_path();
    match history_update(outcome, user_initiated) {
        HistoryUpdate::Push => push_history_state(path),
        HistoryUpdate::Replace => replace_history_state(path),
        HistoryUpdate::Keep => {}
    }
}

fn log_redirect(requested: AppRoute, outcome: GuardOutcome) {
    if let GuardOutcome::Redirect(target) = outcome {
        log!("[Router] {} is not available here. Redirecting to {}.", requested, target);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证信号实现与会话存储的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
    /// 当前用户角色（决定登录页的去向）
    role: Signal<Option<Role>>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 初始路由同样经过守卫，例如直接打开 `/` 会被替换为 `/login`。
    fn new(is_authenticated: Signal<bool>, role: Signal<Option<Role>>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let outcome = requested.guard(is_authenticated.get_untracked(), role.get_untracked());
        log_redirect(requested, outcome);
        write_history(outcome, false);
        let (current_route, set_route) = signal(outcome.route());

        Self {
            current_route,
            set_route,
            is_authenticated,
            role,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate_to(&self, target: AppRoute) {
        let outcome = target.guard(
            self.is_authenticated.get_untracked(),
            self.role.get_untracked(),
        );
        log_redirect(target, outcome);

        write_history(outcome, true);
        self.set_route.set(outcome.route());
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let role = self.role;

        let closure = Closure::<dyn Fn()>::new(move || {
            let requested = AppRoute::from_path(&current_path());

            // popstate 时也执行守卫逻辑
            let outcome = requested.guard(is_authenticated.get_untracked(), role.get_untracked());
            log_redirect(requested, outcome);
            write_history(outcome, false);
            set_route.set(outcome.route());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时重新执行守卫
    ///
    /// 注销时离开受保护页面；在登录页完成登录时前往角色首页。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let role = self.role;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            let outcome = route.guard(is_auth, role.get_untracked());
            if outcome.is_redirect() {
                log!(
                    "[Router] Auth state changed (authenticated: {}), redirecting to {}.",
                    is_auth,
                    outcome.route()
                );
                write_history(outcome, false);
                set_route.set(outcome.route());
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, role: Signal<Option<Role>>) -> RouterService {
    let router = RouterService::new(is_authenticated, role);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 用户角色信号
    role: Signal<Option<Role>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(is_authenticated, role);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接
///
/// 拦截点击，交给路由服务处理，不触发整页刷新。
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(into, optional)] class: MaybeProp<String>,
    /// 导航后回调（如关闭移动端侧边栏）
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
        if let Some(callback) = on_navigate {
            callback.run(());
        }
    };

    view! {
        <a href=to.to_path() class=move || class.get().unwrap_or_default() on:click=on_click>
            {children()}
        </a>
    }
}
