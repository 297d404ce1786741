//! MedChain 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `session` / `theme`: 状态存储（通过 Context 共享）
//! - `web::router`: 路由服务（核心引擎），守卫判定来自 `medchain_shared::route`
//! - `components`: UI 组件层

mod components {
    pub mod doctor_dashboard;
    mod icons;
    pub mod layout;
    mod line_chart;
    pub mod login;
    pub mod patient_dashboard;
    pub mod placeholder;
}
mod session;
mod theme;

use std::sync::Arc;

use crate::components::doctor_dashboard::DoctorDashboard;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::patient_dashboard::PatientDashboard;
use crate::components::placeholder::{NotFound, SectionPlaceholder};
use crate::session::SessionStore;
use crate::theme::ThemeStore;

use leptos::logging::log;
use leptos::prelude::*;
use medchain_shared::{AppRoute, DashboardConfig, MockAuthClient, ThemeState};

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 leptos_router 与 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod document;
    pub mod router;

    pub use document::DocumentRoot;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。受保护的页面都包在视图外壳里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        // 根路径由守卫重定向，这里只是兜底
        AppRoute::Root | AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::DoctorDashboard => view! {
            <Layout>
                <DoctorDashboard />
            </Layout>
        }
        .into_any(),
        AppRoute::PatientDashboard => view! {
            <Layout>
                <PatientDashboard />
            </Layout>
        }
        .into_any(),
        AppRoute::Section(section) => view! {
            <Layout>
                <SectionPlaceholder section=section />
            </Layout>
        }
        .into_any(),
        AppRoute::NotFound => view! { <NotFound /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取构建期配置
    let config = DashboardConfig::from_build_env();
    log!(
        "[App] {} starting (role assignment: {:?})",
        config.brand_name,
        config.role_assignment
    );

    // 2. 创建会话与主题存储
    let session = SessionStore::new(Arc::new(MockAuthClient::from_config(&config)));
    let theme = ThemeStore::new(ThemeState::new(config.dark_mode));
    theme.sync_document();

    provide_context(session);
    provide_context(theme);
    provide_context(config);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = session.is_authenticated_signal();
    let role = session.role_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated role=role>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
