//! MedChain 共享领域模型
//!
//! 不依赖 DOM，可以在宿主机上直接测试：
//! - `user` / `session` / `theme`: 状态模型
//! - `route`: 路由定义与守卫判定
//! - `nav`: 按角色分派的导航能力
//! - `auth`: 认证客户端边界与模拟实现
//! - `dashboard` / `chart`: 面板数据与图表几何

pub mod auth;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod nav;
pub mod route;
pub mod session;
pub mod theme;
pub mod time;
pub mod user;

pub use auth::{AuthClient, Credentials, MockAuthClient};
pub use config::{DashboardConfig, RoleAssignment};
pub use error::{AuthError, AuthErrorKind, AuthResult};
pub use nav::{NavIcon, NavItem, NavigationProvider};
pub use route::{AppRoute, GuardOutcome, Section};
pub use session::{AuthToken, LoginGate, LoginTicket, Session};
pub use theme::ThemeState;
pub use user::{Role, User};
