//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性，以及路由守卫的判定规则。

use std::fmt::Display;

use crate::user::Role;

/// 侧边栏中的二级页面（尚未实现，只渲染占位内容）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    DoctorPatients,
    DoctorAppointments,
    DoctorRecords,
    DoctorNotifications,
    DoctorMessages,
    DoctorAnalytics,
    PatientHistory,
    PatientAppointments,
    PatientAccessControl,
    PatientPrescriptions,
    PatientMessages,
    Settings,
}

impl Section {
    pub const ALL: [Section; 12] = [
        Section::DoctorPatients,
        Section::DoctorAppointments,
        Section::DoctorRecords,
        Section::DoctorNotifications,
        Section::DoctorMessages,
        Section::DoctorAnalytics,
        Section::PatientHistory,
        Section::PatientAppointments,
        Section::PatientAccessControl,
        Section::PatientPrescriptions,
        Section::PatientMessages,
        Section::Settings,
    ];

    pub fn to_path(&self) -> &'static str {
        match self {
            Section::DoctorPatients => "/doctor/patients",
            Section::DoctorAppointments => "/doctor/appointments",
            Section::DoctorRecords => "/doctor/records",
            Section::DoctorNotifications => "/doctor/notifications",
            Section::DoctorMessages => "/doctor/messages",
            Section::DoctorAnalytics => "/doctor/analytics",
            Section::PatientHistory => "/patient/history",
            Section::PatientAppointments => "/patient/appointments",
            Section::PatientAccessControl => "/patient/access-control",
            Section::PatientPrescriptions => "/patient/prescriptions",
            Section::PatientMessages => "/patient/messages",
            Section::Settings => "/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::DoctorPatients => "Patients",
            Section::DoctorAppointments | Section::PatientAppointments => "Appointments",
            Section::DoctorRecords => "Medical Records",
            Section::DoctorNotifications => "Notifications",
            Section::DoctorMessages | Section::PatientMessages => "Messages",
            Section::DoctorAnalytics => "Analytics",
            Section::PatientHistory => "Medical History",
            Section::PatientAccessControl => "Access Control",
            Section::PatientPrescriptions => "Prescriptions",
            Section::Settings => "Settings",
        }
    }

    fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.to_path() == path)
    }
}

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 根路径，总是重定向到登录页
    Root,
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 医生面板 (需要认证)
    DoctorDashboard,
    /// 患者面板 (需要认证)
    PatientDashboard,
    /// 二级页面 (需要认证)
    Section(Section),
    /// 页面未找到
    NotFound,
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 允许渲染目标路由
    Render(AppRoute),
    /// 重定向到另一个路由
    Redirect(AppRoute),
}

impl GuardOutcome {
    /// 最终落地的路由
    pub fn route(&self) -> AppRoute {
        match self {
            GuardOutcome::Render(route) | GuardOutcome::Redirect(route) => *route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardOutcome::Redirect(_))
    }
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        // 忽略查询串、片段和末尾斜杠
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Self::Root,
            "/login" => Self::Login,
            "/doctor-dashboard" => Self::DoctorDashboard,
            "/patient-dashboard" => Self::PatientDashboard,
            other => Section::from_path(other)
                .map(Self::Section)
                .unwrap_or(Self::NotFound),
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::DoctorDashboard => "/doctor-dashboard",
            Self::PatientDashboard => "/patient-dashboard",
            Self::Section(section) => section.to_path(),
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 受保护的路由同时会被包裹在视图外壳中渲染。
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::DoctorDashboard | Self::PatientDashboard | Self::Section(_)
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    ///
    /// 角色缺失时回落到医生面板，与模拟登录分配的角色一致。
    pub fn auth_success_redirect(role: Option<Role>) -> Self {
        role.unwrap_or_default().home()
    }

    /// 路由守卫
    ///
    /// 纯函数，每次导航（包括后退/前进和认证状态变化）都会重新求值。
    /// 角色不参与受保护路由的判定，只用于决定登录页的去向。
    pub fn guard(self, authenticated: bool, role: Option<Role>) -> GuardOutcome {
        let target = match self {
            Self::Root => Self::Login,
            other => other,
        };

        let resolved = if target.requires_auth() && !authenticated {
            Self::auth_failure_redirect()
        } else if target.should_redirect_when_authenticated() && authenticated {
            Self::auth_success_redirect(role)
        } else {
            target
        };

        if resolved == self {
            GuardOutcome::Render(resolved)
        } else {
            GuardOutcome::Redirect(resolved)
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
