//! 用户与角色模块
//!
//! `Role` 是一个封闭的标签枚举，所有按角色区分的界面行为
//! （导航项、首页面板、登录页介绍文案）都从这里分派，而不是比较字符串。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::nav::{DOCTOR_NAVIGATION, NavigationProvider, PATIENT_NAVIGATION};
use crate::route::AppRoute;

// =========================================================
// 角色 (Role)
// =========================================================

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Doctor,
    Patient,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Doctor, Role::Patient];

    /// 机器可读的角色键
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }

    /// 界面显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
        }
    }

    /// 该角色的导航提供者
    pub fn navigation(&self) -> &'static dyn NavigationProvider {
        match self {
            Role::Doctor => &DOCTOR_NAVIGATION,
            Role::Patient => &PATIENT_NAVIGATION,
        }
    }

    /// 登录后该角色的首页面板
    pub fn home(&self) -> AppRoute {
        self.navigation().home()
    }

    /// 登录页右侧展示的功能介绍
    pub fn login_features(&self) -> &'static [&'static str] {
        match self {
            Role::Doctor => &[
                "Manage patient records and appointments",
                "Secure access to medical histories",
                "Real-time notifications and alerts",
            ],
            Role::Patient => &[
                "View and manage your health records",
                "Control access to your medical data",
                "Receive health updates and recommendations",
            ],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================
// 用户 (User)
// =========================================================

/// 已登录用户
///
/// 登录成功时创建，会话期间不可变，注销时随会话一起销毁。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl User {
    /// 头部显示的称呼，医生带 "Dr." 前缀
    pub fn display_title(&self) -> String {
        match self.role {
            Role::Doctor => format!("Dr. {}", self.name),
            Role::Patient => self.name.clone(),
        }
    }

    /// 头部副标题
    pub fn subtitle(&self) -> String {
        match self.role {
            Role::Doctor => "General Practitioner".to_string(),
            Role::Patient => format!("Patient ID: #{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "7".to_string(),
            email: "x@example.com".to_string(),
            name: "Jane Roe".to_string(),
            role,
            profile_image: None,
        }
    }

    #[test]
    fn test_role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"patient\"").unwrap(),
            Role::Patient
        );
    }

    #[test]
    fn test_home_dashboards() {
        assert_eq!(Role::Doctor.home(), AppRoute::DoctorDashboard);
        assert_eq!(Role::Patient.home(), AppRoute::PatientDashboard);
    }

    #[test]
    fn test_display_title_and_subtitle() {
        let doctor = user(Role::Doctor);
        assert_eq!(doctor.display_title(), "Dr. Jane Roe");
        assert_eq!(doctor.subtitle(), "General Practitioner");

        let patient = user(Role::Patient);
        assert_eq!(patient.display_title(), "Jane Roe");
        assert_eq!(patient.subtitle(), "Patient ID: #7");
    }

    #[test]
    fn test_profile_image_omitted_when_absent() {
        let json = serde_json::to_value(user(Role::Patient)).unwrap();
        assert!(json.get("profile_image").is_none());
    }
}
