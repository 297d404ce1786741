//! 导航能力模块
//!
//! 每个角色对应一个 [`NavigationProvider`]，视图外壳只依赖这个 trait，
//! 不关心当前是哪个角色。

use crate::route::{AppRoute, Section};
use crate::user::Role;

/// 导航图标（由前端映射为具体的 SVG）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Calendar,
    FileText,
    Bell,
    Message,
    Activity,
    Lock,
    Clipboard,
    Settings,
}

/// 侧边栏导航项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    pub route: AppRoute,
}

impl NavItem {
    const fn new(label: &'static str, icon: NavIcon, route: AppRoute) -> Self {
        Self { label, icon, route }
    }

    /// 当前路由是否指向此项（用于高亮）
    pub fn is_active(&self, current: AppRoute) -> bool {
        self.route == current
    }
}

/// 所有角色共用的底部导航项
pub const FOOTER_ITEMS: &[NavItem] = &[NavItem::new(
    "Settings",
    NavIcon::Settings,
    AppRoute::Section(Section::Settings),
)];

/// 按角色提供导航内容
pub trait NavigationProvider: Send + Sync {
    fn role(&self) -> Role;

    /// 侧边栏主导航项，按显示顺序排列
    fn items(&self) -> &'static [NavItem];

    /// 登录后的首页
    fn home(&self) -> AppRoute;

    fn footer_items(&self) -> &'static [NavItem] {
        FOOTER_ITEMS
    }

    /// 查找与当前路由匹配的导航项
    fn active_item(&self, current: AppRoute) -> Option<&'static NavItem> {
        self.items()
            .iter()
            .chain(self.footer_items())
            .find(|item| item.is_active(current))
    }
}

// =========================================================
// 医生
// =========================================================

pub struct DoctorNavigation;

pub static DOCTOR_NAVIGATION: DoctorNavigation = DoctorNavigation;

const DOCTOR_ITEMS: &[NavItem] = &[
    NavItem::new("Dashboard", NavIcon::Dashboard, AppRoute::DoctorDashboard),
    NavItem::new(
        "Patients",
        NavIcon::Users,
        AppRoute::Section(Section::DoctorPatients),
    ),
    NavItem::new(
        "Appointments",
        NavIcon::Calendar,
        AppRoute::Section(Section::DoctorAppointments),
    ),
    NavItem::new(
        "Medical Records",
        NavIcon::FileText,
        AppRoute::Section(Section::DoctorRecords),
    ),
    NavItem::new(
        "Notifications",
        NavIcon::Bell,
        AppRoute::Section(Section::DoctorNotifications),
    ),
    NavItem::new(
        "Messages",
        NavIcon::Message,
        AppRoute::Section(Section::DoctorMessages),
    ),
    NavItem::new(
        "Analytics",
        NavIcon::Activity,
        AppRoute::Section(Section::DoctorAnalytics),
    ),
];

impl NavigationProvider for DoctorNavigation {
    fn role(&self) -> Role {
        Role::Doctor
    }

    fn items(&self) -> &'static [NavItem] {
        DOCTOR_ITEMS
    }

    fn home(&self) -> AppRoute {
        AppRoute::DoctorDashboard
    }
}

// =========================================================
// 患者
// =========================================================

pub struct PatientNavigation;

pub static PATIENT_NAVIGATION: PatientNavigation = PatientNavigation;

const PATIENT_ITEMS: &[NavItem] = &[
    NavItem::new("Dashboard", NavIcon::Dashboard, AppRoute::PatientDashboard),
    NavItem::new(
        "Medical History",
        NavIcon::FileText,
        AppRoute::Section(Section::PatientHistory),
    ),
    NavItem::new(
        "Appointments",
        NavIcon::Calendar,
        AppRoute::Section(Section::PatientAppointments),
    ),
    NavItem::new(
        "Access Control",
        NavIcon::Lock,
        AppRoute::Section(Section::PatientAccessControl),
    ),
    NavItem::new(
        "Prescriptions",
        NavIcon::Clipboard,
        AppRoute::Section(Section::PatientPrescriptions),
    ),
    NavItem::new(
        "Messages",
        NavIcon::Message,
        AppRoute::Section(Section::PatientMessages),
    ),
];

impl NavigationProvider for PatientNavigation {
    fn role(&self) -> Role {
        Role::Patient
    }

    fn items(&self) -> &'static [NavItem] {
        PATIENT_ITEMS
    }

    fn home(&self) -> AppRoute {
        AppRoute::PatientDashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(provider: &dyn NavigationProvider) -> Vec<&'static str> {
        provider.items().iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_doctor_items() {
        let nav = Role::Doctor.navigation();
        assert_eq!(nav.role(), Role::Doctor);
        assert_eq!(
            labels(nav),
            [
                "Dashboard",
                "Patients",
                "Appointments",
                "Medical Records",
                "Notifications",
                "Messages",
                "Analytics"
            ]
        );
        assert_eq!(nav.items()[0].route, nav.home());
    }

    #[test]
    fn test_patient_items() {
        let nav = Role::Patient.navigation();
        assert_eq!(nav.role(), Role::Patient);
        assert_eq!(
            labels(nav),
            [
                "Dashboard",
                "Medical History",
                "Appointments",
                "Access Control",
                "Prescriptions",
                "Messages"
            ]
        );
        assert_eq!(nav.items()[0].route, nav.home());
    }

    #[test]
    fn test_every_item_is_protected() {
        for role in Role::ALL {
            let nav = role.navigation();
            for item in nav.items().iter().chain(nav.footer_items()) {
                assert!(item.route.requires_auth(), "{}", item.label);
            }
        }
    }

    #[test]
    fn test_active_item_lookup() {
        let nav = Role::Patient.navigation();
        let active = nav
            .active_item(AppRoute::Section(Section::PatientAccessControl))
            .unwrap();
        assert_eq!(active.label, "Access Control");

        let settings = nav.active_item(AppRoute::Section(Section::Settings)).unwrap();
        assert_eq!(settings.icon, NavIcon::Settings);

        // 医生的页面不在患者导航里
        assert!(nav.active_item(AppRoute::DoctorDashboard).is_none());
    }
}
