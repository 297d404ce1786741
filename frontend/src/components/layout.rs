//! 视图外壳
//!
//! 侧边栏 + 顶栏。导航项由当前用户角色的 `NavigationProvider` 提供，
//! 外壳本身不区分医生和患者。

use leptos::prelude::*;
use medchain_shared::{AppRoute, DashboardConfig, NavItem, NavigationProvider, Role};

use crate::components::icons::*;
use crate::session::use_session;
use crate::theme::use_theme;
use crate::web::router::{Link, use_router};

const LINK_BASE: &str = "flex items-center px-2 py-2 rounded-lg transition-colors";

/// 当前用户的导航提供者；没有用户时按患者导航处理
fn navigation_for(role: Option<Role>) -> &'static dyn NavigationProvider {
    role.unwrap_or(Role::Patient).navigation()
}

/// 需要高亮的导航项；主导航和底部导航都参与匹配
fn active_nav_item(role: Option<Role>, current: AppRoute) -> Option<&'static NavItem> {
    navigation_for(role).active_item(current)
}

/// 侧边栏标题：角色首页和品牌名
fn brand_header(
    role: Signal<Option<Role>>,
    brand: StoredValue<String>,
) -> impl Fn() -> (AppRoute, String) + Copy + Send + Sync + 'static {
    move || (navigation_for(role.get()).home(), brand.get_value())
}

#[component]
fn SidebarLink(
    item: &'static NavItem,
    active: Signal<Option<&'static NavItem>>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();

    let class = move || {
        let state = theme.state().get();
        let variant = if active.get() == Some(item) {
            state.pick("bg-gray-700 text-white", "bg-primary-100 text-primary-900")
        } else {
            state.pick("text-gray-300 hover:bg-gray-700", "text-gray-600 hover:bg-gray-100")
        };
        Some(format!("{} {}", LINK_BASE, variant))
    };

    view! {
        <Link to=item.route class=Signal::derive(class) on_navigate=on_navigate>
            {nav_icon(item.icon, "w-5 h-5 mr-3")}
            <span>{item.label}</span>
        </Link>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let theme = use_theme();
    let router = use_router();
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    let (sidebar_open, set_sidebar_open) = signal(false);
    let close_sidebar = Callback::new(move |_: ()| set_sidebar_open.set(false));

    let user = session.user();
    let role = session.role_signal();
    let active = Signal::derive(move || active_nav_item(role.get(), router.current_route().get()));
    let header = brand_header(role, StoredValue::new(config.brand_name));
    let is_dark = theme.is_dark();
    let pick = move |dark: &'static str, light: &'static str| {
        move || theme.state().get().pick(dark, light)
    };

    let on_logout = move |_| {
        set_sidebar_open.set(false);
        session.logout();
    };

    let nav_items = move || {
        navigation_for(role.get())
            .items()
            .iter()
            .map(|item| view! { <SidebarLink item=item active=active on_navigate=close_sidebar /> })
            .collect_view()
    };

    let footer_items = move || {
        navigation_for(role.get())
            .footer_items()
            .iter()
            .map(|item| view! { <SidebarLink item=item active=active on_navigate=close_sidebar /> })
            .collect_view()
    };

    view! {
        <div class=pick("min-h-screen bg-gray-900 text-white", "min-h-screen bg-gray-50 text-gray-900")>
            // 侧边栏
            <aside class=move || {
                format!(
                    "fixed top-0 left-0 z-40 w-64 h-screen transition-transform md:translate-x-0 {} {}",
                    theme.state().get().pick("bg-gray-800", "bg-white"),
                    if sidebar_open.get() { "translate-x-0" } else { "-translate-x-full" },
                )
            }>
                <div class="h-full px-3 py-4 overflow-y-auto">
                    <div class="flex items-center justify-between mb-6 px-2">
                        {move || {
                            let (target, brand_name) = header();
                            view! {
                                <Link to=target class="flex items-center space-x-3" on_navigate=close_sidebar>
                                    <div class=pick(
                                        "w-8 h-8 rounded-lg flex items-center justify-center bg-gray-700",
                                        "w-8 h-8 rounded-lg flex items-center justify-center bg-primary-100",
                                    )>
                                        <Activity attr:class=pick(
                                            "w-5 h-5 text-primary-400",
                                            "w-5 h-5 text-primary-600",
                                        ) />
                                    </div>
                                    <span class="text-lg font-semibold">{brand_name}</span>
                                </Link>
                            }
                        }}
                        <button class="md:hidden" on:click=move |_| set_sidebar_open.set(false)>
                            <X attr:class="w-5 h-5" />
                        </button>
                    </div>

                    <nav class="space-y-1">{nav_items}</nav>

                    <div class="absolute bottom-4 left-0 right-0 px-3 space-y-2">
                        {footer_items}
                        <button
                            on:click=on_logout
                            class=move || {
                                format!(
                                    "{} w-full {}",
                                    LINK_BASE,
                                    theme.state().get().pick(
                                        "text-gray-300 hover:bg-gray-700",
                                        "text-gray-600 hover:bg-gray-100",
                                    ),
                                )
                            }
                        >
                            <LogOut attr:class="w-5 h-5 mr-3" />
                            <span>"Logout"</span>
                        </button>
                    </div>
                </div>
            </aside>

            // 主内容
            <div class="transition-all duration-200 ease-in-out md:ml-64">
                // 顶栏
                <nav class=pick(
                    "fixed top-0 right-0 z-30 w-full h-16 md:w-[calc(100%-16rem)] bg-gray-800",
                    "fixed top-0 right-0 z-30 w-full h-16 md:w-[calc(100%-16rem)] bg-white",
                )>
                    <div class="px-4 h-full flex items-center justify-between">
                        <button class="md:hidden" on:click=move |_| set_sidebar_open.set(true)>
                            <Menu attr:class="w-6 h-6" />
                        </button>

                        <div class="flex items-center space-x-4 ml-auto">
                            <button
                                class=pick(
                                    "p-2 rounded-lg transition-colors bg-gray-700 text-gray-200 hover:bg-gray-600",
                                    "p-2 rounded-lg transition-colors bg-gray-100 text-gray-600 hover:bg-gray-200",
                                )
                                on:click=move |_| theme.toggle_theme()
                            >
                                {move || if is_dark.get() {
                                    view! { <Sun attr:class="w-5 h-5" /> }.into_any()
                                } else {
                                    view! { <Moon attr:class="w-5 h-5" /> }.into_any()
                                }}
                            </button>

                            <div class="flex items-center space-x-3">
                                <div class="w-8 h-8 rounded-full bg-primary-100 flex items-center justify-center">
                                    <img
                                        src=move || user.get().and_then(|u| u.profile_image)
                                        alt=move || user.get().map(|u| u.name)
                                        class="w-8 h-8 rounded-full"
                                    />
                                </div>
                                <span class=pick(
                                    "hidden md:block text-sm font-medium text-gray-200",
                                    "hidden md:block text-sm font-medium text-gray-700",
                                )>
                                    {move || user.get().map(|u| u.name)}
                                </span>
                            </div>
                        </div>
                    </div>
                </nav>

                // 页面内容
                <main class="pt-20 px-4 pb-8">{children()}</main>
            </div>

            // 移动端遮罩
            <Show when=move || sidebar_open.get()>
                <div
                    class="fixed inset-0 z-30 bg-gray-900 bg-opacity-50 md:hidden"
                    on:click=move |_| set_sidebar_open.set(false)
                ></div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medchain_shared::Section;

    #[test]
    fn test_active_item_follows_role_navigation() {
        let item = active_nav_item(Some(Role::Doctor), AppRoute::Section(Section::DoctorPatients));
        assert_eq!(item.map(|i| i.label), Some("Patients"));

        // 底部导航同样会高亮
        for role in [Some(Role::Doctor), Some(Role::Patient), None] {
            let item = active_nav_item(role, AppRoute::Section(Section::Settings));
            assert_eq!(item.map(|i| i.label), Some("Settings"));
        }

        // 不属于该角色的页面不高亮任何项
        assert_eq!(active_nav_item(Some(Role::Patient), AppRoute::DoctorDashboard), None);
        assert_eq!(
            active_nav_item(None, AppRoute::Section(Section::PatientHistory)).map(|i| i.label),
            Some("Medical History")
        );
    }

    #[test]
    fn test_brand_header_recomputes_per_role() {
        let owner = Owner::new();
        owner.set();

        let role = RwSignal::new(Some(Role::Patient));
        let header = brand_header(role.into(), StoredValue::new("MedChain".to_string()));

        assert_eq!(header(), (AppRoute::PatientDashboard, "MedChain".to_string()));
        role.set(Some(Role::Doctor));
        assert_eq!(header(), (AppRoute::DoctorDashboard, "MedChain".to_string()));
        role.set(None);
        assert_eq!(header(), (AppRoute::PatientDashboard, "MedChain".to_string()));
    }
}
