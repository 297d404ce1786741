use crate::components::icons::{Lock, Mail, Moon, Stethoscope, Sun, UserIcon};
use crate::session::use_session;
use crate::theme::use_theme;
use crate::web::router::use_router;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medchain_shared::{AuthErrorKind, Credentials, DashboardConfig, Role};

fn tab_icon(role: Role) -> AnyView {
    match role {
        Role::Doctor => view! { <Stethoscope attr:class="w-4 h-4" /> }.into_any(),
        Role::Patient => view! { <UserIcon attr:class="w-4 h-4" /> }.into_any(),
    }
}

fn feature_icon(index: usize) -> AnyView {
    let class = "w-5 h-5 mt-1 text-primary-500";
    match index {
        0 => view! { <UserIcon attr:class=class /> }.into_any(),
        1 => view! { <Lock attr:class=class /> }.into_any(),
        _ => view! { <Mail attr:class=class /> }.into_any(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let theme = use_theme();
    let router = use_router();
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    let (active_tab, set_active_tab) = signal(Role::Doctor);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let is_submitting = session.pending();
    let pick = move |dark: &'static str, light: &'static str| {
        move || theme.state().get().pick(dark, light)
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let tab = active_tab.get_untracked();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked(), tab);
        if !credentials.is_complete() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }
        set_error_msg.set(None);

        spawn_local(async move {
            match session.login(credentials).await {
                // 按所选标签跳转，与分配到的角色无关
                Ok(()) => router.navigate_to(tab.home()),
                Err(e) if e.kind == AuthErrorKind::Cancelled => warn!("[Login] {}", e),
                // 失败消息由会话存储记录
                Err(_) => {}
            }
        });
    };

    let tab_class = move |role: Role| {
        move || {
            let base = "flex-1 py-2 px-4 text-sm font-medium flex items-center justify-center space-x-2";
            let variant = if active_tab.get() == role {
                "bg-primary-600 text-white"
            } else {
                theme.state().get().pick("bg-gray-700 text-gray-300", "bg-gray-100 text-gray-600")
            };
            format!("{} {}", base, variant)
        }
    };

    let input_class = pick(
        "pl-10 w-full px-4 py-2 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent bg-gray-700 text-white border-gray-600",
        "pl-10 w-full px-4 py-2 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent bg-white text-gray-900 border-gray-300",
    );
    let label_class = pick(
        "block text-sm font-medium mb-2 text-gray-200",
        "block text-sm font-medium mb-2 text-gray-700",
    );

    let displayed_error = move || error_msg.get().or_else(|| session.last_error().get());

    view! {
        <div class=pick(
            "min-h-screen flex items-center justify-center p-4 transition-colors duration-200 bg-gray-900",
            "min-h-screen flex items-center justify-center p-4 transition-colors duration-200 bg-gradient-to-br from-primary-50 to-secondary-50",
        )>
            <div class=pick(
                "w-full max-w-4xl rounded-2xl shadow-xl p-8 grid grid-cols-1 md:grid-cols-2 gap-8 bg-gray-800",
                "w-full max-w-4xl rounded-2xl shadow-xl p-8 grid grid-cols-1 md:grid-cols-2 gap-8 bg-white",
            )>
                // 左侧：登录表单
                <div class="space-y-6">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-2">
                            <div class=pick(
                                "w-12 h-12 rounded-full flex items-center justify-center bg-gray-700",
                                "w-12 h-12 rounded-full flex items-center justify-center bg-primary-100",
                            )>
                                <Stethoscope attr:class=pick(
                                    "w-6 h-6 text-primary-400",
                                    "w-6 h-6 text-primary-600",
                                ) />
                            </div>
                            <h1 class=pick("text-2xl font-bold text-white", "text-2xl font-bold text-gray-900")>
                                {config.login_title.clone()}
                            </h1>
                        </div>
                        <button
                            type="button"
                            on:click=move |_| theme.toggle_theme()
                            class=pick("p-2 rounded-lg bg-gray-700 text-gray-200", "p-2 rounded-lg bg-gray-100 text-gray-600")
                        >
                            {move || if theme.is_dark().get() {
                                view! { <Sun attr:class="w-5 h-5" /> }.into_any()
                            } else {
                                view! { <Moon attr:class="w-5 h-5" /> }.into_any()
                            }}
                        </button>
                    </div>

                    <div class="flex rounded-lg overflow-hidden">
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <button
                                        type="button"
                                        class=tab_class(role)
                                        on:click=move |_| set_active_tab.set(role)
                                    >
                                        {tab_icon(role)}
                                        <span>{format!("{} Login", role.label())}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <form class="space-y-6" on:submit=on_submit>
                        <Show when=move || displayed_error().is_some()>
                            <div role="alert" class="rounded-lg bg-red-100 text-red-800 text-sm px-4 py-2">
                                {displayed_error}
                            </div>
                        </Show>

                        <div>
                            <label class=label_class for="email">"Email Address"</label>
                            <div class="relative">
                                <Mail attr:class="absolute left-3 top-1/2 transform -translate-y-1/2 w-5 h-5 text-gray-400" />
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="Enter your email"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class=input_class
                                    required
                                />
                            </div>
                        </div>

                        <div>
                            <label class=label_class for="password">"Password"</label>
                            <div class="relative">
                                <Lock attr:class="absolute left-3 top-1/2 transform -translate-y-1/2 w-5 h-5 text-gray-400" />
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="Enter your password"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class=input_class
                                    required
                                />
                            </div>
                        </div>

                        <button
                            type="submit"
                            class="w-full bg-primary-600 text-white py-2 px-4 rounded-lg hover:bg-primary-700 transition duration-200 disabled:opacity-60"
                            disabled=move || is_submitting.get()
                        >
                            {move || if is_submitting.get() {
                                "Signing in...".to_string()
                            } else {
                                format!("Sign In as {}", active_tab.get().label())
                            }}
                        </button>
                    </form>
                </div>

                // 右侧：功能介绍
                <div class=pick("hidden md:block p-6 rounded-xl bg-gray-700", "hidden md:block p-6 rounded-xl bg-gray-50")>
                    <h2 class=pick("text-xl font-semibold mb-6 text-white", "text-xl font-semibold mb-6 text-gray-900")>
                        {move || format!("{} Features", active_tab.get().label())}
                    </h2>
                    <ul class="space-y-4">
                        {move || {
                            active_tab
                                .get()
                                .login_features()
                                .iter()
                                .enumerate()
                                .map(|(i, feature)| {
                                    view! {
                                        <li class=pick(
                                            "flex items-start space-x-3 text-gray-300",
                                            "flex items-start space-x-3 text-gray-600",
                                        )>
                                            {feature_icon(i)}
                                            <span>{*feature}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
        </div>
    }
}
