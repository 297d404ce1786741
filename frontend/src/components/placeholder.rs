use leptos::prelude::*;
use medchain_shared::{AppRoute, Section};

use crate::components::icons::Activity;
use crate::session::use_session;
use crate::web::router::Link;

/// 尚未实现的功能页
#[component]
pub fn SectionPlaceholder(section: Section) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto rounded-xl shadow-sm p-10 text-center bg-white dark:bg-gray-800">
            <Activity attr:class="w-10 h-10 mx-auto text-primary-500" />
            <h2 class="mt-4 text-2xl font-semibold">{section.title()}</h2>
            <p class="mt-2 text-sm text-gray-500">"This section is not available yet."</p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let session = use_session();
    let role = session.role_signal();
    // 未登录时回到登录页，守卫会处理其余情况
    let home = move || role.get().map(|r| r.home()).unwrap_or(AppRoute::Login);

    view! {
        <div class="flex items-center justify-center min-h-screen">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-red-500">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                {move || {
                    view! {
                        <Link to=home() class="inline-block mt-6 text-primary-600 hover:underline">
                            "Go back"
                        </Link>
                    }
                }}
            </div>
        </div>
    }
}
