use leptos::prelude::*;
use medchain_shared::dashboard::{DoctorOverview, PatientSummary};

use crate::components::icons::{Activity, Bell, CheckSquare, Clock, Search, Users};
use crate::components::line_chart::LineChart;
use crate::session::use_session;
use crate::theme::use_theme;

const CARD_LIGHT: &str = "bg-white rounded-xl shadow-sm";
const CARD_DARK: &str = "bg-gray-800 rounded-xl shadow-sm";

#[component]
fn PatientRow(patient: PatientSummary) -> impl IntoView {
    let badge = format!(
        "px-3 py-1 rounded-full text-xs font-medium {}",
        patient.urgency.badge_class()
    );

    view! {
        <div class="flex items-center space-x-4 p-4 hover:bg-gray-50 dark:hover:bg-gray-700 rounded-lg transition duration-150">
            <img src=patient.image alt=patient.name class="h-12 w-12 rounded-full" />
            <div class="flex-1">
                <h4 class="text-sm font-medium">{patient.name}</h4>
                <p class="text-sm text-gray-500">{patient.condition}</p>
            </div>
            <div class="flex items-center space-x-4">
                <span class=badge>{patient.urgency.label()}</span>
                <span class="text-sm text-gray-500">{patient.last_update()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn DoctorDashboard() -> impl IntoView {
    let session = use_session();
    let theme = use_theme();
    let overview = StoredValue::new(DoctorOverview::sample());

    let (query, set_query) = signal(String::new());
    let card = move |extra: &'static str| {
        move || format!("{} {}", theme.state().get().pick(CARD_DARK, CARD_LIGHT), extra)
    };

    let filtered = move || overview.with_value(|o| o.filter_patients(&query.get()));
    let user = session.user();

    view! {
        <div class="max-w-7xl mx-auto space-y-6">
            // 个人信息
            <div class=card("p-6 flex items-center space-x-4")>
                <div class="h-10 w-10 rounded-full bg-primary-100 flex items-center justify-center">
                    <img
                        src=move || user.get().and_then(|u| u.profile_image)
                        alt=move || user.get().map(|u| u.name)
                        class="h-10 w-10 rounded-full"
                    />
                </div>
                <div>
                    <h2 class="text-lg font-semibold">{move || user.get().map(|u| u.display_title())}</h2>
                    <p class="text-sm text-gray-500">{move || user.get().map(|u| u.subtitle())}</p>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                // 患者列表
                <div class=card("col-span-1 lg:col-span-2 p-6")>
                    <div class="flex items-center justify-between mb-6 gap-4">
                        <h3 class="text-lg font-semibold flex items-center">
                            <Users attr:class="w-5 h-5 mr-2 text-primary-500" />
                            "Patient List"
                        </h3>
                        <div class="relative">
                            <Search attr:class="absolute left-3 top-1/2 transform -translate-y-1/2 w-4 h-4 text-gray-400" />
                            <input
                                type="text"
                                placeholder="Search patients..."
                                on:input=move |ev| set_query.set(event_target_value(&ev))
                                prop:value=query
                                class="pl-9 px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent text-gray-900"
                            />
                        </div>
                    </div>
                    <div class="space-y-4">
                        <For
                            each=filtered
                            key=|patient: &PatientSummary| patient.id
                            children=|patient| view! { <PatientRow patient=patient /> }
                        />
                        <Show when=move || filtered().is_empty()>
                            <p class="text-center py-8 text-sm text-gray-500">"No patients match your search."</p>
                        </Show>
                    </div>
                </div>

                <div class="col-span-1 space-y-6">
                    // 每周接诊
                    <div class=card("p-6")>
                        <h3 class="text-lg font-semibold flex items-center mb-4">
                            <Activity attr:class="w-5 h-5 mr-2 text-primary-500" />
                            "Weekly Performance"
                        </h3>
                        <LineChart data=overview.with_value(DoctorOverview::performance_chart) />
                    </div>

                    // 快速统计
                    <div class="grid grid-cols-2 gap-4">
                        <div class=card("p-4")>
                            <div class="flex items-center justify-between">
                                <div class="bg-primary-100 rounded-lg p-2">
                                    <Clock attr:class="w-5 h-5 text-primary-600" />
                                </div>
                                <span class="text-sm text-gray-500">"Today"</span>
                            </div>
                            <p class="mt-4 text-2xl font-semibold">
                                {overview.with_value(|o| o.appointments_today)}
                            </p>
                            <p class="text-sm text-gray-500">"Appointments"</p>
                        </div>
                        <div class=card("p-4")>
                            <div class="flex items-center justify-between">
                                <div class="bg-secondary-100 rounded-lg p-2">
                                    <Bell attr:class="w-5 h-5 text-secondary-600" />
                                </div>
                                <span class="text-sm text-gray-500">"Pending"</span>
                            </div>
                            <p class="mt-4 text-2xl font-semibold">
                                {overview.with_value(|o| o.pending_alerts)}
                            </p>
                            <p class="text-sm text-gray-500">"Alerts"</p>
                        </div>
                    </div>

                    // 待审阅授权
                    <div class=card("p-6")>
                        <h3 class="text-lg font-semibold flex items-center mb-4">
                            <CheckSquare attr:class="w-5 h-5 mr-2 text-primary-500" />
                            "Pending Consents"
                        </h3>
                        <div class="space-y-4">
                            {overview
                                .with_value(|o| o.consent_requests.clone())
                                .into_iter()
                                .map(|request| {
                                    view! {
                                        <div class="flex items-center justify-between">
                                            <div>
                                                <p class="text-sm font-medium">{request.title}</p>
                                                <p class="text-xs text-gray-500">{request.patient}</p>
                                            </div>
                                            <button class="px-3 py-1 bg-primary-100 text-primary-600 rounded-lg text-sm font-medium hover:bg-primary-200 transition duration-150">
                                                "Review"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
