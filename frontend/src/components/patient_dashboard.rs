use leptos::prelude::*;
use medchain_shared::dashboard::{PatientOverview, Vital, VitalKind};

use crate::components::icons::{
    Activity, AlertTriangle, Bell, Droplets, Heart, History, Thermometer, UserCheck,
};
use crate::components::line_chart::LineChart;
use crate::session::use_session;
use crate::theme::use_theme;

fn vital_icon(kind: VitalKind) -> AnyView {
    match kind {
        VitalKind::HeartRate => view! {
            <div class="bg-red-100 rounded-lg p-2">
                <Heart attr:class="w-5 h-5 text-red-600" />
            </div>
        }
        .into_any(),
        VitalKind::BloodPressure => view! {
            <div class="bg-primary-100 rounded-lg p-2">
                <Droplets attr:class="w-5 h-5 text-primary-600" />
            </div>
        }
        .into_any(),
        VitalKind::Temperature => view! {
            <div class="bg-secondary-100 rounded-lg p-2">
                <Thermometer attr:class="w-5 h-5 text-secondary-600" />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn VitalCard(vital: Vital, class: Signal<String>) -> impl IntoView {
    view! {
        <div class=class>
            <div class="flex items-center justify-between">
                {vital_icon(vital.kind)}
                <span class="text-sm text-gray-500">{vital.label}</span>
            </div>
            <p class="mt-4 text-2xl font-semibold">{vital.value}</p>
            <p class="text-sm text-gray-500">{vital.unit}</p>
        </div>
    }
}

#[component]
pub fn PatientDashboard() -> impl IntoView {
    let session = use_session();
    let theme = use_theme();
    let overview = PatientOverview::sample();

    let card = move |extra: &'static str| {
        Signal::derive(move || {
            format!(
                "{} {}",
                theme
                    .state()
                    .get()
                    .pick("bg-gray-800 rounded-xl shadow-sm", "bg-white rounded-xl shadow-sm"),
                extra
            )
        })
    };
    let user = session.user();

    let vitals = overview
        .vitals
        .iter()
        .map(|vital| view! { <VitalCard vital=*vital class=card("p-4") /> })
        .collect_view();

    let access_logs = overview
        .access_logs
        .iter()
        .map(|log| {
            view! {
                <div class="flex items-start space-x-4">
                    <img src=log.image alt=log.doctor class="h-10 w-10 rounded-full" />
                    <div class="flex-1">
                        <p class="text-sm font-medium">{log.doctor}</p>
                        <p class="text-sm text-gray-500">{log.action}</p>
                        <p class="text-xs text-gray-400">{log.timestamp()}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let consents = overview
        .consents
        .iter()
        .map(|consent| {
            view! {
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-sm font-medium">{consent.holder}</p>
                        <p class="text-xs text-gray-500">{consent.scope.label()}</p>
                    </div>
                    <button class="px-3 py-1 bg-red-100 text-red-600 rounded-lg text-sm font-medium hover:bg-red-200 transition duration-150">
                        "Revoke"
                    </button>
                </div>
            }
        })
        .collect_view();

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
                    <h2 class="text-lg font-semibold">{move || user.get().map(|u| u.name)}</h2>
                    <p class="text-sm text-gray-500">
                        {move || user.get().map(|u| format!("Patient ID: #{}", u.id))}
                    </p>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    // 健康指标
                    <div class=card("p-6")>
                        <h3 class="text-lg font-semibold flex items-center mb-6">
                            <Activity attr:class="w-5 h-5 mr-2 text-primary-500" />
                            "Health Metrics Overview"
                        </h3>
                        <LineChart data=overview.health_chart() legend=true />
                    </div>

                    <div class="grid grid-cols-3 gap-4">{vitals}</div>
                </div>

                <div class="space-y-6">
                    // 最近访问
                    <div class=card("p-6")>
                        <h3 class="text-lg font-semibold flex items-center mb-4">
                            <History attr:class="w-5 h-5 mr-2 text-primary-500" />
                            "Recent Access"
                        </h3>
                        <div class="space-y-4">{access_logs}</div>
                    </div>

                    // 授权管理
                    <div class=card("p-6")>
                        <h3 class="text-lg font-semibold flex items-center mb-4">
                            <UserCheck attr:class="w-5 h-5 mr-2 text-primary-500" />
                            "Active Consents"
                        </h3>
                        <div class="space-y-4">{consents}</div>
                    </div>

                    // 异常上报
                    <div class=card("p-6")>
                        <h3 class="text-lg font-semibold flex items-center mb-4">
                            <AlertTriangle attr:class="w-5 h-5 mr-2 text-primary-500" />
                            "Report Concern"
                        </h3>
                        <button class="w-full px-4 py-2 bg-primary-600 text-white rounded-lg hover:bg-primary-700 transition duration-150 flex items-center justify-center">
                            <Bell attr:class="w-5 h-5 mr-2" />
                            "Report Suspicious Activity"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
