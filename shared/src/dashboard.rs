//! 面板模拟数据
//!
//! 医生与患者面板展示的全部是固定的演示数据，没有任何后端来源。

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::chart::{ChartData, Series};
use crate::time::{humanize_ago, month_label};

// =========================================================
// 医生面板
// =========================================================

/// 患者病情的紧急程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Urgency::High => "bg-red-100 text-red-800",
            Urgency::Medium => "bg-yellow-100 text-yellow-800",
            Urgency::Low => "bg-green-100 text-green-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub condition: &'static str,
    pub urgency: Urgency,
    pub updated_ago: TimeDelta,
}

impl PatientSummary {
    pub fn last_update(&self) -> String {
        humanize_ago(self.updated_ago)
    }

    /// 按姓名或病情做不区分大小写的匹配
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.condition.to_lowercase().contains(&query)
    }
}

/// 等待医生审阅的授权请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsentRequest {
    pub title: &'static str,
    pub patient: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorOverview {
    /// (星期, 接诊人数)
    pub weekly_patients: Vec<(&'static str, u32)>,
    pub patients: Vec<PatientSummary>,
    pub appointments_today: u32,
    pub pending_alerts: u32,
    pub consent_requests: Vec<ConsentRequest>,
}

impl DoctorOverview {
    pub fn sample() -> Self {
        Self {
            weekly_patients: vec![
                ("Mon", 12),
                ("Tue", 19),
                ("Wed", 15),
                ("Thu", 22),
                ("Fri", 18),
                ("Sat", 8),
                ("Sun", 5),
            ],
            patients: vec![
                PatientSummary {
                    id: "1",
                    name: "Sarah Johnson",
                    image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400",
                    condition: "Post-surgery Recovery",
                    urgency: Urgency::High,
                    updated_ago: TimeDelta::hours(2),
                },
                PatientSummary {
                    id: "2",
                    name: "Michael Chen",
                    image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
                    condition: "Regular Checkup",
                    urgency: Urgency::Low,
                    updated_ago: TimeDelta::days(1),
                },
                PatientSummary {
                    id: "3",
                    name: "Emily Davis",
                    image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400",
                    condition: "Chronic Pain Management",
                    urgency: Urgency::Medium,
                    updated_ago: TimeDelta::hours(5),
                },
            ],
            appointments_today: 8,
            pending_alerts: 3,
            consent_requests: vec![
                ConsentRequest {
                    title: "Access to Medical History",
                    patient: "Sarah Johnson",
                },
                ConsentRequest {
                    title: "Lab Results Sharing",
                    patient: "Michael Chen",
                },
            ],
        }
    }

    /// 患者列表搜索
    pub fn filter_patients(&self, query: &str) -> Vec<PatientSummary> {
        self.patients
            .iter()
            .filter(|p| p.matches(query))
            .cloned()
            .collect()
    }

    pub fn performance_chart(&self) -> ChartData {
        ChartData {
            labels: self
                .weekly_patients
                .iter()
                .map(|(day, _)| day.to_string())
                .collect(),
            series: vec![Series::new(
                "Patients",
                "#0ea5e9",
                self.weekly_patients
                    .iter()
                    .map(|(_, n)| f64::from(*n))
                    .collect(),
            )],
        }
    }
}

// =========================================================
// 患者面板
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthSample {
    pub month: NaiveDate,
    pub heart_rate: f64,
    pub blood_pressure: f64,
    pub glucose: f64,
}

/// 生命体征卡片的配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    Temperature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vital {
    pub kind: VitalKind,
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessLogEntry {
    pub id: &'static str,
    pub doctor: &'static str,
    pub image: &'static str,
    pub action: &'static str,
    pub elapsed: TimeDelta,
}

impl AccessLogEntry {
    pub fn timestamp(&self) -> String {
        humanize_ago(self.elapsed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessScope {
    Full,
    Limited,
}

impl AccessScope {
    pub fn label(&self) -> &'static str {
        match self {
            AccessScope::Full => "Full Access",
            AccessScope::Limited => "Limited Access",
        }
    }
}

/// 患者已授予的访问授权
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveConsent {
    pub holder: &'static str,
    pub scope: AccessScope,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientOverview {
    pub health: Vec<HealthSample>,
    pub vitals: Vec<Vital>,
    pub access_logs: Vec<AccessLogEntry>,
    pub consents: Vec<ActiveConsent>,
}

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

impl PatientOverview {
    pub fn sample() -> Self {
        let sample = |m: u32, heart_rate: f64, blood_pressure: f64, glucose: f64| HealthSample {
            month: month(2024, m),
            heart_rate,
            blood_pressure,
            glucose,
        };

        Self {
            health: vec![
                sample(1, 72.0, 120.0, 95.0),
                sample(2, 75.0, 118.0, 92.0),
                sample(3, 71.0, 122.0, 98.0),
                sample(4, 73.0, 119.0, 94.0),
                sample(5, 74.0, 121.0, 96.0),
            ],
            vitals: vec![
                Vital {
                    kind: VitalKind::HeartRate,
                    label: "Heart Rate",
                    value: "72",
                    unit: "bpm",
                },
                Vital {
                    kind: VitalKind::BloodPressure,
                    label: "Blood Pressure",
                    value: "120/80",
                    unit: "mmHg",
                },
                Vital {
                    kind: VitalKind::Temperature,
                    label: "Temperature",
                    value: "98.6",
                    unit: "°F",
                },
            ],
            access_logs: vec![
                AccessLogEntry {
                    id: "1",
                    doctor: "Dr. Sarah Wilson",
                    image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400",
                    action: "Viewed Medical History",
                    elapsed: TimeDelta::hours(2),
                },
                AccessLogEntry {
                    id: "2",
                    doctor: "Dr. James Chen",
                    image: "https://images.unsplash.com/photo-1622253692010-333f2da6031d?w=400",
                    action: "Updated Prescription",
                    elapsed: TimeDelta::days(1),
                },
                AccessLogEntry {
                    id: "3",
                    doctor: "Dr. Emily Brown",
                    image: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?w=400",
                    action: "Added Lab Results",
                    elapsed: TimeDelta::days(3),
                },
            ],
            consents: vec![
                ActiveConsent {
                    holder: "Dr. Sarah Wilson",
                    scope: AccessScope::Full,
                },
                ActiveConsent {
                    holder: "City Hospital Lab",
                    scope: AccessScope::Limited,
                },
            ],
        }
    }

    pub fn health_chart(&self) -> ChartData {
        let column = |f: fn(&HealthSample) -> f64| self.health.iter().map(f).collect::<Vec<_>>();

        ChartData {
            labels: self.health.iter().map(|s| month_label(s.month)).collect(),
            series: vec![
                Series::new("Heart Rate", "#ef4444", column(|s| s.heart_rate)),
                Series::new("Blood Pressure", "#0ea5e9", column(|s| s.blood_pressure)),
                Series::new("Glucose", "#22c55e", column(|s| s.glucose)),
            ],
        }
    }
}
