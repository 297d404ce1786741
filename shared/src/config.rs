//! 应用配置
//!
//! CSR 包在浏览器里没有运行时环境变量，因此配置在构建时通过
//! `option_env!` 注入；未设置或无法识别的值使用默认值。

use serde::{Deserialize, Serialize};

// =========================================================
// 默认值
// =========================================================

pub const DEFAULT_BRAND_NAME: &str = "MedChain";
pub const DEFAULT_LOGIN_TITLE: &str = "Medical Blockchain";
pub const DEFAULT_MOCK_NAME: &str = "John Doe";
pub const DEFAULT_MOCK_AVATAR: &str =
    "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400";

const KEY_BRAND_NAME: &str = "MEDCHAIN_BRAND_NAME";
const KEY_LOGIN_TITLE: &str = "MEDCHAIN_LOGIN_TITLE";
const KEY_MOCK_NAME: &str = "MEDCHAIN_MOCK_NAME";
const KEY_MOCK_AVATAR: &str = "MEDCHAIN_MOCK_AVATAR";
const KEY_ROLE_ASSIGNMENT: &str = "MEDCHAIN_ROLE_ASSIGNMENT";
const KEY_DARK_MODE: &str = "MEDCHAIN_DARK_MODE";

/// 模拟登录如何决定用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleAssignment {
    /// 无论登录页选择哪个标签都分配医生角色（默认）
    #[default]
    FixedDoctor,
    /// 使用登录页所选标签的角色
    Requested,
}

impl RoleAssignment {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "fixed-doctor" => Some(RoleAssignment::FixedDoctor),
            "requested" => Some(RoleAssignment::Requested),
            _ => None,
        }
    }
}

/// 仪表盘配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub brand_name: String,
    pub login_title: String,
    pub mock_name: String,
    pub mock_avatar: Option<String>,
    pub role_assignment: RoleAssignment,
    pub dark_mode: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            login_title: DEFAULT_LOGIN_TITLE.to_string(),
            mock_name: DEFAULT_MOCK_NAME.to_string(),
            mock_avatar: Some(DEFAULT_MOCK_AVATAR.to_string()),
            role_assignment: RoleAssignment::default(),
            dark_mode: false,
        }
    }
}

impl DashboardConfig {
    /// 从任意键值来源构造配置
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            brand_name: non_empty(KEY_BRAND_NAME).unwrap_or(defaults.brand_name),
            login_title: non_empty(KEY_LOGIN_TITLE).unwrap_or(defaults.login_title),
            mock_name: non_empty(KEY_MOCK_NAME).unwrap_or(defaults.mock_name),
            // 显式设置为空字符串表示不使用头像
            mock_avatar: match lookup(KEY_MOCK_AVATAR) {
                Some(v) if v.trim().is_empty() => None,
                Some(v) => Some(v),
                None => defaults.mock_avatar,
            },
            role_assignment: lookup(KEY_ROLE_ASSIGNMENT)
                .and_then(|v| RoleAssignment::from_key(&v))
                .unwrap_or(defaults.role_assignment),
            dark_mode: lookup(KEY_DARK_MODE)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.dark_mode),
        }
    }

    /// 读取构建时注入的环境变量
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                KEY_BRAND_NAME => option_env!("MEDCHAIN_BRAND_NAME"),
                KEY_LOGIN_TITLE => option_env!("MEDCHAIN_LOGIN_TITLE"),
                KEY_MOCK_NAME => option_env!("MEDCHAIN_MOCK_NAME"),
                KEY_MOCK_AVATAR => option_env!("MEDCHAIN_MOCK_AVATAR"),
                KEY_ROLE_ASSIGNMENT => option_env!("MEDCHAIN_ROLE_ASSIGNMENT"),
                KEY_DARK_MODE => option_env!("MEDCHAIN_DARK_MODE"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
