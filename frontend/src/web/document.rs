//! 文档根元素封装模块
//!
//! 使用 `web_sys::Element` 直接操作 `<html>` 元素。

use medchain_shared::ThemeState;

/// `<html>` 根元素操作封装
pub struct DocumentRoot;

impl DocumentRoot {
    /// 获取根元素
    fn element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }

    /// 应用显示模式
    ///
    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果无法访问文档（如非浏览器环境）
    pub fn apply_theme(theme: ThemeState) -> bool {
        let Some(root) = Self::element() else {
            return false;
        };

        let toggled = root.class_list().toggle_with_force("dark", theme.dark).is_ok();
        let attributed = root.set_attribute("data-theme", theme.data_theme()).is_ok();
        toggled && attributed
    }
}
