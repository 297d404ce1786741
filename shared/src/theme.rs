use serde::{Deserialize, Serialize};

/// 显示模式标志
///
/// 与会话完全独立，只在内存中存在。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    /// 按当前模式在两个样式变体之间选择
    pub fn pick<'a>(&self, dark: &'a str, light: &'a str) -> &'a str {
        if self.dark { dark } else { light }
    }

    /// `<html data-theme=...>` 的取值
    pub fn data_theme(&self) -> &'static str {
        self.pick("dark", "light")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_flag() {
        for initial in [false, true] {
            let mut theme = ThemeState::new(initial);
            theme.toggle();
            assert_ne!(theme.dark, initial);
            theme.toggle();
            assert_eq!(theme.dark, initial);
        }
    }

    #[test]
    fn test_pick_follows_flag() {
        let light = ThemeState::default();
        assert_eq!(light.pick("bg-gray-900", "bg-gray-50"), "bg-gray-50");
        assert_eq!(light.data_theme(), "light");

        let dark = ThemeState::new(true);
        assert_eq!(dark.pick("bg-gray-900", "bg-gray-50"), "bg-gray-900");
        assert_eq!(dark.data_theme(), "dark");
    }
}
