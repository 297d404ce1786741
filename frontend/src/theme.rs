//! 主题存储模块
//!
//! 持有显示模式标志，与会话存储相互独立。

use leptos::prelude::*;
use medchain_shared::ThemeState;

use crate::web::DocumentRoot;

#[derive(Clone, Copy)]
pub struct ThemeStore {
    state: RwSignal<ThemeState>,
}

impl ThemeStore {
    pub fn new(initial: ThemeState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn state(&self) -> ReadSignal<ThemeState> {
        self.state.read_only()
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().dark)
    }

    pub fn toggle_theme(&self) {
        self.state.update(ThemeState::toggle);
    }

    /// 把主题同步到 `<html>` 根元素上（`dark` 类与 `data-theme` 属性）
    pub fn sync_document(&self) {
        let state = self.state;
        Effect::new(move |_| DocumentRoot::apply_theme(state.get()));
    }
}

/// 从 Context 获取主题存储
pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>().expect("ThemeStore should be provided")
}
