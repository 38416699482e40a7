//! 应用状态

use crate::draft::{FieldId, RegistrationDraft};
use crate::form::FormController;
use crate::tui::state::focus::{FocusState, FormRow, rows_for_step};
use crate::tui::state::input::InputState;
use crate::tui::state::toast::ToastState;
use crate::tui::theme::{Theme, ThemeMode};

/// 屏幕枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 注册表单
    #[default]
    Form,
    /// 注册结果
    Summary,
    /// 退出确认
    Exit,
}

/// 应用状态（包含 UI 状态）
#[derive(Debug)]
pub struct AppState {
    /// 当前屏幕
    pub current_screen: Screen,
    /// 表单控制器
    pub form: FormController,
    /// 焦点状态
    pub focus: FocusState,
    /// 输入状态
    pub input: InputState,
    /// 活动提示框
    pub toast: Option<ToastState>,
    /// 主题模式
    pub theme_mode: ThemeMode,
    /// 当前主题
    pub theme: Theme,
    /// 最近一次完成的注册
    pub result: Option<RegistrationDraft>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(mode: ThemeMode) -> Self {
        let form = FormController::new();
        let focus = FocusState::for_step(form.step());
        Self {
            current_screen: Screen::Form,
            form,
            focus,
            input: InputState::new(),
            toast: None,
            theme_mode: mode,
            theme: Theme::for_mode(mode),
            result: None,
        }
    }

    /// 切换主题
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        self.theme = Theme::for_mode(self.theme_mode);
    }

    /// 当前焦点所在的行
    pub fn focused_row(&self) -> FormRow {
        rows_for_step(self.form.step())
            .get(self.focus.selected())
            .copied()
            .unwrap_or(FormRow::Field(FieldId::Username))
    }

    /// 焦点变化后同步输入缓冲
    pub fn sync_input(&mut self) {
        match self.focused_row() {
            FormRow::Field(field) if field.is_text() => {
                let value = self.form.draft().field_text(field).to_string();
                self.input.load(&value);
            }
            _ => self.input.clear(),
        }
    }

    /// 重置焦点到当前步骤首行并同步输入
    pub fn reset_focus(&mut self) {
        self.focus = FocusState::for_step(self.form.step());
        self.sync_input();
    }

    /// 吸收控制器产生的通知
    pub fn drain_notices(&mut self) {
        if let Some(notice) = self.form.poll_notice() {
            self.toast = Some(ToastState::new(notice));
        }
    }

    /// 清理过期提示框；返回是否有变化
    pub fn expire_toast(&mut self) -> bool {
        if self.toast.as_ref().is_some_and(|toast| toast.expired()) {
            self.toast = None;
            return true;
        }
        false
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_focus_is_first_profile_field() {
        let state = AppState::default();
        assert_eq!(state.current_screen, Screen::Form);
        assert_eq!(state.focused_row(), FormRow::Field(FieldId::Username));
    }

    #[test]
    fn test_sync_input_loads_draft_value() {
        let mut state = AppState::default();
        state.form.set_field(FieldId::Username, "홍길동");
        state.sync_input();
        assert_eq!(state.input.value(), "홍길동");
    }

    #[test]
    fn test_toggle_theme_swaps_palette() {
        let mut state = AppState::new(ThemeMode::Dark);
        let dark_bg = state.theme.bg;
        state.toggle_theme();
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert_ne!(state.theme.bg, dark_bg);
    }

    #[test]
    fn test_drain_notices_creates_toast() {
        let mut state = AppState::default();
        // a mismatch submit queues a notice in the controller
        state.form.set_field(FieldId::Password, "x");
        state.form.set_field(FieldId::ConfirmPassword, "y");
        assert!(state.form.submit().is_none());

        assert!(state.toast.is_none());
        state.drain_notices();
        let toast = state.toast.as_ref().expect("notice becomes a toast");
        assert_eq!(toast.notice.title_key, "notice_password_mismatch");
    }
}
