//! TUI 状态模块

pub mod app;
pub mod focus;
pub mod input;
pub mod toast;

pub use app::{AppState, Screen};
pub use focus::{FocusState, FormRow, rows_for_step};
pub use input::InputState;
pub use toast::ToastState;
