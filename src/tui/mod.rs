//! Ratatui 终端 UI 模块
//!
//! 提供基于 ratatui 的终端用户界面。

pub mod app;
pub mod components;
pub mod event;
pub mod labels;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::TuiApp;
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, FocusState, FormRow, InputState, Screen, ToastState};
pub use theme::{Theme, ThemeMode};
pub use ui::render;
