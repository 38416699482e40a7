//! UI 渲染模块
//!
//! 按当前屏幕路由到具体渲染函数。

use crate::error::Result;
use crate::tui::screens;
use crate::tui::state::{AppState, Screen};
use ratatui::{DefaultTerminal, widgets::Block};

/// 渲染当前屏幕
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        // 先铺满背景，浅色主题才能整屏生效
        frame.render_widget(Block::new().style(state.theme.normal()), area);
        match state.current_screen {
            Screen::Form => screens::form::draw(frame, area, state),
            Screen::Summary => screens::summary::draw(frame, area, state),
            Screen::Exit => screens::exit::draw(frame, area, &state.theme),
        }
    })?;
    Ok(())
}
