//! Common UI components module
//!
//! Provides reusable UI components to avoid code duplication.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use super::theme::{Theme, config::MASK_CHAR};

/// Three-panel layout: header, body, footer
pub fn three_panel_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area)
}

/// Render a centered title block with border
pub fn render_title_block(title: &str, theme: &Theme, frame: &mut ratatui::prelude::Frame, area: Rect) {
    let title_line = theme.centered_title(format!(" {} ", title));

    let block = Block::bordered()
        .title(title_line)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.normal());

    frame.render_widget(block, area);
}

/// Render bottom hint text
pub fn render_hint(hint: &str, theme: &Theme, frame: &mut ratatui::prelude::Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme.hint())
        .alignment(ratatui::prelude::Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

/// 按显示宽度换行，避免 UTF-8 边界问题
pub fn wrap_lines(value: &str, max_width: usize) -> Vec<Line<'static>> {
    if max_width == 0 {
        return vec![Line::from(String::new())];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in value.chars() {
        if ch == '\n' {
            lines.push(Line::from(current));
            current = String::new();
            current_width = 0;
            continue;
        }

        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width && !current.is_empty() {
            lines.push(Line::from(current));
            current = String::new();
            current_width = 0;
        }

        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

/// 将字段值替换为等长掩码（密码显示用）
pub fn mask_value(value: &str) -> String {
    std::iter::repeat(MASK_CHAR)
        .take(value.chars().count())
        .collect()
}

/// 计算区域右下角的悬浮矩形（提示框用）
pub fn corner_overlay(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines_respects_display_width() {
        let lines = wrap_lines("abcd", 2);
        assert_eq!(lines.len(), 2);

        // wide characters count double
        let lines = wrap_lines("你好世界", 4);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_mask_value_preserves_char_count() {
        assert_eq!(mask_value(""), "");
        assert_eq!(mask_value("abc"), "•••");
        assert_eq!(mask_value("비밀번호"), "••••");
    }

    #[test]
    fn test_corner_overlay_stays_inside_area() {
        let area = Rect::new(2, 3, 20, 10);
        let overlay = corner_overlay(area, 8, 4);
        assert_eq!(overlay.x + overlay.width, area.x + area.width);
        assert_eq!(overlay.y + overlay.height, area.y + area.height);

        // oversized request is clamped to the area
        let overlay = corner_overlay(area, 100, 100);
        assert_eq!(overlay.width, area.width);
        assert_eq!(overlay.height, area.height);
    }
}
