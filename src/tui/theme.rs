//! 主题模块
//!
//! 提供深色/浅色两套主题定义，支持运行时切换（F2）。

use crate::notify::Severity;
use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// 布局与符号常量
pub mod config {
    /// 列表高亮符号
    pub const HIGHLIGHT_SYMBOL: &str = "» ";
    /// 密码掩码字符
    pub const MASK_CHAR: char = '•';
    /// 提示框宽度
    pub const TOAST_WIDTH: u16 = 42;
    /// 提示框高度
    pub const TOAST_HEIGHT: u16 = 3;
}

/// 主题模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeMode {
    /// 深色主题
    #[default]
    Dark,
    /// 浅色主题
    Light,
}

impl ThemeMode {
    /// 切换主题模式
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        })
    }
}

/// 主题颜色配置
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色
    pub fg: Color,
    /// 强调色
    pub accent: Color,
    /// 选中项背景色
    pub selected_bg: Color,
    /// 选中项前景色
    pub selected_fg: Color,
    /// 成功色
    pub success: Color,
    /// 警告色
    pub warning: Color,
    /// 错误色
    pub error: Color,
    /// 提示/次要文字色
    pub hint: Color,
    /// 边框色
    pub border: Color,
    /// 标题颜色
    pub title: Color,
}

impl Theme {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            selected_bg: Color::Cyan,
            selected_fg: Color::Black,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            hint: Color::Gray,
            border: Color::Cyan,
            title: Color::Cyan,
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            success: Color::Green,
            warning: Color::Magenta,
            error: Color::Red,
            hint: Color::DarkGray,
            border: Color::Blue,
            title: Color::Blue,
        }
    }

    /// 根据模式取主题
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// 普通文本样式
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.title)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 边框样式
    pub fn border(&self) -> Style {
        Style::new().fg(self.border).bg(self.bg)
    }

    /// 提示文本样式
    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint).bg(self.bg)
    }

    /// 强调样式
    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent).bg(self.bg)
    }

    /// 成功样式
    pub fn success(&self) -> Style {
        Style::new().fg(self.success).bg(self.bg)
    }

    /// 警告样式
    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning).bg(self.bg)
    }

    /// 错误样式
    pub fn error(&self) -> Style {
        Style::new().fg(self.error).bg(self.bg)
    }

    /// 通知严重级别对应的样式
    pub fn severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::Info => self.accent(),
            Severity::Warning => self.warning(),
            Severity::Error => self.error(),
        }
    }

    /// 创建居中的标题行
    pub fn centered_title(&self, text: String) -> Line<'static> {
        Line::from(text).centered().style(self.title())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
