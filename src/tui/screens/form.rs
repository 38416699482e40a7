//! 注册表单渲染
//!
//! 两个字段组共用同一屏幕：焦点列表 + 行内校验消息 + 悬浮提示框。

use crate::draft::FieldId;
use crate::form::WizardStep;
use crate::tui::components::{
    corner_overlay, mask_value, render_hint, render_title_block, three_panel_layout, wrap_lines,
};
use crate::tui::labels::{field_label, field_placeholder, message_label, role_label, step_label};
use crate::tui::state::{AppState, FormRow, rows_for_step};
use crate::tui::theme::config::{HIGHLIGHT_SYMBOL, TOAST_HEIGHT, TOAST_WIDTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, Paragraph, Wrap},
};
use rust_i18n::t;
use std::borrow::Cow;

/// 渲染注册表单
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);

    render_title_block(&t!("form_title"), &state.theme, frame, header);

    let [intro_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(body);
    draw_intro(frame, intro_area, state);
    draw_rows(frame, list_area, state);

    render_hint(&hint_text(state), &state.theme, frame, footer);

    draw_toast(frame, body, state);
}

/// 副标题与步骤指示
fn draw_intro(frame: &mut Frame, area: Rect, state: &AppState) {
    let step = state.form.step();
    let indicator = t!(
        "step_indicator",
        current = step.index() + 1,
        total = WizardStep::COUNT,
        name = step_label(step)
    );
    let lines = vec![
        Line::from(t!("form_subtitle").into_owned()).style(state.theme.hint()),
        Line::from(indicator.into_owned()).style(state.theme.accent()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}

/// 渲染字段与按钮行
fn draw_rows(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let step = state.form.step();
    let rows = rows_for_step(step);
    let selected = state.focus.selected().min(rows.len().saturating_sub(1));
    let content_width = list_content_width(area);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| match row {
            FormRow::Field(field) => field_item(state, *field, index == selected, content_width),
            FormRow::Next => button_item(state, format!("→ {}", t!("btn_next")), index == selected),
            FormRow::Prev => button_item(state, format!("← {}", t!("btn_prev")), index == selected),
            FormRow::Submit => {
                button_item(state, format!("✓ {}", t!("btn_submit")), index == selected)
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(step_label(step).into_owned())
                .border_type(BorderType::Rounded)
                .border_style(state.theme.border()),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    state.focus.list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state.focus.list_state);
}

/// 去掉边框与高亮符号后的内容宽度
fn list_content_width(area: Rect) -> usize {
    area.width.saturating_sub(4) as usize
}

/// 单个字段行：值或输入光标，外加行内校验消息
fn field_item(
    state: &AppState,
    field: FieldId,
    focused: bool,
    content_width: usize,
) -> ListItem<'static> {
    let theme = &state.theme;
    let label = field_label(field);
    let draft = state.form.draft();

    let mut lines: Vec<Line<'static>> = if focused && field.is_text() {
        let (left, right) = if field.is_secret() {
            state.input.masked_split_at_cursor()
        } else {
            let (left, right) = state.input.split_at_cursor();
            (left.to_string(), right.to_string())
        };
        wrap_lines(&format!("{}: [{}|{}]", label, left, right), content_width)
            .into_iter()
            .map(|line| line.style(theme.selected()))
            .collect()
    } else if focused {
        // 角色字段：左右键在选项间循环
        vec![Line::from(format!("{}: ‹ {} ›", label, role_label(draft.role))).style(theme.selected())]
    } else {
        let label_span = Span::styled(format!("{}: ", label), theme.normal());
        let value_span = match field {
            FieldId::Role => {
                let style = if draft.role.is_some() {
                    theme.normal()
                } else {
                    theme.hint()
                };
                Span::styled(role_label(draft.role).into_owned(), style)
            }
            _ => {
                let raw = draft.field_text(field);
                if raw.is_empty() {
                    let placeholder = field_placeholder(field).unwrap_or(Cow::Borrowed(""));
                    Span::styled(placeholder.into_owned(), theme.hint())
                } else if field.is_secret() {
                    Span::styled(mask_value(raw), theme.normal())
                } else {
                    Span::styled(raw.to_string(), theme.normal())
                }
            }
        };
        vec![Line::from(vec![label_span, value_span])]
    };

    if let Some(message_key) = state.form.field_state(field).visible_message() {
        let message = format!("  ⚠ {}", message_label(message_key));
        lines.extend(
            wrap_lines(&message, content_width)
                .into_iter()
                .map(|line| line.style(theme.error())),
        );
    }

    ListItem::new(lines)
}

/// 操作按钮行
fn button_item(state: &AppState, text: String, focused: bool) -> ListItem<'static> {
    let style = if focused {
        state.theme.selected()
    } else {
        state.theme.accent()
    };
    ListItem::new(Line::from(text).style(style))
}

/// 底部提示文本
fn hint_text(state: &AppState) -> Cow<'static, str> {
    match state.focused_row() {
        FormRow::Field(FieldId::Role) => t!("hint_role_field"),
        FormRow::Field(_) => t!("hint_text_field"),
        FormRow::Next => t!("hint_next_button"),
        FormRow::Prev => t!("hint_prev_button"),
        FormRow::Submit => t!("hint_submit_button"),
    }
}

/// 右下角悬浮提示框
fn draw_toast(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(toast) = &state.toast else {
        return;
    };
    if toast.expired() {
        return;
    }

    let rect = corner_overlay(area, TOAST_WIDTH, TOAST_HEIGHT);
    let style = state.theme.severity(toast.notice.severity);

    frame.render_widget(Clear, rect);
    let paragraph = Paragraph::new(message_label(toast.notice.title_key).into_owned())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(paragraph, rect);
}
