//! 注册结果渲染
//!
//! 把收集到的六个字段原样回显给用户；无终态，可随时返回表单。

use crate::tui::components::{render_hint, render_title_block, three_panel_layout};
use crate::tui::labels::{field_label, role_label};
use crate::draft::FieldId;
use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, BorderType, Cell, Row, Table},
};
use rust_i18n::t;

/// 渲染注册结果
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, footer] = three_panel_layout(area);

    render_title_block(&t!("summary_title"), &state.theme, frame, header);

    if let Some(draft) = &state.result {
        let values = [
            (FieldId::Username, draft.username.clone()),
            (FieldId::Email, draft.email.clone()),
            (FieldId::Phone, draft.phone.clone()),
            (FieldId::Role, role_label(draft.role).into_owned()),
            (FieldId::Password, draft.password.clone()),
            (FieldId::ConfirmPassword, draft.confirm_password.clone()),
        ];

        let rows: Vec<Row> = values
            .into_iter()
            .map(|(field, value)| {
                Row::new(vec![
                    Cell::from(field_label(field).into_owned()).style(state.theme.hint()),
                    Cell::from(value).style(state.theme.normal()),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(1)]).block(
            Block::bordered()
                .title(t!("app_title").into_owned())
                .border_type(BorderType::Rounded)
                .border_style(state.theme.border()),
        );
        frame.render_widget(table, body);
    }

    render_hint(&t!("summary_hint"), &state.theme, frame, footer);
}
