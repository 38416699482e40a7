//! 焦点状态
//!
//! 管理当前步骤内字段与操作按钮之间的焦点切换。

use crate::draft::FieldId;
use crate::form::WizardStep;
use ratatui::widgets::ListState;

/// 表单行：字段或操作按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// 输入字段
    Field(FieldId),
    /// 下一步按钮
    Next,
    /// 上一步按钮
    Prev,
    /// 提交按钮
    Submit,
}

/// 当前步骤的行列表：字段在前，操作按钮附加在末尾
pub fn rows_for_step(step: WizardStep) -> Vec<FormRow> {
    let mut rows: Vec<FormRow> = step.fields().iter().copied().map(FormRow::Field).collect();
    match step {
        WizardStep::Profile => rows.push(FormRow::Next),
        WizardStep::Credentials => {
            rows.push(FormRow::Submit);
            rows.push(FormRow::Prev);
        }
    }
    rows
}

/// 焦点状态
#[derive(Debug)]
pub struct FocusState {
    /// List 组件状态
    pub list_state: ListState,
    /// 行数
    pub count: usize,
}

impl FocusState {
    /// 为指定步骤创建焦点状态，焦点落在首行
    pub fn for_step(step: WizardStep) -> Self {
        Self {
            list_state: {
                let mut state = ListState::default();
                state.select(Some(0));
                state
            },
            count: rows_for_step(step).len(),
        }
    }

    /// 获取当前选中索引
    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// 焦点移到下一行
    pub fn next(&mut self) {
        if self.count == 0 {
            return;
        }
        let index = (self.selected() + 1) % self.count;
        self.list_state.select(Some(index));
    }

    /// 焦点移到上一行
    pub fn prev(&mut self) {
        if self.count == 0 {
            return;
        }
        let index = if self.selected() == 0 {
            self.count - 1
        } else {
            self.selected() - 1
        };
        self.list_state.select(Some(index));
    }
}
