//! 本地化标签映射
//!
//! 用于将枚举/字段映射为稳定的翻译键，避免依赖 Debug 输出。

use crate::draft::{FieldId, Role};
use crate::form::WizardStep;
use rust_i18n::t;
use std::borrow::Cow;

/// 字段标签
pub fn field_label(field: FieldId) -> Cow<'static, str> {
    match field {
        FieldId::Username => t!("field_username"),
        FieldId::Email => t!("field_email"),
        FieldId::Phone => t!("field_phone"),
        FieldId::Role => t!("field_role"),
        FieldId::Password => t!("field_password"),
        FieldId::ConfirmPassword => t!("field_confirm_password"),
    }
}

/// 字段占位符（仅明文输入字段）
pub fn field_placeholder(field: FieldId) -> Option<Cow<'static, str>> {
    match field {
        FieldId::Username => Some(t!("placeholder_username")),
        FieldId::Email => Some(t!("placeholder_email")),
        FieldId::Phone => Some(t!("placeholder_phone")),
        _ => None,
    }
}

/// 角色标签
pub fn role_label(role: Option<Role>) -> Cow<'static, str> {
    match role {
        Some(Role::Admin) => t!("role_admin"),
        Some(Role::User) => t!("role_user"),
        None => t!("role_unset"),
    }
}

/// 步骤标签
pub fn step_label(step: WizardStep) -> Cow<'static, str> {
    match step {
        WizardStep::Profile => t!("step_profile"),
        WizardStep::Credentials => t!("step_credentials"),
    }
}

/// 校验/通知消息标签
pub fn message_label(key: &'static str) -> Cow<'static, str> {
    t!(key)
}
