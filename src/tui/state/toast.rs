//! 提示框状态
//!
//! 持有当前通知与显示起点，按通知自带时长自动消失。

use crate::notify::Notice;
use std::time::Instant;

/// 活动提示框
#[derive(Debug)]
pub struct ToastState {
    /// 通知内容
    pub notice: Notice,
    shown_at: Instant,
}

impl ToastState {
    /// 显示新通知
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            shown_at: Instant::now(),
        }
    }

    /// 是否已到期
    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= self.notice.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use std::time::Duration;

    #[test]
    fn test_zero_duration_expires_immediately() {
        let toast = ToastState::new(Notice {
            title_key: "notice_password_mismatch",
            severity: Severity::Error,
            duration: Duration::ZERO,
        });
        assert!(toast.expired());
    }

    #[test]
    fn test_fresh_toast_is_visible() {
        let toast = ToastState::new(Notice::error("notice_password_mismatch"));
        assert!(!toast.expired());
    }
}
