//! 输入状态
//!
//! 字符光标的文本编辑状态；密码字段提供等长掩码渲染。

use crate::tui::theme::config::MASK_CHAR;

/// 文本输入状态
#[derive(Debug, Default, Clone)]
pub struct InputState {
    buffer: String,
    /// 光标位置（字符数，非字节）
    cursor: usize,
}

impl InputState {
    /// 新建输入状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 载入字段当前值，光标置于行尾
    pub fn load(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.cursor = self.buffer.chars().count();
    }

    /// 清空输入
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// 获取当前值
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// 获取光标位置（字符数）
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 光标处的字节偏移
    fn byte_offset(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }

    /// 插入字符
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset();
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// 删除光标前字符
    pub fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset();
        self.buffer.remove(at);
    }

    /// 删除光标后字符
    pub fn delete_after_cursor(&mut self) {
        if self.cursor >= self.buffer.chars().count() {
            return;
        }
        let at = self.byte_offset();
        self.buffer.remove(at);
    }

    /// 光标左移
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 光标右移
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    /// 移动到行首
    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    /// 移动到行尾
    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// 按光标拆分为左右两段
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.byte_offset())
    }

    /// 按光标拆分的掩码形式（密码字段）
    pub fn masked_split_at_cursor(&self) -> (String, String) {
        let total = self.buffer.chars().count();
        let mask = |count: usize| std::iter::repeat(MASK_CHAR).take(count).collect::<String>();
        (mask(self.cursor), mask(total - self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete_multibyte() {
        let mut input = InputState::new();
        input.insert_char('홍');
        input.insert_char('길');
        input.insert_char('동');
        assert_eq!(input.value(), "홍길동");
        assert_eq!(input.cursor(), 3);

        input.move_cursor_left();
        input.delete_before_cursor();
        assert_eq!(input.value(), "홍동");
        assert_eq!(input.cursor(), 1);

        input.delete_after_cursor();
        assert_eq!(input.value(), "홍");
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut input = InputState::new();
        input.load("ab");
        input.move_cursor_left();
        input.insert_char('중');
        assert_eq!(input.value(), "a중b");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputState::new();
        input.move_cursor_left();
        input.delete_before_cursor();
        assert_eq!(input.cursor(), 0);

        input.load("xy");
        input.move_cursor_right();
        assert_eq!(input.cursor(), 2);
        input.move_cursor_to_start();
        assert_eq!(input.cursor(), 0);
        input.move_cursor_to_end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = InputState::new();
        input.load("a@b.com");
        input.move_cursor_left();
        let (left, right) = input.split_at_cursor();
        assert_eq!(left, "a@b.co");
        assert_eq!(right, "m");
    }

    #[test]
    fn test_masked_split_preserves_char_counts() {
        let mut input = InputState::new();
        input.load("비밀번호");
        input.move_cursor_left();
        let (left, right) = input.masked_split_at_cursor();
        assert_eq!(left.chars().count(), 3);
        assert_eq!(right.chars().count(), 1);
        assert!(left.chars().all(|c| c == '•'));
    }
}
