//! 屏幕渲染模块

pub mod exit;
pub mod form;
pub mod summary;
