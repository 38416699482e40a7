//! Signup Wizard - interactive account registration in the terminal
//!
//! This library provides a two-step registration wizard with:
//! - A declarative, schema-based validator (required fields, email shape,
//!   role membership)
//! - A form state controller with per-field dirty/invalid tracking and an
//!   explicit two-state step machine
//! - Transient toast notifications for submit-time feedback
//! - A ratatui front end with a dark/light theme toggle
//! - Localized UI strings (English and Chinese Simplified)
//!
//! Nothing is persisted and nothing leaves the machine: submission ends in
//! a local acknowledgment of the collected values.

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod cli;
pub mod draft;
pub mod error;
pub mod form;
pub mod i18n;
pub mod notify;
pub mod schema;
pub mod tui;

pub use cli::Cli;
pub use draft::{FieldId, RegistrationDraft, Role};
pub use error::{Error, Result};
pub use form::{FieldState, FormController, WizardStep};
pub use i18n::init_locale;
pub use notify::{Notice, Severity};
pub use schema::{FieldStatus, Schema};
pub use tui::{Theme, ThemeMode, TuiApp};
