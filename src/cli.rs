//! CLI argument parsing with clap

use crate::tui::theme::ThemeMode;
use clap::Parser;

/// Signup Wizard - interactive account registration in the terminal
///
/// Collects name, email, phone, role, and password through a two-step
/// wizard with schema-based validation, then echoes the collected values
/// back to you. Nothing is stored and nothing leaves the machine.
#[derive(Parser, Debug)]
#[command(name = "signup-wizard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Initial color theme (toggle at runtime with F2)
    #[arg(short, long, value_enum, default_value_t = ThemeMode::Dark)]
    pub theme: ThemeMode,

    /// Override the auto-detected UI locale (e.g. "en", "zh-CN")
    #[arg(short, long, env = "SIGNUP_WIZARD_LOCALE")]
    pub locale: Option<String>,

    /// Print the acknowledgment as JSON instead of the styled report
    #[arg(long)]
    pub json: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,

    /// Verbose logging (DEBUG level, includes per-keystroke field updates)
    #[arg(short, long)]
    pub verbose: bool,
}
