//! Signup Wizard - interactive account registration in the terminal
//!
//! Runs the Ratatui wizard, then echoes the collected values back to the
//! user. There is no backend, no persistence, and no network access.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use signup_wizard::tui::labels::role_label;
use signup_wizard::{Cli, RegistrationDraft, TuiApp, init_locale};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize i18n for this binary
rust_i18n::i18n!("locales", fallback = "en");

// CLI Output Module
mod cli_output {
    //! CLI 输出美化模块
    //!
    //! 为注册结果回显提供统一的颜色和格式样式。

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;

    /// CLI 主题颜色
    pub struct CliTheme;

    impl CliTheme {
        /// 提示颜色（暗灰色）
        pub const HINT: Color = Color::DarkGrey;
        /// 强调颜色（青色）
        pub const ACCENT: Color = Color::Cyan;
    }

    /// 打印分隔线
    pub fn print_separator() {
        let _ = stdout().execute(Print(&format!("{}\n", "─".repeat(60))));
    }

    /// 打印居中的标题
    pub fn print_title(title: &str) {
        let width = 60;
        let padding = (width - title.len()) / 2;
        let left_pad = " ".repeat(padding.saturating_sub(1));

        let _ = stdout().execute(Print(&format!(
            "{}{} {}{}\n",
            left_pad,
            "╔".bold().stylize(),
            title.bold().stylize(),
            "╗".bold().stylize(),
        )));
        let _ = stdout().execute(Print("\n"));
    }

    /// 打印提示消息
    pub fn print_hint(msg: &str) {
        let _ = stdout().execute(Print(style("→ ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印键值对
    pub fn print_key_value(key: &str, value: &str, value_color: Option<Color>) {
        let key_styled = style(key).with(CliTheme::HINT);
        let value_styled = match value_color {
            Some(color) => style(value).with(color),
            None => style(value).bold(),
        };
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(key_styled));
        let _ = stdout().execute(Print(": "));
        let _ = stdout().execute(Print(value_styled));
        let _ = stdout().execute(Print("\n"));
    }

    /// 打印空行
    pub fn print_blank() {
        let _ = stdout().execute(Print("\n"));
    }
}

/// Convenience macro for translation
macro_rules! t {
    ($key:expr) => {
        rust_i18n::t!($key)
    };
    ($key:expr, $($tt:tt)*) => {
        rust_i18n::t!($key, $($tt)*)
    };
}

fn main() -> Result<()> {
    // Parse CLI arguments and initialize the locale before any UI output
    let cli = Cli::parse();
    init_locale(cli.locale.as_deref());

    // File-only logging: the TUI owns the terminal while it runs
    let exe_dir = get_executable_dir()?;
    let log_dir = exe_dir.join("Log");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("Signup_{}.log", timestamp));
    let _guard = setup_file_only_logging(&cli, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Signup Wizard starting"
    );

    let mut app = TuiApp::new(cli.theme)?;
    let result = app.run()?;

    // Terminal is restored; acknowledge the collected values (or the lack
    // thereof) on stdout
    match result {
        Some(draft) => {
            info!(username = %draft.username, "registration acknowledged");
            echo_registration(&cli, &draft)?;
        }
        None => {
            info!("user quit without registering");
            cli_output::print_hint(&t!("cli_cancelled"));
        }
    }

    info!(log_file = %log_path.display(), "session complete");
    Ok(())
}

/// Echo the collected draft back to the user — the acknowledgment this
/// system produces instead of creating an account anywhere
fn echo_registration(cli: &Cli, draft: &RegistrationDraft) -> Result<()> {
    if cli.json {
        println!("{}", draft.to_json()?);
        return Ok(());
    }

    use cli_output::*;

    print_separator();
    print_title(&t!("cli_registration_complete"));
    print_separator();
    print_blank();
    print_key_value(&t!("field_username"), &draft.username, None);
    print_key_value(&t!("field_email"), &draft.email, None);
    print_key_value(&t!("field_phone"), &draft.phone, None);
    print_key_value(
        &t!("field_role"),
        &role_label(draft.role),
        Some(CliTheme::ACCENT),
    );
    print_key_value(&t!("field_password"), &draft.password, None);
    print_key_value(&t!("field_confirm_password"), &draft.confirm_password, None);
    print_blank();

    Ok(())
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Setup logging for interactive mode (file only, no console)
fn setup_file_only_logging(cli: &Cli, log_path: &Path) -> Result<Option<WorkerGuard>> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    Ok(Some(guard))
}
