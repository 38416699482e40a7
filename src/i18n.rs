//! Internationalization (i18n) module
//!
//! Locale detection and initialization for the UI strings.
//! Supports English and Chinese Simplified; log messages remain in English.

/// Locales shipped with the application
pub const SUPPORTED_LOCALES: &[&str] = &["en", "zh-CN"];

/// Initialize the active locale, honoring an explicit override
pub fn init_locale(override_locale: Option<&str>) {
    let locale = match override_locale {
        Some(tag) => map_locale_tag(tag).to_string(),
        None => detect_locale(),
    };
    rust_i18n::set_locale(&locale);
}

/// Detect the system locale, preferring sys-locale over raw env vars
fn detect_locale() -> String {
    let tag = sys_locale::get_locale().unwrap_or_else(|| {
        std::env::var("LANG")
            .or_else(|_| std::env::var("LC_ALL"))
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .unwrap_or_default()
    });
    map_locale_tag(&tag).to_string()
}

/// Map a BCP 47-ish tag onto a shipped locale
fn map_locale_tag(tag: &str) -> &'static str {
    let tag = tag.to_lowercase();
    if tag.starts_with("zh") || tag.contains("chinese") || tag.contains("hans") {
        "zh-CN"
    } else {
        "en"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_tag_mapping() {
        assert_eq!(map_locale_tag("zh-CN"), "zh-CN");
        assert_eq!(map_locale_tag("zh_TW.UTF-8"), "zh-CN");
        assert_eq!(map_locale_tag("cmn-Hans"), "zh-CN");
        assert_eq!(map_locale_tag("en-US"), "en");
        assert_eq!(map_locale_tag("ko-KR"), "en");
        assert_eq!(map_locale_tag(""), "en");
    }

    #[test]
    fn test_detection_does_not_panic() {
        let locale = detect_locale();
        assert!(SUPPORTED_LOCALES.contains(&locale.as_str()));
    }
}
