//! # Gherkin Report Library / Gherkin Report 库
//!
//! This library provides the core functionality for the Gherkin Report tool:
//! it records the lifecycle events of a behavior-driven test run as a
//! hierarchical result tree, persists the tree as a JSON document, and
//! renders a persisted document as a standalone HTML report.
//!
//! 此库为 Gherkin Report 工具提供核心功能：
//! 它将行为驱动测试运行的生命周期事件记录为分层结果树，
//! 将树持久化为 JSON 文档，并将持久化的文档渲染为独立的 HTML 报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Result model, lifecycle-event recorder, and configuration
//! - `infra` - Infrastructure services like execution-document storage
//! - `reporting` - Test result reporting and visualization
//! - `cli` - Command-line interface
//!
//! - `core` - 结果模型、生命周期事件记录器和配置
//! - `infra` - 基础设施服务，如执行文档存储
//! - `reporting` - 测试结果报告和可视化
//! - `cli` - 命令行接口

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::models;
pub use crate::core::recorder;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
