//! # Report Configuration Module / 报告配置模块
//!
//! Optional TOML configuration for the report generator, loaded from
//! `GherkinReport.toml` by default. Everything in it has a sensible default,
//! so the file is not required to exist.
//!
//! 报告生成器的可选 TOML 配置，默认从 `GherkinReport.toml` 加载。
//! 其中的所有内容都有合理的默认值，因此该文件不必存在。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Presentation settings for a generated report.
/// 生成报告的呈现设置。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The language for console and report output (e.g. "en", "zh-CN").
    /// Overrides the language detected from the command line or the system.
    ///
    /// 控制台和报告输出的语言（例如 "en"、"zh-CN"）。
    /// 覆盖从命令行或系统检测到的语言。
    #[serde(default)]
    pub language: Option<String>,

    /// A custom document title for the HTML report. Falls back to the
    /// localized default title when absent.
    /// HTML 报告的自定义文档标题。缺省时回退到本地化的默认标题。
    #[serde(default)]
    pub title: Option<String>,
}

/// Loads the report configuration from `path`. A missing file yields the
/// defaults; a present but unreadable or unparsable file is an error.
///
/// 从 `path` 加载报告配置。文件缺失时产生默认值；
/// 文件存在但不可读或无法解析则是错误。
pub fn load_report_config(path: &Path) -> Result<ReportConfig> {
    if !path.exists() {
        return Ok(ReportConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report config: {}", path.display()))?;
    let config: ReportConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse report config: {}", path.display()))?;
    Ok(config)
}
