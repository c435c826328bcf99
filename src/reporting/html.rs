//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a persisted test execution as a standalone HTML
//! document: a metadata block, a scenario summary with pass/fail/inconclusive
//! rollups, and one section per feature with collapsible scenario sections.
//!
//! 此模块将持久化的测试执行渲染为独立的 HTML 文档：
//! 元数据块、带通过/失败/不确定汇总的场景摘要，
//! 以及每个功能一个区块、场景区块可折叠。

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use std::fs;
use std::path::Path;

use crate::core::models::{FeatureResult, ScenarioResult, StepResult, TestExecution};
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for collapsing scenario sections / 用于折叠场景区块的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Renders the execution tree as a complete HTML document.
///
/// This is a pure function of its inputs: the same tree, title, and locale
/// always produce byte-identical markup (timestamps are rendered in the local
/// timezone of the generating machine).
///
/// 将执行树渲染为完整的 HTML 文档。
///
/// 这是其输入的纯函数：相同的树、标题和语言环境总是产生逐字节相同的标记
/// （时间戳以生成机器的本地时区渲染）。
///
/// # Arguments / 参数
/// * `execution` - The deserialized execution tree to render
///                 要渲染的反序列化执行树
/// * `title` - An optional custom document title; the localized default is
///             used when absent
///             可选的自定义文档标题；缺省时使用本地化的默认标题
/// * `locale` - The locale to use for the report's fixed labels
///              报告固定标签使用的语言环境
pub fn render_report(execution: &TestExecution, title: Option<&str>, locale: &str) -> String {
    let title = match title {
        Some(custom) => custom.to_string(),
        None => t!("report.title", locale = locale).to_string(),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset='UTF-8'>");
    html.push_str(&format!("<title>{}</title>", escape_html(&title)));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style></head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("report.main_header", locale = locale)
    ));

    push_meta(&mut html, execution, locale);
    push_summary(&mut html, execution, locale);

    html.push_str("<div id='report'>");
    for feature in &execution.features {
        push_feature(&mut html, feature, locale);
    }
    html.push_str("</div>");

    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");
    html
}

/// Renders the execution and writes the document to `output_path`.
/// Write failures are propagated to the caller; there is no retry.
///
/// 渲染执行并将文档写入 `output_path`。写入失败传播给调用方；不重试。
pub fn generate_html_report(
    execution: &TestExecution,
    output_path: &Path,
    title: Option<&str>,
    locale: &str,
) -> Result<()> {
    let html = render_report(execution, title, locale);
    fs::write(output_path, html)
        .with_context(|| format!("Failed to write HTML report: {}", output_path.display()))?;
    Ok(())
}

/// Project identifier and run timestamps, rendered in local time.
/// 项目标识符和运行时间戳，以本地时间渲染。
fn push_meta(html: &mut String, execution: &TestExecution, locale: &str) {
    html.push_str("<div id='meta'>");
    html.push_str(&format!(
        "<p><strong>{}</strong> {}</p>",
        t!("report.meta_project", locale = locale),
        escape_html(&execution.test_project)
    ));
    html.push_str(&format!(
        "<p><strong>{}</strong> {}</p>",
        t!("report.meta_started", locale = locale),
        format_local(&execution.execution_start_timestamp)
    ));
    html.push_str(&format!(
        "<p><strong>{}</strong> {}</p>",
        t!("report.meta_ended", locale = locale),
        format_local(&execution.execution_end_timestamp)
    ));
    html.push_str("</div>");
}

/// Mutually exclusive scenario counts over the whole run.
/// 整个运行中互斥的场景计数。
fn push_summary(html: &mut String, execution: &TestExecution, locale: &str) {
    let summary = execution.summary();

    html.push_str("<div id='summary'>");
    html.push_str(&format!(
        "<h2>{}</h2>",
        t!("report.summary_header", locale = locale)
    ));
    html.push_str("<div class='summary-container'>");
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{}</span><span class='label'>{}</span></div>",
        summary.total(),
        t!("report.summary_total", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count passed-text'>{}</span><span class='label'>{}</span></div>",
        summary.passed,
        t!("report.summary_passed", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count failed-text'>{}</span><span class='label'>{}</span></div>",
        summary.failed,
        t!("report.summary_failed", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count inconclusive-text'>{}</span><span class='label'>{}</span></div>",
        summary.inconclusive,
        t!("report.summary_inconclusive", locale = locale)
    ));
    html.push_str("</div></div>");
}

fn push_feature(html: &mut String, feature: &FeatureResult, locale: &str) {
    html.push_str("<div class='feature'>");
    html.push_str(&format!(
        "<h2>{}: {}</h2>",
        t!("report.feature_prefix", locale = locale),
        escape_html(&feature.name)
    ));
    if let Some(description) = &feature.description {
        html.push_str(&format!("<pre>{}</pre>", escape_html(description)));
    }
    for scenario in &feature.scenarios {
        push_scenario(html, scenario, locale);
    }
    html.push_str("</div>");
}

/// One collapsible scenario section, expanded by default.
/// 一个可折叠的场景区块，默认展开。
fn push_scenario(html: &mut String, scenario: &ScenarioResult, locale: &str) {
    let outcome = scenario.outcome();

    html.push_str(&format!("<div class='scenario {}'>", outcome.css_class()));
    html.push_str("<h3 onclick='toggleSteps(this)'>");
    html.push_str(&escape_html(&scenario.name));
    for tag in &scenario.tags {
        html.push_str(&format!(
            " <span class='tag'>[{}]</span>",
            escape_html(tag)
        ));
    }
    html.push_str("</h3>");

    html.push_str("<div class='steps'>");
    for step in &scenario.steps {
        push_step(html, step, locale);
    }
    html.push_str("</div></div>");
}

fn push_step(html: &mut String, step: &StepResult, locale: &str) {
    html.push_str(&format!("<div class='step {}'>", step.outcome().css_class()));
    html.push_str(&format!(
        "<span class='keyword'>{}</span> <span class='text'>{}</span> &mdash; <em>{}</em> ({} ms)",
        escape_html(&step.keyword),
        escape_html(&step.text),
        step.status.as_str(),
        step.duration_in_milliseconds
    ));
    if let Some(error) = &step.error_message {
        html.push_str(&format!(
            "<div class='error'><strong>{}</strong> {}</div>",
            t!("report.error_label", locale = locale),
            escape_html(error)
        ));
    }
    html.push_str("</div>");
}

fn format_local(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
