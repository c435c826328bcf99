//! # Generate Command Module / 生成命令模块
//!
//! This module implements the report generation command: it loads a recorded
//! test execution document, echoes a colored summary to the console, and
//! writes the standalone HTML report.
//!
//! 此模块实现报告生成命令：加载记录的测试执行文档，
//! 在控制台回显彩色摘要，并写入独立的 HTML 报告。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::config,
    infra::{store, t},
    reporting::{
        console::{print_problem_details, print_summary},
        html::generate_html_report,
    },
};

/// Executes the generate command with the provided arguments.
///
/// # Arguments
/// * `input` - Path to the test execution JSON document
/// * `output` - Path to write the generated HTML report to
/// * `config` - Path to the optional report configuration file
/// * `cli_language` - The language pre-parsed from the command line / system
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(
    input: PathBuf,
    output: PathBuf,
    config: PathBuf,
    cli_language: String,
) -> Result<()> {
    let report_config = config::load_report_config(&config)?;

    // The config file wins over the pre-parsed CLI / system language.
    let locale = report_config
        .language
        .clone()
        .unwrap_or(cli_language);
    rust_i18n::set_locale(&locale);

    let execution = store::load_execution(&input)
        .with_context(|| t!("input_load_failed", locale = locale, path = input.display()))?;

    println!(
        "{}",
        t!(
            "loaded_execution",
            locale = locale,
            project = execution.test_project.yellow(),
            features = execution.features.len(),
            scenarios = execution.scenarios().count()
        )
    );

    print_summary(&execution, &locale);
    print_problem_details(&execution, &locale);

    println!(
        "\n{}",
        t!("generating_report", locale = locale, path = output.display())
    );
    generate_html_report(&execution, &output, report_config.title.as_deref(), &locale)?;
    println!(
        "{}",
        t!("report_written", locale = locale, path = output.display()).green()
    );

    Ok(())
}
