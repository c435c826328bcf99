//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints a colorful, formatted summary of a recorded test
//! execution to the console before the HTML report is written.
//!
//! 此模块在写入 HTML 报告之前，
//! 在控制台打印一次记录的测试执行的彩色格式化摘要。

use crate::core::models::{ScenarioOutcome, ScenarioResult, TestExecution};
use crate::infra::t;
use colored::*;

/// Prints a formatted summary of the execution to the console.
/// One line per scenario with its colored outcome, followed by the
/// mutually exclusive totals.
///
/// 在控制台打印执行的格式化摘要。
/// 每个场景一行，带有彩色结果，随后是互斥的总计。
///
/// # Output Format / 输出格式
/// ```text
/// --- Scenario Summary ---
///   - Passed       | Stack :: push then pop                   |  3 steps
///   - Inconclusive | Stack :: pop an empty stack              |  1 steps
///
/// Passed: 1, Failed: 0, Inconclusive: 1, Total: 2
/// ```
pub fn print_summary(execution: &TestExecution, locale: &str) {
    println!("\n{}", t!("console.summary_banner", locale = locale).bold());

    for feature in &execution.features {
        for scenario in &feature.scenarios {
            let outcome = scenario.outcome();
            let status_colored = colorize(outcome, &outcome.status_str(locale));
            let qualified_name = format!("{} :: {}", feature.name, scenario.name);

            println!(
                "  - {:<14} | {:<40} | {:>2} {}",
                status_colored,
                qualified_name,
                scenario.steps.len(),
                t!("console.steps_suffix", locale = locale)
            );
        }
    }

    let summary = execution.summary();
    println!(
        "\n{}",
        t!(
            "console.totals",
            locale = locale,
            passed = summary.passed,
            failed = summary.failed,
            inconclusive = summary.inconclusive,
            total = summary.total()
        )
    );
}

/// Prints detailed information about every scenario that did not pass:
/// its non-successful steps with their statuses and any captured errors.
/// Returns early when all scenarios passed.
///
/// 打印每个未通过场景的详细信息：
/// 其未成功的步骤、状态以及捕获的错误。所有场景都通过时提前返回。
pub fn print_problem_details(execution: &TestExecution, locale: &str) {
    let problems: Vec<(&str, &ScenarioResult)> = execution
        .features
        .iter()
        .flat_map(|f| f.scenarios.iter().map(move |s| (f.name.as_str(), s)))
        .filter(|(_, s)| s.outcome() != ScenarioOutcome::Passed)
        .collect();

    if problems.is_empty() {
        return;
    }

    println!(
        "\n{}",
        t!("console.problem_banner", locale = locale).red().bold()
    );
    println!("{}", "-".repeat(80));

    for (i, (feature_name, scenario)) in problems.iter().enumerate() {
        let outcome = scenario.outcome();
        println!(
            "[{}/{}] {} '{} :: {}'",
            i + 1,
            problems.len(),
            colorize(outcome, &outcome.status_str(locale)),
            feature_name.cyan(),
            scenario.name.cyan()
        );

        for step in scenario.steps.iter().filter(|s| !s.is_success()) {
            println!(
                "    {} {} [{}]",
                step.keyword.bold(),
                step.text,
                step.status.as_str()
            );
            if let Some(error) = &step.error_message {
                println!("      {}", error.red());
            }
        }
        println!("{}", "-".repeat(80));
    }
}

fn colorize(outcome: ScenarioOutcome, label: &str) -> ColoredString {
    match outcome {
        ScenarioOutcome::Passed => label.green(),
        ScenarioOutcome::Failed => label.red(),
        ScenarioOutcome::Inconclusive => label.yellow(),
    }
}
