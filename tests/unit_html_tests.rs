//! # HTML Renderer Unit Tests / HTML 渲染器单元测试
//!
//! This module contains unit tests for the HTML report renderer: document
//! structure, summary classification, ordering, and escaping.
//!
//! 此模块包含 HTML 报告渲染器的单元测试：
//! 文档结构、摘要分类、顺序和转义。

mod common;

use gherkin_report::core::models::ScenarioExecutionStatus;
use gherkin_report::reporting::html::render_report;

#[cfg(test)]
mod document_structure_tests {
    use super::*;

    #[test]
    fn test_stack_run_renders_expected_summary() {
        let html = render_report(&common::stack_execution(), None, "en");

        assert!(html.contains("<title>Test Execution Report</title>"));
        assert!(html.contains("<h2>Feature: Stack</h2>"));
        assert!(html.contains("<span class='count'>1</span>"));
        assert!(html.contains("<span class='count passed-text'>1</span>"));
        assert!(html.contains("<span class='count failed-text'>0</span>"));
        assert!(html.contains("<span class='count inconclusive-text'>0</span>"));
    }

    #[test]
    fn test_metadata_block_shows_the_project() {
        let html = render_report(&common::stack_execution(), None, "en");
        assert!(html.contains("<div id='meta'>"));
        assert!(html.contains("StackSample"));
    }

    #[test]
    fn test_feature_description_is_rendered_preformatted() {
        let html = render_report(&common::stack_execution(), None, "en");
        assert!(html.contains("<pre>A persistent stack of integers.</pre>"));
    }

    #[test]
    fn test_scenario_heading_carries_bracketed_tags_in_order() {
        let mut execution = common::stack_execution();
        execution.features[0].scenarios[0].tags =
            vec!["smoke".to_string(), "fast".to_string()];

        let html = render_report(&execution, None, "en");
        let smoke = html.find("<span class='tag'>[smoke]</span>").unwrap();
        let fast = html.find("<span class='tag'>[fast]</span>").unwrap();
        assert!(smoke < fast);
    }

    #[test]
    fn test_steps_render_keyword_text_status_and_duration() {
        let html = render_report(&common::stack_execution(), None, "en");
        assert!(html.contains("<span class='keyword'>Given</span>"));
        assert!(html.contains("<span class='text'>an empty stack</span>"));
        assert!(html.contains("<em>Ok</em>"));
        assert!(html.contains("(0 ms)"));
    }

    #[test]
    fn test_steps_container_is_expanded_by_default() {
        let html = render_report(&common::stack_execution(), None, "en");
        assert!(html.contains("<div class='steps'>"));
        assert!(!html.contains("<div class='steps collapsed'>"));
        // The toggle script rides along in the document.
        assert!(html.contains("toggleSteps"));
    }

    #[test]
    fn test_custom_title_overrides_the_default() {
        let html = render_report(&common::stack_execution(), Some("Living Doc"), "en");
        assert!(html.contains("<title>Living Doc</title>"));
        assert!(!html.contains("<title>Test Execution Report</title>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let execution = common::stack_execution();
        assert_eq!(
            render_report(&execution, None, "en"),
            render_report(&execution, None, "en")
        );
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_undefined_step_scenario_counts_as_inconclusive() {
        let mut execution = common::stack_execution();
        execution.features[0].scenarios.push(common::scenario(
            "reverse the stack",
            vec![common::step(ScenarioExecutionStatus::UndefinedStep)],
        ));

        let html = render_report(&execution, None, "en");
        // Passed=1, Failed=0, Inconclusive=1, Total=2; the first scenario's
        // classification is unaffected.
        assert!(html.contains("<span class='count'>2</span>"));
        assert!(html.contains("<span class='count passed-text'>1</span>"));
        assert!(html.contains("<span class='count failed-text'>0</span>"));
        assert!(html.contains("<span class='count inconclusive-text'>1</span>"));
        assert!(html.contains("<div class='scenario Passed'>"));
        assert!(html.contains("<div class='scenario Inconclusive'>"));
    }

    #[test]
    fn test_binding_error_scenario_is_styled_failed() {
        let execution = common::execution(vec![common::scenario(
            "unbound",
            vec![common::step(ScenarioExecutionStatus::BindingError)],
        )]);

        let html = render_report(&execution, None, "en");
        assert!(html.contains("<div class='scenario Failed'>"));
        assert!(html.contains("<div class='step Failed'>"));
        assert!(html.contains("<span class='count failed-text'>1</span>"));
    }

    #[test]
    fn test_error_message_is_shown_for_the_failing_step() {
        let mut failing = common::step(ScenarioExecutionStatus::TestError);
        failing.error_message = Some("expected 1 but found 0".to_string());
        let execution = common::execution(vec![common::scenario("failing", vec![failing])]);

        let html = render_report(&execution, None, "en");
        assert!(html.contains("expected 1 but found 0"));
        assert!(html.contains("<div class='error'>"));
    }
}

#[cfg(test)]
mod escaping_tests {
    use super::*;

    #[test]
    fn test_step_text_is_html_escaped() {
        let mut step = common::step(ScenarioExecutionStatus::Ok);
        step.text = "<script>alert('x')</script> & more".to_string();
        let execution = common::execution(vec![common::scenario("escaped", vec![step])]);

        let html = render_report(&execution, None, "en");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn test_error_message_is_html_escaped() {
        let mut step = common::step(ScenarioExecutionStatus::TestError);
        step.error_message = Some("expected <1> & got \"0\"".to_string());
        let execution = common::execution(vec![common::scenario("escaped", vec![step])]);

        let html = render_report(&execution, None, "en");
        assert!(html.contains("expected &lt;1&gt; &amp; got &quot;0&quot;"));
    }
}
