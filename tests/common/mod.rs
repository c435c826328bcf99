// Shared test helpers for integration tests
use chrono::{TimeZone, Utc};
use gherkin_report::models::{
    FeatureResult, ScenarioExecutionStatus, ScenarioResult, StepResult, TestExecution,
};

/// Builds a step with the given status and no error message.
pub fn step(status: ScenarioExecutionStatus) -> StepResult {
    StepResult {
        keyword: "Given".to_string(),
        text: "a step".to_string(),
        status,
        duration_in_milliseconds: 0,
        error_message: None,
    }
}

/// Builds a scenario around the given steps.
pub fn scenario(name: &str, steps: Vec<StepResult>) -> ScenarioResult {
    ScenarioResult {
        name: name.to_string(),
        tags: vec![],
        steps,
    }
}

/// Builds a single-feature execution around the given scenarios.
pub fn execution(scenarios: Vec<ScenarioResult>) -> TestExecution {
    TestExecution {
        test_project: "SampleProject".to_string(),
        execution_start_timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap(),
        execution_end_timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 3).unwrap(),
        features: vec![FeatureResult {
            name: "Sample".to_string(),
            description: None,
            relative_path: "Features".to_string(),
            scenarios,
        }],
    }
}

/// The concrete "Stack" run: one feature, one scenario, three passing steps.
pub fn stack_execution() -> TestExecution {
    let steps = vec![
        StepResult {
            keyword: "Given".to_string(),
            text: "an empty stack".to_string(),
            status: ScenarioExecutionStatus::Ok,
            duration_in_milliseconds: 0,
            error_message: None,
        },
        StepResult {
            keyword: "When".to_string(),
            text: "1 is pushed".to_string(),
            status: ScenarioExecutionStatus::Ok,
            duration_in_milliseconds: 0,
            error_message: None,
        },
        StepResult {
            keyword: "Then".to_string(),
            text: "the current stack size is 1".to_string(),
            status: ScenarioExecutionStatus::Ok,
            duration_in_milliseconds: 0,
            error_message: None,
        },
    ];

    TestExecution {
        test_project: "StackSample".to_string(),
        execution_start_timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap(),
        execution_end_timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 3).unwrap(),
        features: vec![FeatureResult {
            name: "Stack".to_string(),
            description: Some("A persistent stack of integers.".to_string()),
            relative_path: "Features".to_string(),
            scenarios: vec![ScenarioResult {
                name: "push then pop".to_string(),
                tags: vec!["smoke".to_string()],
                steps,
            }],
        }],
    }
}
