//! Records a small simulated behavior-driven run and saves it as
//! `TestExecution.json`, ready to be rendered with:
//!
//! ```text
//! gherkin-report --input TestExecution.json --output report.html
//! ```
//!
//! The system under test is a toy persistent stack; the recorder itself
//! never depends on it.

use anyhow::Result;
use gherkin_report::core::recorder::{
    FeatureInfo, RunRecorder, RunnerStepStatus, ScenarioInfo, StepKind,
};
use gherkin_report::infra::store;
use std::path::Path;

/// A tiny persistent stack of integers.
enum Stack {
    Empty,
    Head(i32, Box<Stack>),
}

impl Stack {
    fn push(self, value: i32) -> Stack {
        Stack::Head(value, Box::new(self))
    }

    fn popped(self) -> Option<Stack> {
        match self {
            Stack::Empty => None,
            Stack::Head(_, tail) => Some(*tail),
        }
    }

    fn size(&self) -> usize {
        match self {
            Stack::Empty => 0,
            Stack::Head(_, tail) => tail.size() + 1,
        }
    }
}

fn size_check(stack: &Stack, expected: usize) -> (RunnerStepStatus, Option<String>) {
    if stack.size() == expected {
        (RunnerStepStatus::Ok, None)
    } else {
        (
            RunnerStepStatus::TestError,
            Some(format!(
                "expected stack size {} but found {}",
                expected,
                stack.size()
            )),
        )
    }
}

fn main() -> Result<()> {
    gherkin_report::init();

    let mut recorder = RunRecorder::new("StackSample");
    recorder.on_run_start();
    recorder.on_feature_start(&FeatureInfo {
        title: "Stack",
        description: Some("A persistent stack of integers."),
        folder_path: "Features",
    })?;

    // Scenario: push then pop
    let tags = vec!["smoke".to_string()];
    recorder.on_scenario_start(&ScenarioInfo {
        title: "push then pop",
        tags: &tags,
    })?;

    recorder.on_step_start("s1-given")?;
    let stack = Stack::Empty;
    recorder.on_step_end(
        "s1-given",
        StepKind::Given,
        "an empty stack",
        RunnerStepStatus::Ok,
        None,
    )?;

    recorder.on_step_start("s1-when")?;
    let stack = stack.push(1);
    recorder.on_step_end(
        "s1-when",
        StepKind::When,
        "1 is pushed",
        RunnerStepStatus::Ok,
        None,
    )?;

    recorder.on_step_start("s1-then")?;
    let (status, error) = size_check(&stack, 1);
    recorder.on_step_end(
        "s1-then",
        StepKind::Then,
        "the current stack size is 1",
        status,
        error.as_deref(),
    )?;

    // Scenario: pop after push
    recorder.on_scenario_start(&ScenarioInfo {
        title: "pop after push",
        tags: &[],
    })?;

    recorder.on_step_start("s2-given")?;
    let stack = Stack::Empty.push(7);
    recorder.on_step_end(
        "s2-given",
        StepKind::Given,
        "a stack holding one item",
        RunnerStepStatus::Ok,
        None,
    )?;

    recorder.on_step_start("s2-when")?;
    let (stack, status, error) = match stack.popped() {
        Some(tail) => (tail, RunnerStepStatus::Ok, None),
        None => (
            Stack::Empty,
            RunnerStepStatus::TestError,
            Some("stack is not initialized".to_string()),
        ),
    };
    recorder.on_step_end(
        "s2-when",
        StepKind::When,
        "one item is popped",
        status,
        error.as_deref(),
    )?;

    recorder.on_step_start("s2-then")?;
    let (status, error) = size_check(&stack, 0);
    recorder.on_step_end(
        "s2-then",
        StepKind::Then,
        "the current stack size is 0",
        status,
        error.as_deref(),
    )?;

    // Scenario: no step definition matches this one
    recorder.on_scenario_start(&ScenarioInfo {
        title: "reverse the stack",
        tags: &[],
    })?;

    recorder.on_step_start("s3-when")?;
    recorder.on_step_end(
        "s3-when",
        StepKind::When,
        "the stack is reversed",
        RunnerStepStatus::UndefinedStep,
        None,
    )?;

    recorder.on_run_end()?;
    let execution = recorder.into_execution()?;
    store::save_execution(&execution, Path::new("TestExecution.json"))?;

    println!(
        "Recorded {} scenario(s) to TestExecution.json",
        execution.scenarios().count()
    );
    Ok(())
}
